//! Built-in KRAKEN assortment.

use crate::catalog::Product;
use crate::money::Money;

/// The six records the storefront ships with, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1u32, "Premium Digital Product", Money::rub(2499), "Цифровые товары")
            .with_glyph("🎯"),
        Product::new(2u32, "Exclusive Access Pass", Money::rub(4999), "Доступ").with_glyph("🔐"),
        Product::new(3u32, "VIP Membership", Money::rub(9999), "Премиум").with_glyph("⭐"),
        Product::new(4u32, "Special Bundle", Money::rub(3499), "Наборы").with_glyph("📦"),
        Product::new(5u32, "Pro Tools Kit", Money::rub(5999), "Инструменты").with_glyph("🛠️"),
        Product::new(6u32, "Ultra Package", Money::rub(7499), "Премиум")
            .with_glyph("💎")
            .out_of_stock(),
    ]
}
