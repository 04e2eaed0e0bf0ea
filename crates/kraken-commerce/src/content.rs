//! Static storefront copy: branding, the delivery tab and payment methods.

use serde::{Deserialize, Serialize};

use crate::checkout::PaymentMethod;

/// One highlighted point on the delivery tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryFeature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The delivery tab, in display order.
pub const DELIVERY_FEATURES: [DeliveryFeature; 3] = [
    DeliveryFeature {
        glyph: "🚀",
        title: "Мгновенная доставка",
        description: "Все цифровые товары доставляются моментально после оплаты на вашу электронную почту",
    },
    DeliveryFeature {
        glyph: "🔒",
        title: "Безопасность",
        description: "Все данные защищены end-to-end шифрованием. Гарантия конфиденциальности",
    },
    DeliveryFeature {
        glyph: "💬",
        title: "Поддержка 24/7",
        description: "Круглосуточная техническая поддержка для решения любых вопросов",
    },
];

/// Branding shown in the header, hero and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreInfo {
    /// Store name.
    pub name: String,
    /// Footer tagline.
    pub tagline: String,
    /// Hero headline on the main tab.
    pub headline: String,
    /// Hero subheading on the main tab.
    pub subheading: String,
    /// Support availability note.
    pub support: String,
}

impl StoreInfo {
    /// Footer copyright line.
    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. Все права защищены.", year, self.name)
    }

    /// Footer lines: name with tagline, support note, copyright.
    pub fn footer(&self, year: i32) -> [String; 3] {
        [
            format!("{} · {}", self.name, self.tagline),
            format!("Поддержка: {}", self.support),
            self.copyright(year),
        ]
    }

    /// Payment methods with their captions, as listed on the payment tab.
    pub fn payment_methods(&self) -> impl Iterator<Item = (PaymentMethod, String)> {
        PaymentMethod::ALL
            .into_iter()
            .map(|m| (m, format!("{} {}", m.glyph(), m.caption())))
    }
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "KRAKEN".to_string(),
            tagline: "Премиум маркетплейс цифровых товаров и услуг".to_string(),
            headline: "Премиум маркетплейс".to_string(),
            subheading: "Эксклюзивные цифровые товары и услуги высочайшего качества".to_string(),
            support: "Доступна 24/7".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branding() {
        let info = StoreInfo::default();
        assert_eq!(info.name, "KRAKEN");
        assert_eq!(info.copyright(2024), "© 2024 KRAKEN. Все права защищены.");
    }

    #[test]
    fn test_footer() {
        let info: StoreInfo = toml::from_str(r#"support = "По будням""#).unwrap();
        let [brand, support, copyright] = info.footer(2026);
        assert_eq!(brand, "KRAKEN · Премиум маркетплейс цифровых товаров и услуг");
        assert_eq!(support, "Поддержка: По будням");
        assert_eq!(copyright, "© 2026 KRAKEN. Все права защищены.");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let info: StoreInfo = toml::from_str(r#"name = "OCTOPUS""#).unwrap();
        assert_eq!(info.name, "OCTOPUS");
        assert_eq!(info.support, "Доступна 24/7");
    }

    #[test]
    fn test_payment_method_captions() {
        let captions: Vec<String> = StoreInfo::default()
            .payment_methods()
            .map(|(_, caption)| caption)
            .collect();
        assert_eq!(
            captions,
            vec!["💳 Карта", "₿ Криптовалюта", "💰 Электронные кошельки", "🔄 Переводы"]
        );
    }

    #[test]
    fn test_delivery_features() {
        assert_eq!(DELIVERY_FEATURES.len(), 3);
        assert_eq!(DELIVERY_FEATURES[2].title, "Поддержка 24/7");
    }
}
