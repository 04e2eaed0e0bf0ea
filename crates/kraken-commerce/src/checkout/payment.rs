//! Payment methods offered on the payment tab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// A payment method. None of these is wired to a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Crypto,
    EWallet,
    Transfer,
}

impl PaymentMethod {
    /// Every method, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Crypto,
        PaymentMethod::EWallet,
        PaymentMethod::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Crypto => "crypto",
            PaymentMethod::EWallet => "e-wallet",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "💳",
            PaymentMethod::Crypto => "₿",
            PaymentMethod::EWallet => "💰",
            PaymentMethod::Transfer => "🔄",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Карта",
            PaymentMethod::Crypto => "Криптовалюта",
            PaymentMethod::EWallet => "Электронные кошельки",
            PaymentMethod::Transfer => "Переводы",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "crypto" => Ok(PaymentMethod::Crypto),
            "e-wallet" | "ewallet" => Ok(PaymentMethod::EWallet),
            "transfer" => Ok(PaymentMethod::Transfer),
            _ => Err(CommerceError::UnknownPaymentMethod(s.to_string())),
        }
    }
}
