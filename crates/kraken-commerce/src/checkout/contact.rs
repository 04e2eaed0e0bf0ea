//! Contact details collected on the payment tab.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Where to deliver a digital order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Email address (required).
    pub email: String,
    /// Telegram handle, e.g. "@username".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
}

impl Contact {
    /// Create a contact with just an email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            telegram: None,
        }
    }

    /// Attach a Telegram handle. Blank handles are dropped.
    pub fn with_telegram(mut self, handle: impl Into<String>) -> Self {
        let handle = handle.into();
        self.telegram = if handle.trim().is_empty() {
            None
        } else {
            Some(handle)
        };
        self
    }

    /// Check the email and the optional Telegram handle.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        };
        if !valid_email {
            return Err(CommerceError::ValidationError(format!(
                "invalid email: {:?}",
                self.email
            )));
        }

        if let Some(handle) = &self.telegram {
            let handle = handle.trim();
            if !handle.starts_with('@') || handle.len() < 2 {
                return Err(CommerceError::ValidationError(format!(
                    "invalid telegram handle: {:?}",
                    handle
                )));
            }
        }

        Ok(())
    }
}
