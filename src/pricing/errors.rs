//! Pricing Errors

use thiserror::Error;

/// Reasons a pricing computation is rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),
}

impl PricingError {
    pub fn invalid<T: AsRef<str>>(message: T) -> Self {
        Self::InvalidInput(message.as_ref().to_string())
    }
}
