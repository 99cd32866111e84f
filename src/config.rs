//! Storefront Configuration
//!
//! Settings are read from the environment (a `.env` file is loaded first
//! when present). Anything unset falls back to the storefront defaults.

use crate::pricing::PricingConfig;
use rust_decimal::Decimal;
use std::{net::SocketAddr, str::FromStr};
use thiserror::Error;

pub const ENV_ADDR: &str = "STOREFRONT_ADDR";
pub const ENV_FREE_SHIPPING_THRESHOLD: &str = "STOREFRONT_FREE_SHIPPING_THRESHOLD";
pub const ENV_TAX_RATE: &str = "STOREFRONT_TAX_RATE";
pub const ENV_STANDARD_FEE: &str = "STOREFRONT_STANDARD_FEE";
pub const ENV_EXPRESS_FEE: &str = "STOREFRONT_EXPRESS_FEE";
pub const ENV_SAME_DAY_FEE: &str = "STOREFRONT_SAME_DAY_FEE";

const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{key} must not be negative")]
    Negative { key: &'static str },

    #[error("{key} must be at most {max}")]
    TooLarge { key: &'static str, max: Decimal },
}

/// Runtime settings for the storefront server
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    pub pricing: PricingConfig,
}

impl StorefrontConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingConfig::default();

        let bind_addr = parse_or(&lookup, ENV_ADDR, || {
            SocketAddr::from_str(DEFAULT_ADDR).map_err(|_| ConfigError::InvalidValue {
                key: ENV_ADDR,
                value: DEFAULT_ADDR.to_string(),
            })
        })?;

        let pricing = PricingConfig {
            free_shipping_threshold: amount_or(
                &lookup,
                ENV_FREE_SHIPPING_THRESHOLD,
                defaults.free_shipping_threshold,
            )?,
            tax_rate: rate_or(&lookup, ENV_TAX_RATE, defaults.tax_rate)?,
            standard_fee: amount_or(&lookup, ENV_STANDARD_FEE, defaults.standard_fee)?,
            express_fee: amount_or(&lookup, ENV_EXPRESS_FEE, defaults.express_fee)?,
            same_day_fee: amount_or(&lookup, ENV_SAME_DAY_FEE, defaults.same_day_fee)?,
        };

        Ok(Self { bind_addr, pricing })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    key: &'static str,
    default: impl FnOnce() -> Result<T, ConfigError>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => default(),
    }
}

fn amount_or<F>(lookup: &F, key: &'static str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let amount: Decimal = parse_or(lookup, key, || Ok(default))?;
    if amount < Decimal::ZERO {
        return Err(ConfigError::Negative { key });
    }
    Ok(amount)
}

/// Like `amount_or`, but the value is a fraction and may not exceed 1.
fn rate_or<F>(lookup: &F, key: &'static str, default: Decimal) -> Result<Decimal, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rate = amount_or(lookup, key, default)?;
    if rate > Decimal::ONE {
        return Err(ConfigError::TooLarge {
            key,
            max: Decimal::ONE,
        });
    }
    Ok(rate)
}
