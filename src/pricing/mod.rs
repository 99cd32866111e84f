//! Pricing Module
//!
//! The cart and checkout pricing computation:
//! - Domain models (LineItem, ShippingTier, PricingConfig, OrderTotals)
//! - The pure totals calculator
//! - Display formatting for amounts

pub mod calculator;
pub mod errors;
pub mod format;
pub mod models;

// Re-export commonly used types and functions
pub use calculator::{compute_totals, validate_line_items};
pub use errors::PricingError;
pub use format::{display_totals, format_amount};
pub use models::{LineItem, OrderTotals, PricingConfig, ShippingTier, TotalsDisplay};
