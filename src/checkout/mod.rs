//! Checkout Domain Module
//!
//! Order placement and the account order history:
//! - Order models (confirmation, status timeline, payment method)
//! - Helpers (order numbers, delivery estimates, placement)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;

pub use handlers::routes;
