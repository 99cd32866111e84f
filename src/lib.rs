//! Furniture Storefront Library
//!
//! Cart and checkout pricing for the furniture storefront, with the HTTP
//! surface the storefront UI calls for carts, orders and collection pages.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
