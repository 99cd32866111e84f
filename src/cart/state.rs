//! Storefront State Management
//!
//! This module manages the in-memory application state: open carts, placed
//! orders and the pricing settings every handler prices against.

use crate::checkout::models::OrderConfirmation;
use crate::pricing::{LineItem, PricingConfig};
use dashmap::DashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing carts, orders and pricing settings
pub struct AppState {
    /// In-memory storage for carts, keyed by cart_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, Vec<LineItem>>,

    /// Placed orders, keyed by order number.
    pub orders: DashMap<String, OrderConfirmation>,

    /// Fees, threshold and tax rate used for every quote.
    pub pricing: PricingConfig,

    order_seq: AtomicU64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl AppState {
    /// Creates a new AppState with no carts or orders
    pub fn new(pricing: PricingConfig) -> Self {
        tracing::debug!(?pricing, "initializing storefront state");

        Self {
            carts: DashMap::new(),
            orders: DashMap::new(),
            pricing,
            order_seq: AtomicU64::new(0),
        }
    }

    /// Allocates the next order sequence number, starting at 1
    pub fn next_order_sequence(&self) -> u64 {
        self.order_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}
