//! Shopping Cart Domain Models
//!
//! Request and response bodies for the cart endpoints. Cart contents
//! themselves are `LineItem`s from the pricing module.

use crate::pricing::{LineItem, OrderTotals, ShippingTier, TotalsDisplay};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Inputs
// =============================================================================

/// Input for replacing or merging cart contents
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    /// List of items to add to the cart
    pub items: Vec<LineItem>,

    /// Optional cart identifier
    pub cart_id: Option<String>,
}

/// Input for the quantity stepper on the cart page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityInput {
    pub cart_id: String,
    pub item_id: String,

    /// New quantity; 0 removes the item
    pub quantity: i64,
}

/// Input for removing a single item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemInput {
    pub cart_id: String,
    pub item_id: String,
}

/// Input for pricing a cart with a given shipping tier
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub cart_id: String,

    /// Defaults to standard shipping, as on the cart page
    #[serde(default)]
    pub shipping_tier: ShippingTier,
}

// =============================================================================
// Cart Responses
// =============================================================================

/// Response for cart synchronization operations
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    /// Status of the operation
    pub status: String,

    /// Cart identifier
    pub cart_id: String,
}

/// Priced snapshot of a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_id: String,
    pub items: Vec<LineItem>,

    /// One-line summary, e.g. `2x Flow Side Chair (Brown)`
    pub summary: String,

    pub shipping_tier: ShippingTier,
    pub totals: OrderTotals,
    pub display: TotalsDisplay,
}
