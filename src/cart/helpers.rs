//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartView;
use crate::pricing::{
    compute_totals, display_totals, LineItem, PricingConfig, PricingError, ShippingTier,
};
use uuid::Uuid;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart operation works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Merges `new_items` into `cart_items`, aggregating quantities for existing
/// entries and inserting brand new ones.
///
/// # Behaviour
///
/// * Items are matched by `id`; a match has its `quantity` increased by the
///   incoming quantity.
/// * The stored name, color and price of an existing entry are kept.
/// * New items are appended in the order they arrive.
pub fn update_cart_with_new_items(cart_items: &mut Vec<LineItem>, new_items: Vec<LineItem>) {
    for incoming in new_items {
        if let Some(existing) = cart_items.iter_mut().find(|i| i.id == incoming.id) {
            existing.quantity = existing.quantity.saturating_add(incoming.quantity);
        } else {
            cart_items.push(incoming);
        }
    }
}

/// Sets the quantity of `item_id`. A quantity of 0 drops the item.
///
/// Returns `Ok(false)` when the item is not in the cart.
pub fn set_item_quantity(
    cart_items: &mut Vec<LineItem>,
    item_id: &str,
    quantity: i64,
) -> Result<bool, PricingError> {
    if quantity < 0 {
        return Err(PricingError::invalid(format!(
            "quantity for '{}' cannot be negative ({})",
            item_id, quantity
        )));
    }

    if quantity == 0 {
        return Ok(remove_item(cart_items, item_id));
    }

    match cart_items.iter_mut().find(|i| i.id == item_id) {
        Some(item) => {
            item.quantity = quantity;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Drops `item_id` from the cart, returning whether anything was removed.
pub fn remove_item(cart_items: &mut Vec<LineItem>, item_id: &str) -> bool {
    let before = cart_items.len();
    cart_items.retain(|i| i.id != item_id);
    cart_items.len() != before
}

/// Produces a human-readable one-line summary for a list of line items.
///
/// Example output: `"2x Flow Side Chair (Brown), 1x Aura Pendant Lamp"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prices a cart and packages it for the client.
pub fn build_cart_view(
    cart_id: String,
    items: Vec<LineItem>,
    shipping_tier: ShippingTier,
    config: &PricingConfig,
) -> Result<CartView, PricingError> {
    let totals = compute_totals(&items, shipping_tier, config)?;
    let display = display_totals(&totals, config);

    Ok(CartView {
        cart_id,
        summary: format_item_summary(&items),
        items,
        shipping_tier,
        totals,
        display,
    })
}
