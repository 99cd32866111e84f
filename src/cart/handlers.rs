//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for cart synchronization, item
//! changes and quotes. Changes are priced on a copy of the cart and only
//! committed once pricing succeeds, so a stored cart always quotes.

use super::{helpers::*, models::*, state::SharedState};
use crate::error::ApiError;
use crate::pricing::{compute_totals, LineItem, ShippingTier};
use axum::{extract::State, routing::post, Json, Router};
use dashmap::mapref::entry::Entry;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/sync_cart", post(sync_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/quantity", post(update_quantity))
        .route("/cart/remove", post(remove_from_cart))
        .route("/cart/quote", post(quote_cart))
}

/// Endpoint: POST /sync_cart
/// Updates the backend state to match the frontend state exactly.
async fn sync_cart(
    State(state): State<SharedState>,
    Json(payload): Json<AddToCartInput>,
) -> Result<Json<SyncResponse>, ApiError> {
    compute_totals(&payload.items, ShippingTier::Standard, &state.pricing)?;
    let cart_id = get_or_create_cart_id(payload.cart_id);

    tracing::debug!(%cart_id, items = payload.items.len(), "syncing cart");
    state.carts.insert(cart_id.clone(), payload.items);

    Ok(Json(SyncResponse {
        status: "updated".to_string(),
        cart_id,
    }))
}

/// Endpoint: POST /cart/add
/// Merges items into the cart, aggregating quantities by item id.
async fn add_to_cart(
    State(state): State<SharedState>,
    Json(payload): Json<AddToCartInput>,
) -> Result<Json<CartView>, ApiError> {
    let cart_id = get_or_create_cart_id(payload.cart_id);

    let view = match state.carts.entry(cart_id.clone()) {
        Entry::Occupied(mut occupied) => {
            let mut candidate = occupied.get().clone();
            update_cart_with_new_items(&mut candidate, payload.items);
            let view = build_cart_view(
                cart_id,
                candidate.clone(),
                ShippingTier::Standard,
                &state.pricing,
            )?;
            occupied.insert(candidate);
            view
        }
        Entry::Vacant(vacant) => {
            let mut candidate = Vec::new();
            update_cart_with_new_items(&mut candidate, payload.items);
            let view = build_cart_view(
                cart_id,
                candidate.clone(),
                ShippingTier::Standard,
                &state.pricing,
            )?;
            vacant.insert(candidate);
            view
        }
    };

    tracing::info!(cart_id = %view.cart_id, summary = %view.summary, "items added to cart");
    Ok(Json(view))
}

/// Applies `change` to a copy of an existing cart, prices it, and stores
/// the copy only if pricing succeeds.
fn change_cart<F>(state: &SharedState, cart_id: String, change: F) -> Result<CartView, ApiError>
where
    F: FnOnce(&mut Vec<LineItem>) -> Result<(), ApiError>,
{
    let mut cart_items = state
        .carts
        .get_mut(&cart_id)
        .ok_or_else(|| ApiError::not_found("cart", cart_id.as_str()))?;

    let mut candidate = cart_items.clone();
    change(&mut candidate)?;

    let view = build_cart_view(
        cart_id,
        candidate.clone(),
        ShippingTier::Standard,
        &state.pricing,
    )?;
    *cart_items = candidate;
    Ok(view)
}

/// Endpoint: POST /cart/quantity
/// Sets an item's quantity; 0 removes it.
async fn update_quantity(
    State(state): State<SharedState>,
    Json(payload): Json<UpdateQuantityInput>,
) -> Result<Json<CartView>, ApiError> {
    let UpdateQuantityInput {
        cart_id,
        item_id,
        quantity,
    } = payload;

    let view = change_cart(&state, cart_id, |items| {
        if set_item_quantity(items, &item_id, quantity)? {
            Ok(())
        } else {
            Err(ApiError::not_found("item", item_id.as_str()))
        }
    })?;
    Ok(Json(view))
}

/// Endpoint: POST /cart/remove
/// Drops one item from the cart.
async fn remove_from_cart(
    State(state): State<SharedState>,
    Json(payload): Json<RemoveItemInput>,
) -> Result<Json<CartView>, ApiError> {
    let RemoveItemInput { cart_id, item_id } = payload;

    let view = change_cart(&state, cart_id, |items| {
        if remove_item(items, &item_id) {
            Ok(())
        } else {
            Err(ApiError::not_found("item", item_id.as_str()))
        }
    })?;
    Ok(Json(view))
}

/// Endpoint: POST /cart/quote
/// Prices the cart for the requested shipping tier without changing it.
async fn quote_cart(
    State(state): State<SharedState>,
    Json(payload): Json<QuoteInput>,
) -> Result<Json<CartView>, ApiError> {
    let items = state
        .carts
        .get(&payload.cart_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| ApiError::not_found("cart", payload.cart_id.as_str()))?;

    let view = build_cart_view(
        payload.cart_id,
        items,
        payload.shipping_tier,
        &state.pricing,
    )?;
    Ok(Json(view))
}
