//! REST API handlers for checkout and account order history

use super::{helpers::*, models::*};
use crate::cart::{helpers::get_or_create_cart_id, models::SyncResponse, state::SharedState};
use crate::error::ApiError;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

/// Creates routes for checkout and order operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/orders", get(list_orders))
        .route("/orders/:order_number", get(get_order))
        .route("/orders/:order_number/advance", post(advance_order))
        .route("/orders/:order_number/reorder", post(reorder))
}

/// Endpoint: POST /checkout
/// Places an order from the cart and clears it.
async fn checkout(
    State(state): State<SharedState>,
    Json(payload): Json<CheckoutInput>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    let today = Local::now().date_naive();
    let confirmation = place_order(&state, payload, today)?;
    Ok(Json(confirmation))
}

/// Endpoint: GET /orders
async fn list_orders(State(state): State<SharedState>) -> Json<Vec<OrderSummary>> {
    Json(list_order_summaries(&state))
}

/// Endpoint: GET /orders/:order_number
async fn get_order(
    State(state): State<SharedState>,
    Path(order_number): Path<String>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    state
        .orders
        .get(&order_number)
        .map(|entry| Json(entry.value().clone()))
        .ok_or_else(|| ApiError::not_found("order", order_number))
}

/// Endpoint: POST /orders/:order_number/advance
/// Moves the order one step along its fulfilment timeline.
async fn advance_order(
    State(state): State<SharedState>,
    Path(order_number): Path<String>,
) -> Result<Json<OrderConfirmation>, ApiError> {
    let mut order = state
        .orders
        .get_mut(&order_number)
        .ok_or_else(|| ApiError::not_found("order", order_number.as_str()))?;

    let previous = order.status;
    order.status = previous.next();
    tracing::info!(%order_number, from = ?previous, to = ?order.status, "order status advanced");

    Ok(Json(order.clone()))
}

/// Endpoint: POST /orders/:order_number/reorder
/// Copies a delivered order's items into a fresh cart.
async fn reorder(
    State(state): State<SharedState>,
    Path(order_number): Path<String>,
) -> Result<Json<SyncResponse>, ApiError> {
    let items = {
        let order = state
            .orders
            .get(&order_number)
            .ok_or_else(|| ApiError::not_found("order", order_number.as_str()))?;

        if order.status != OrderStatus::Delivered {
            return Err(ApiError::Conflict(format!(
                "order {} is {} and cannot be reordered yet",
                order_number,
                order.status.label()
            )));
        }
        order.items.clone()
    };

    let cart_id = get_or_create_cart_id(None);
    tracing::info!(%order_number, %cart_id, "reordering into new cart");
    state.carts.insert(cart_id.clone(), items);

    Ok(Json(SyncResponse {
        status: "updated".to_string(),
        cart_id,
    }))
}
