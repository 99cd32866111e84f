//! Checkout Business Logic Helpers
//!
//! Order placement, order numbers, delivery estimates and history rows.
//! Dates are passed in so the logic stays deterministic under test.

use super::models::*;
use crate::cart::{helpers::format_item_summary, state::AppState};
use crate::error::ApiError;
use crate::pricing::{compute_totals, display_totals, ShippingTier};
use chrono::{Datelike, NaiveDate, Weekday};

/// Formats an order number such as `KAN-2024-001234`.
pub fn format_order_number(year: i32, sequence: u64) -> String {
    format!("{}-{}-{:06}", ORDER_NUMBER_PREFIX, year, sequence)
}

/// Moves `days` business days forward from `start`, skipping weekends.
pub fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut date = start;
    let mut remaining = days;

    while remaining > 0 {
        date = match date.succ_opt() {
            Some(next) => next,
            None => return date,
        };
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }

    date
}

/// Delivery window for an order placed on `placed_on`.
pub fn estimate_delivery(placed_on: NaiveDate, tier: ShippingTier) -> DeliveryWindow {
    let (earliest, latest) = tier.business_days();
    DeliveryWindow {
        earliest: add_business_days(placed_on, earliest),
        latest: add_business_days(placed_on, latest),
    }
}

/// Condenses an order into an account history row.
pub fn summarize_order(order: &OrderConfirmation) -> OrderSummary {
    OrderSummary {
        order_number: order.order_number.clone(),
        placed_on: order.placed_on,
        status: order.status,
        total: order.totals.grand_total,
        item_count: order.items.iter().map(|i| i.quantity).sum(),
    }
}

/// Turns a cart into an order.
///
/// The cart is taken out of the state up front so a concurrent checkout of
/// the same cart cannot produce two orders. An empty cart is left in place,
/// and a cart that fails pricing is put back.
pub fn place_order(
    state: &AppState,
    input: CheckoutInput,
    today: NaiveDate,
) -> Result<OrderConfirmation, ApiError> {
    let (cart_id, items) = state
        .carts
        .remove_if(&input.cart_id, |_, items| !items.is_empty())
        .ok_or_else(|| ApiError::InvalidInput(format!("cart {} is empty", input.cart_id)))?;

    let totals = match compute_totals(&items, input.shipping_tier, &state.pricing) {
        Ok(totals) => totals,
        Err(err) => {
            state.carts.insert(cart_id, items);
            return Err(err.into());
        }
    };

    let order_number = format_order_number(today.year(), state.next_order_sequence());
    let confirmation = OrderConfirmation {
        order_number: order_number.clone(),
        cart_id,
        placed_on: today,
        estimated_delivery: estimate_delivery(today, input.shipping_tier),
        shipping_tier: input.shipping_tier,
        payment_method: input.payment_method,
        status: OrderStatus::Placed.next(),
        display: display_totals(&totals, &state.pricing),
        totals,
        items,
    };

    tracing::info!(
        %order_number,
        cart_id = %confirmation.cart_id,
        tier = confirmation.shipping_tier.label(),
        payment = confirmation.payment_method.label(),
        total = %confirmation.totals.grand_total,
        "order placed: {}",
        format_item_summary(&confirmation.items)
    );

    state.orders.insert(order_number, confirmation.clone());
    Ok(confirmation)
}

/// Account order history, newest first.
pub fn list_order_summaries(state: &AppState) -> Vec<OrderSummary> {
    let mut summaries: Vec<OrderSummary> = state
        .orders
        .iter()
        .map(|entry| summarize_order(entry.value()))
        .collect();

    summaries.sort_by(|a, b| {
        b.placed_on
            .cmp(&a.placed_on)
            .then_with(|| b.order_number.cmp(&a.order_number))
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::LineItem;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_state(cart_id: &str) -> AppState {
        let state = AppState::default();
        state.carts.insert(
            cart_id.to_string(),
            vec![
                LineItem::new("flow-chair-brown", "Flow Side Chair", dec!(62483.00), 2)
                    .with_color("Brown"),
                LineItem::new("pendant-lamp-black", "Aura Pendant Lamp", dec!(35875.00), 1)
                    .with_color("Black"),
            ],
        );
        state
    }

    #[test]
    fn test_order_number_format() {
        assert_eq!(format_order_number(2024, 1234), "KAN-2024-001234");
        assert_eq!(format_order_number(2026, 1), "KAN-2026-000001");
    }

    #[test]
    fn test_business_days_skip_weekends() {
        // 2024-01-19 is a Friday
        assert_eq!(add_business_days(date(2024, 1, 19), 1), date(2024, 1, 22));
        assert_eq!(add_business_days(date(2024, 1, 19), 0), date(2024, 1, 19));
        assert_eq!(add_business_days(date(2024, 1, 15), 5), date(2024, 1, 22));
    }

    #[test]
    fn test_delivery_windows_per_tier() {
        let monday = date(2024, 1, 15);

        let standard = estimate_delivery(monday, ShippingTier::Standard);
        assert_eq!(standard.earliest, date(2024, 1, 18));
        assert_eq!(standard.latest, date(2024, 1, 22));

        let express = estimate_delivery(monday, ShippingTier::Express);
        assert_eq!(express.earliest, date(2024, 1, 16));
        assert_eq!(express.latest, date(2024, 1, 17));

        let same_day = estimate_delivery(monday, ShippingTier::SameDay);
        assert_eq!(same_day.earliest, monday);
        assert_eq!(same_day.latest, monday);
    }

    #[test]
    fn test_status_progression() {
        assert_eq!(OrderStatus::Placed.next(), OrderStatus::Processing);
        assert_eq!(OrderStatus::Processing.next(), OrderStatus::Shipped);
        assert_eq!(OrderStatus::Shipped.next(), OrderStatus::Delivered);
        assert_eq!(OrderStatus::Delivered.next(), OrderStatus::Delivered);
        assert!(OrderStatus::Placed < OrderStatus::Delivered);
    }

    #[test]
    fn test_place_order_clears_cart_and_records_order() {
        let state = seeded_state("cart-1");
        let input = CheckoutInput {
            cart_id: "cart-1".into(),
            shipping_tier: ShippingTier::Express,
            payment_method: PaymentMethod::Cash,
        };

        let order = place_order(&state, input, date(2024, 1, 20)).unwrap();

        assert_eq!(order.order_number, "KAN-2024-000001");
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.totals.shipping_fee, dec!(300));
        assert_eq!(order.totals.grand_total, dec!(183658.74));
        assert!(state.carts.get("cart-1").is_none());
        assert!(state.orders.contains_key("KAN-2024-000001"));
    }

    #[test]
    fn test_place_order_rejects_empty_cart() {
        let state = AppState::default();
        state.carts.insert("empty".into(), Vec::new());

        for cart_id in ["empty", "missing"] {
            let input = CheckoutInput {
                cart_id: cart_id.into(),
                shipping_tier: ShippingTier::Standard,
                payment_method: PaymentMethod::Card,
            };
            let err = place_order(&state, input, date(2024, 1, 20)).unwrap_err();
            assert!(matches!(err, ApiError::InvalidInput(_)));
        }
        assert!(state.orders.is_empty());
        assert!(state.carts.get("empty").is_some_and(|items| items.is_empty()));
        assert!(!state.carts.contains_key("missing"));
    }

    #[test]
    fn test_history_is_newest_first() {
        let state = seeded_state("a");
        place_order(
            &state,
            CheckoutInput {
                cart_id: "a".into(),
                shipping_tier: ShippingTier::Standard,
                payment_method: PaymentMethod::Card,
            },
            date(2024, 1, 15),
        )
        .unwrap();

        state.carts.insert(
            "b".into(),
            vec![LineItem::new("vase", "Ceramic Vase", dec!(1200), 3)],
        );
        place_order(
            &state,
            CheckoutInput {
                cart_id: "b".into(),
                shipping_tier: ShippingTier::Standard,
                payment_method: PaymentMethod::Card,
            },
            date(2024, 1, 20),
        )
        .unwrap();

        let history = list_order_summaries(&state);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].order_number, "KAN-2024-000002");
        assert_eq!(history[0].item_count, 3);
        assert_eq!(history[1].order_number, "KAN-2024-000001");
        assert_eq!(history[1].item_count, 3);
        assert_eq!(history[1].total, dec!(183358.74));
    }
}
