//! Checkout and Order Models

use crate::pricing::{LineItem, OrderTotals, ShippingTier, TotalsDisplay};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix for every order number, e.g. `KAN-2024-001234`
pub const ORDER_NUMBER_PREFIX: &str = "KAN";

/// How the customer intends to pay. Recorded on the order, never processed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Cash => "Cash on Delivery",
        }
    }
}

/// Fulfilment stage shown on the confirmation timeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// The following stage; `Delivered` is terminal.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Placed => OrderStatus::Processing,
            OrderStatus::Processing => OrderStatus::Shipped,
            OrderStatus::Shipped | OrderStatus::Delivered => OrderStatus::Delivered,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Placed => "Order Placed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

/// Input for the checkout endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub cart_id: String,

    #[serde(default)]
    pub shipping_tier: ShippingTier,

    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Earliest and latest expected delivery dates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Everything the order confirmation page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub cart_id: String,
    pub placed_on: NaiveDate,
    pub estimated_delivery: DeliveryWindow,
    pub shipping_tier: ShippingTier,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    pub display: TotalsDisplay,
}

/// One row of the account order history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_number: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub total: Decimal,

    /// Sum of item quantities
    pub item_count: i64,
}
