//! Pricing Domain Models
//!
//! Line items, shipping tiers and the derived order totals. Amounts are
//! `Decimal` so repeated additions never drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Line Items
// =============================================================================

/// Returns the default quantity (1) for line items
fn default_quantity() -> i64 {
    1
}

/// One product/variant/quantity entry in a cart or order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product identifier (e.g. `flow-chair-brown`)
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Selected color variant, if the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Price of a single unit
    pub unit_price: Decimal,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl LineItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            unit_price,
            quantity,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Unit price times quantity, `None` on overflow.
    pub fn extended_price(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// Name with the color variant appended, e.g. `Flow Side Chair (Brown)`.
    pub fn label(&self) -> String {
        match &self.color {
            Some(color) => format!("{} ({})", self.name, color),
            None => self.name.clone(),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Delivery speed option offered at checkout
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingTier {
    #[default]
    Standard,
    Express,
    SameDay,
}

impl ShippingTier {
    pub const ALL: [ShippingTier; 3] = [
        ShippingTier::Standard,
        ShippingTier::Express,
        ShippingTier::SameDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShippingTier::Standard => "Standard Delivery",
            ShippingTier::Express => "Express Delivery",
            ShippingTier::SameDay => "Same Day Delivery",
        }
    }

    /// Delivery window in business days as `(earliest, latest)`.
    pub fn business_days(self) -> (u32, u32) {
        match self {
            ShippingTier::Standard => (3, 5),
            ShippingTier::Express => (1, 2),
            ShippingTier::SameDay => (0, 0),
        }
    }
}

/// Fees, threshold and tax rate used by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Standard shipping is free once the subtotal is strictly above this
    pub free_shipping_threshold: Decimal,

    /// Fraction of the subtotal charged as tax (0.14 = 14%)
    pub tax_rate: Decimal,

    pub standard_fee: Decimal,
    pub express_fee: Decimal,
    pub same_day_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::from(10_000),
            tax_rate: Decimal::new(14, 2),
            standard_fee: Decimal::from(150),
            express_fee: Decimal::from(300),
            same_day_fee: Decimal::from(500),
        }
    }
}

impl PricingConfig {
    /// Fixed fee for a tier before any waiver is applied.
    pub fn fee_for(&self, tier: ShippingTier) -> Decimal {
        match tier {
            ShippingTier::Standard => self.standard_fee,
            ShippingTier::Express => self.express_fee,
            ShippingTier::SameDay => self.same_day_fee,
        }
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Pure projection of a set of line items and a shipping tier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping_fee: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

/// Display strings for an `OrderTotals`, formatted to two decimals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub shipping: String,
    pub tax_label: String,
    pub tax: String,
    pub grand_total: String,
}
