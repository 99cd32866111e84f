//! Order Totals Calculator
//!
//! Derives subtotal, shipping, tax and grand total from line items and a
//! shipping tier. Every function here is pure: same inputs, same totals.

use super::{
    errors::PricingError,
    models::{LineItem, OrderTotals, PricingConfig, ShippingTier},
};
use rust_decimal::Decimal;

/// Rejects items that break the line item invariants.
///
/// * `unit_price` must not be negative.
/// * `quantity` must be at least 1; dropping an item is done by removing it
///   from the collection, never by pricing it at zero.
pub fn validate_line_item(item: &LineItem) -> Result<(), PricingError> {
    if item.unit_price < Decimal::ZERO {
        return Err(PricingError::invalid(format!(
            "item '{}' has negative unit price {}",
            item.id, item.unit_price
        )));
    }

    if item.quantity < 1 {
        return Err(PricingError::invalid(format!(
            "item '{}' has quantity {}, expected at least 1",
            item.id, item.quantity
        )));
    }

    Ok(())
}

/// Validates every item, failing on the first offender.
pub fn validate_line_items(items: &[LineItem]) -> Result<(), PricingError> {
    items.iter().try_for_each(validate_line_item)
}

/// Sum of `unit_price * quantity` over all items.
pub fn subtotal(items: &[LineItem]) -> Result<Decimal, PricingError> {
    items.iter().try_fold(Decimal::ZERO, |sum, item| {
        validate_line_item(item)?;
        let extended = item
            .extended_price()
            .ok_or(PricingError::Overflow("line item price"))?;
        sum.checked_add(extended)
            .ok_or(PricingError::Overflow("subtotal"))
    })
}

/// Fee for the selected tier. Only standard shipping is waived, and only
/// when the subtotal is strictly above the threshold.
pub fn shipping_fee(config: &PricingConfig, tier: ShippingTier, subtotal: Decimal) -> Decimal {
    if tier == ShippingTier::Standard && subtotal > config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.fee_for(tier)
    }
}

/// Tax on the subtotal alone; shipping is never taxed.
pub fn tax_amount(config: &PricingConfig, subtotal: Decimal) -> Result<Decimal, PricingError> {
    subtotal
        .checked_mul(config.tax_rate)
        .ok_or(PricingError::Overflow("tax"))
}

/// Computes the full `OrderTotals` for a cart or order.
///
/// No rounding happens here; values keep full precision and are rounded
/// only when formatted for display.
pub fn compute_totals(
    items: &[LineItem],
    tier: ShippingTier,
    config: &PricingConfig,
) -> Result<OrderTotals, PricingError> {
    let subtotal = subtotal(items)?;
    let shipping_fee = shipping_fee(config, tier, subtotal);
    let tax_amount = tax_amount(config, subtotal)?;

    let grand_total = subtotal
        .checked_add(shipping_fee)
        .and_then(|sum| sum.checked_add(tax_amount))
        .ok_or(PricingError::Overflow("grand total"))?;

    Ok(OrderTotals {
        subtotal,
        shipping_fee,
        tax_amount,
        grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_cart() -> Vec<LineItem> {
        vec![
            LineItem::new("flow-chair-brown", "Flow Side Chair", dec!(62483.00), 2)
                .with_color("Brown"),
            LineItem::new("pendant-lamp-black", "Aura Pendant Lamp", dec!(35875.00), 1)
                .with_color("Black"),
        ]
    }

    #[test]
    fn test_standard_cart_above_threshold() {
        let config = PricingConfig::default();
        let totals = compute_totals(&sample_cart(), ShippingTier::Standard, &config).unwrap();

        assert_eq!(totals.subtotal, dec!(160841.00));
        assert_eq!(totals.shipping_fee, Decimal::ZERO);
        assert_eq!(totals.tax_amount, dec!(22517.74));
        assert_eq!(totals.grand_total, dec!(183358.74));
    }

    #[test]
    fn test_empty_cart_express() {
        let config = PricingConfig::default();
        let totals = compute_totals(&[], ShippingTier::Express, &config).unwrap();

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping_fee, dec!(300));
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.grand_total, dec!(300));
    }

    #[test]
    fn test_empty_cart_standard_pays_fee() {
        let config = PricingConfig::default();
        let totals = compute_totals(&[], ShippingTier::Standard, &config).unwrap();

        assert_eq!(totals.shipping_fee, dec!(150));
        assert_eq!(totals.grand_total, dec!(150));
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = PricingConfig::default();

        let at_threshold = vec![LineItem::new("vase", "Ceramic Vase", dec!(5000), 2)];
        assert_eq!(
            shipping_fee(&config, ShippingTier::Standard, subtotal(&at_threshold).unwrap()),
            dec!(150)
        );

        let above = vec![LineItem::new("vase", "Ceramic Vase", dec!(5000.01), 2)];
        assert_eq!(
            shipping_fee(&config, ShippingTier::Standard, subtotal(&above).unwrap()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_only_standard_is_waived() {
        let config = PricingConfig::default();
        let big = dec!(500000);

        assert_eq!(shipping_fee(&config, ShippingTier::Express, big), dec!(300));
        assert_eq!(shipping_fee(&config, ShippingTier::SameDay, big), dec!(500));
        assert_eq!(shipping_fee(&config, ShippingTier::Standard, big), Decimal::ZERO);
    }

    #[test]
    fn test_tax_ignores_tier() {
        let config = PricingConfig::default();
        let items = sample_cart();

        let taxes: Vec<Decimal> = ShippingTier::ALL
            .iter()
            .map(|tier| compute_totals(&items, *tier, &config).unwrap().tax_amount)
            .collect();

        assert!(taxes.iter().all(|t| *t == dec!(22517.74)));
    }

    #[test]
    fn test_grand_total_is_exact_sum() {
        let config = PricingConfig::default();
        let items = vec![
            LineItem::new("cushion", "Linen Cushion", dec!(0.10), 3),
            LineItem::new("coaster", "Cork Coaster", dec!(0.20), 7),
        ];

        for tier in ShippingTier::ALL {
            let totals = compute_totals(&items, tier, &config).unwrap();
            assert_eq!(totals.subtotal, dec!(1.70));
            assert_eq!(totals.tax_amount, dec!(0.238));
            assert_eq!(
                totals.grand_total,
                totals.subtotal + totals.shipping_fee + totals.tax_amount
            );
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let config = PricingConfig::default();
        let items = sample_cart();

        let first = compute_totals(&items, ShippingTier::SameDay, &config).unwrap();
        let second = compute_totals(&items, ShippingTier::SameDay, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_price_rejected() {
        let config = PricingConfig::default();
        let items = vec![LineItem::new("rug", "Wool Rug", dec!(-1.00), 1)];

        let err = compute_totals(&items, ShippingTier::Standard, &config).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_and_zero_quantity_rejected() {
        let config = PricingConfig::default();

        for quantity in [-2, 0] {
            let items = vec![LineItem::new("rug", "Wool Rug", dec!(10), quantity)];
            let err = compute_totals(&items, ShippingTier::Express, &config).unwrap_err();
            assert!(matches!(err, PricingError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_free_item_is_allowed() {
        let items = vec![LineItem::new("swatch", "Fabric Swatch", Decimal::ZERO, 4)];
        assert!(validate_line_items(&items).is_ok());
        assert_eq!(subtotal(&items).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_reported() {
        let items = vec![
            LineItem::new("a", "A", Decimal::MAX, 1),
            LineItem::new("b", "B", Decimal::MAX, 1),
        ];

        assert_eq!(
            subtotal(&items).unwrap_err(),
            PricingError::Overflow("subtotal")
        );
    }
}
