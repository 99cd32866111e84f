//! Display formatting for amounts and totals
//!
//! Rounding to two decimals happens here and nowhere else.

use super::models::{OrderTotals, PricingConfig, TotalsDisplay};
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix shown in front of every amount
pub const CURRENCY_PREFIX: &str = "LE";

/// Formats an amount as `LE 1,234.56`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    rounded = rounded.abs();
    rounded.rescale(2);

    let digits = rounded.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!(
        "{} {}{}.{}",
        CURRENCY_PREFIX,
        sign,
        group_thousands(whole),
        fraction
    )
}

/// Formats a shipping fee, showing `Free` when nothing is charged.
pub fn format_shipping(fee: Decimal) -> String {
    if fee.is_zero() {
        "Free".to_string()
    } else {
        format_amount(fee)
    }
}

/// Formats a rate such as `0.14` as `14%`. A rate too large to express as
/// a percentage is shown as the bare multiplier.
pub fn format_rate(rate: Decimal) -> String {
    match rate.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{}%", percent.normalize()),
        None => rate.normalize().to_string(),
    }
}

/// Builds the display strings shown next to a set of totals.
pub fn display_totals(totals: &OrderTotals, config: &PricingConfig) -> TotalsDisplay {
    TotalsDisplay {
        subtotal: format_amount(totals.subtotal),
        shipping: format_shipping(totals.shipping_fee),
        tax_label: format!("Tax ({})", format_rate(config.tax_rate)),
        tax: format_amount(totals.tax_amount),
        grand_total: format_amount(totals.grand_total),
    }
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
