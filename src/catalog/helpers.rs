//! Catalog Listing Helpers
//!
//! Filtering, sorting and badge computation for collection pages.
//!
//! `step_quantity` is library-only: the product page quantity stepper runs
//! in the UI and never round-trips through the HTTP surface.

use super::models::*;
use crate::pricing::{format_amount, PricingError};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use std::cmp::Ordering;

/// Percentage saved against the original price, rounded to the nearest
/// whole percent. `None` when the product is not discounted.
pub fn discount_percent(price: Decimal, original_price: Option<Decimal>) -> Option<u32> {
    let original = original_price?;
    if original <= price || original <= Decimal::ZERO {
        return None;
    }

    original
        .checked_sub(price)
        .and_then(|saved| saved.checked_div(original))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .filter(|percent| *percent > 0)
}

/// Product page quantity stepper; never drops below 1.
pub fn step_quantity(current: i64, change: i64) -> i64 {
    current.saturating_add(change).max(1)
}

/// Distinct categories in first-seen order, prefixed with `All Categories`.
pub fn category_choices(products: &[Product]) -> Vec<String> {
    let mut choices = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !choices.contains(&product.category) {
            choices.push(product.category.clone());
        }
    }
    choices
}

fn rating_desc(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts products in place. Featured and best-selling keep the order the
/// catalog supplied; newest assumes the catalog lists oldest first.
pub fn sort_products(products: &mut [Product], sort_by: SortOption) {
    match sort_by {
        SortOption::Featured | SortOption::BestSelling => {}
        SortOption::PriceLowToHigh => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceHighToLow => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::HighestRated => products.sort_by(|a, b| rating_desc(a.rating, b.rating)),
        SortOption::Newest => products.reverse(),
    }
}

/// Rejects products with a negative price or original price.
pub fn validate_product(product: &Product) -> Result<(), PricingError> {
    if product.price < Decimal::ZERO {
        return Err(PricingError::invalid(format!(
            "product '{}' has negative price {}",
            product.id, product.price
        )));
    }

    if let Some(original) = product.original_price.filter(|o| *o < Decimal::ZERO) {
        return Err(PricingError::invalid(format!(
            "product '{}' has negative original price {}",
            product.id, original
        )));
    }

    Ok(())
}

/// Builds a collection page from the supplied products.
pub fn browse(input: BrowseInput) -> Result<CatalogListing, PricingError> {
    input.products.iter().try_for_each(validate_product)?;
    let categories = category_choices(&input.products);

    let mut products: Vec<Product> = input
        .products
        .into_iter()
        .filter(|p| input.category.matches(p))
        .collect();
    sort_products(&mut products, input.sort_by);

    let cards: Vec<ProductCard> = products
        .into_iter()
        .map(|product| ProductCard {
            price_display: format_amount(product.price),
            discount_percent: discount_percent(product.price, product.original_price),
            product,
        })
        .collect();

    Ok(CatalogListing {
        categories,
        category: input.category,
        sort_by: input.sort_by,
        view_mode: input.view_mode,
        count: cards.len(),
        products: cards,
    })
}
