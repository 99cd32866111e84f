//! Catalog Models
//!
//! Products as supplied by the catalog service, plus the small enums the
//! listing, product and account pages keep as view state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label of the catch-all category filter
pub const ALL_CATEGORIES: &str = "All Categories";

/// A product as shown on collection pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,

    /// Price before discount, when the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,

    pub category: String,

    #[serde(default)]
    pub colors: Vec<String>,

    /// Average review rating out of 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// Category selection on a collection page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

/// Sort dropdown options, serialized with their on-page labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "Featured")]
    Featured,
    #[serde(rename = "Best Selling")]
    BestSelling,
    #[serde(rename = "Price: Low to High")]
    PriceLowToHigh,
    #[serde(rename = "Price: High to Low")]
    PriceHighToLow,
    #[serde(rename = "Highest Rated")]
    HighestRated,
    #[serde(rename = "Newest")]
    Newest,
}

/// Grid or list layout on collection pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Tabs below the product detail gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductTab {
    #[default]
    Description,
    Reviews,
    Shipping,
}

/// Sections of the account dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountTab {
    #[default]
    Profile,
    Orders,
    Wishlist,
    Settings,
}

/// Input for the collection listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseInput {
    pub products: Vec<Product>,

    #[serde(default)]
    pub category: CategoryFilter,

    #[serde(default)]
    pub sort_by: SortOption,

    #[serde(default)]
    pub view_mode: ViewMode,
}

/// A product with its listing badges
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,

    pub price_display: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
}

/// A filtered, sorted collection page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogListing {
    /// Filter choices, `All Categories` first
    pub categories: Vec<String>,
    pub category: CategoryFilter,
    pub sort_by: SortOption,
    pub view_mode: ViewMode,
    pub count: usize,
    pub products: Vec<ProductCard>,
}
