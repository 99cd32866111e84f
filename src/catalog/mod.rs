//! Catalog Module
//!
//! Collection page logic over products supplied by the catalog service:
//! category filtering, sorting, discount badges and page view state.
//!
//! Only `ViewMode` travels over `/catalog/browse`. `ProductTab`,
//! `AccountTab` and `helpers::step_quantity` are library-only view state
//! for the presentation layer; no handler reads them.

pub mod handlers;
pub mod helpers;
pub mod models;

pub use handlers::routes;
