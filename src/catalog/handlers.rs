//! REST API handler for collection listings

use super::{helpers::browse, models::*};
use crate::cart::state::SharedState;
use crate::error::ApiError;
use axum::{routing::post, Json, Router};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/catalog/browse", post(browse_catalog))
}

/// Endpoint: POST /catalog/browse
/// Filters and sorts the products the catalog service supplied.
async fn browse_catalog(
    Json(payload): Json<BrowseInput>,
) -> Result<Json<CatalogListing>, ApiError> {
    tracing::debug!(
        products = payload.products.len(),
        category = ?payload.category,
        sort_by = ?payload.sort_by,
        "browsing catalog"
    );
    Ok(Json(browse(payload)?))
}
