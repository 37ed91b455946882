use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::CatalogHandler;

pub fn catalog_routes(catalog_handler: Arc<CatalogHandler>) -> Router {
    Router::new()
        .route(
            "/catalog/categories",
            get(CatalogHandler::list_categories),
        )
        .route(
            "/catalog/categories/{category}/products",
            get(CatalogHandler::products_in_category),
        )
        .with_state(catalog_handler)
}
