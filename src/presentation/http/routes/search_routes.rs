use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::presentation::http::handlers::SearchHandler;

pub fn search_routes(search_handler: Arc<SearchHandler>) -> Router {
    Router::new()
        .route("/search/text", get(SearchHandler::search_text))
        .route("/search/image", post(SearchHandler::search_image))
        .with_state(search_handler)
}
