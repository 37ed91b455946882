use serde::{Deserialize, Serialize};

use crate::application::services::search_service::SearchMatch;
use crate::application::use_cases::search_catalog::SearchCatalogResponse;

#[derive(Debug, Deserialize)]
pub struct SearchTextParamsDto {
    pub query: String,
    pub top_k: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponseDto {
    pub results: Vec<SearchResultDto>,
    pub total_results: i32,
    pub search_time_ms: u64,
}

/// One ranked result. `found` is false when the engine returned an id the
/// catalog has no row for; name and image path are absent in that case.
#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    pub img_id: String,
    pub found: bool,
    pub name: Option<String>,
    pub image_path: Option<String>,
}

impl From<SearchMatch> for SearchResultDto {
    fn from(entry: SearchMatch) -> Self {
        match entry.product {
            Some(product) => Self {
                img_id: entry.img_id,
                found: true,
                name: Some(product.name),
                image_path: Some(product.image_path),
            },
            None => Self {
                img_id: entry.img_id,
                found: false,
                name: None,
                image_path: None,
            },
        }
    }
}

impl From<SearchCatalogResponse> for SearchResponseDto {
    fn from(response: SearchCatalogResponse) -> Self {
        let results: Vec<SearchResultDto> = response
            .matches
            .into_iter()
            .map(SearchResultDto::from)
            .collect();
        Self {
            total_results: results.len() as i32,
            results,
            search_time_ms: response.search_time_ms,
        }
    }
}

impl SearchResponseDto {
    /// The zero-match empty state: a successful response with no results.
    pub fn empty(search_time_ms: u64) -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
            search_time_ms,
        }
    }
}
