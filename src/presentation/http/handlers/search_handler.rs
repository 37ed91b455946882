use axum::{
    Json,
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::SearchCatalogUseCase;
use crate::application::use_cases::search_catalog::{
    SearchCatalogError, SearchImageRequest, SearchTextRequest,
};
use crate::presentation::http::dto::{ApiResponse, SearchResponseDto, SearchTextParamsDto};

pub struct SearchHandler {
    search_use_case: Arc<SearchCatalogUseCase>,
}

impl SearchHandler {
    pub fn new(search_use_case: Arc<SearchCatalogUseCase>) -> Self {
        Self { search_use_case }
    }

    pub async fn search_text(
        State(handler): State<Arc<SearchHandler>>,
        Query(params): Query<SearchTextParamsDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let start_time = std::time::Instant::now();

        let request = SearchTextRequest {
            query: params.query,
            top_k: params.top_k,
        };

        let result = handler.search_use_case.execute_text(request).await;
        Ok(Self::respond(result, start_time))
    }

    /// Multipart image search. The uploaded file's name doubles as the S3
    /// object key the retriever embeds, so the query image must exist in the
    /// configured bucket under that name.
    pub async fn search_image(
        State(handler): State<Arc<SearchHandler>>,
        mut multipart: Multipart,
    ) -> Result<impl IntoResponse, StatusCode> {
        let start_time = std::time::Instant::now();

        let mut image_key: Option<String> = None;
        let mut top_k: Option<i32> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?
        {
            if let Some(file_name) = field.file_name() {
                image_key = Some(file_name.to_string());
                // Drain the upload; only the object key is needed here.
                let _ = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            } else if field.name() == Some("top_k") {
                let value = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                top_k = value.trim().parse::<i32>().ok();
            }
        }

        let Some(image_key) = image_key else {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "NO_IMAGE_PROVIDED".to_string(),
                    "No image provided in the request".to_string(),
                    None,
                )),
            ));
        };

        let request = SearchImageRequest { image_key, top_k };

        let result = handler.search_use_case.execute_image(request).await;
        Ok(Self::respond(result, start_time))
    }

    fn respond(
        result: Result<
            crate::application::use_cases::search_catalog::SearchCatalogResponse,
            SearchCatalogError,
        >,
        start_time: std::time::Instant,
    ) -> (StatusCode, Json<ApiResponse<SearchResponseDto>>) {
        match result {
            Ok(response) => (
                StatusCode::OK,
                Json(ApiResponse::success(SearchResponseDto::from(response))),
            ),
            // Zero matches is an empty state, not a failure.
            Err(SearchCatalogError::NoResults) => (
                StatusCode::OK,
                Json(ApiResponse::success(SearchResponseDto::empty(
                    start_time.elapsed().as_millis() as u64,
                ))),
            ),
            Err(SearchCatalogError::ConfigurationError(msg)) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "NO_ACTIVE_CATALOG".to_string(),
                    msg,
                    None,
                )),
            ),
            Err(SearchCatalogError::ValidationError(msg)) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("INVALID_QUERY".to_string(), msg, None)),
            ),
            Err(SearchCatalogError::ExternalServiceError(msg)) => (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error(
                    "EXTERNAL_SERVICE_ERROR".to_string(),
                    msg,
                    None,
                )),
            ),
        }
    }
}
