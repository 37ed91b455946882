use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::application::use_cases::IngestCatalogUseCase;
use crate::application::use_cases::ingest_catalog::{IngestCatalogError, IngestCatalogRequest};
use crate::presentation::http::dto::{ApiResponse, IngestRequestDto, IngestResponseDto};

pub struct IngestHandler {
    ingest_use_case: Arc<IngestCatalogUseCase>,
}

impl IngestHandler {
    pub fn new(ingest_use_case: Arc<IngestCatalogUseCase>) -> Self {
        Self { ingest_use_case }
    }

    pub async fn ingest_catalog(
        State(handler): State<Arc<IngestHandler>>,
        Json(body): Json<IngestRequestDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = IngestCatalogRequest {
            bucket_name: body.bucket_name,
            retriever_name: body.retriever_name,
            s3_endpoint: body.s3_endpoint,
        };

        match handler.ingest_use_case.execute(request).await {
            Ok(response) => {
                let dto = IngestResponseDto::from(response);
                Ok((
                    StatusCode::OK,
                    Json(ApiResponse::<IngestResponseDto>::success(dto)),
                ))
            }
            Err(IngestCatalogError::ConfigurationError(msg)) => Ok((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "INVALID_CONFIGURATION".to_string(),
                    msg,
                    None,
                )),
            )),
            Err(IngestCatalogError::ExternalServiceError(msg)) => Ok((
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error(
                    "EXTERNAL_SERVICE_ERROR".to_string(),
                    msg,
                    None,
                )),
            )),
        }
    }
}
