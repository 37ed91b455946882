use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::services::IngestionService;
use crate::application::services::ingestion_service::IngestionServiceError;
use crate::domain::entities::CatalogConfig;

#[derive(Debug)]
pub enum IngestCatalogError {
    ConfigurationError(String),
    ExternalServiceError(String),
}

impl std::fmt::Display for IngestCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestCatalogError::ConfigurationError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            IngestCatalogError::ExternalServiceError(msg) => {
                write!(f, "External service error: {}", msg)
            }
        }
    }
}

impl std::error::Error for IngestCatalogError {}

#[derive(Debug, Clone)]
pub struct IngestCatalogRequest {
    pub bucket_name: String,
    pub retriever_name: String,
    pub s3_endpoint: String,
}

#[derive(Debug, Clone)]
pub struct IngestCatalogResponse {
    pub bucket_name: String,
    pub retriever_name: String,
    pub rows_loaded: usize,
    pub elapsed_ms: u64,
}

/// Validates the bucket form input, runs one ingestion, and on success makes
/// the resulting config the active one for subsequent searches.
pub struct IngestCatalogUseCase {
    ingestion_service: Arc<IngestionService>,
    config_store: Arc<dyn ConfigStore>,
}

impl IngestCatalogUseCase {
    pub fn new(ingestion_service: Arc<IngestionService>, config_store: Arc<dyn ConfigStore>) -> Self {
        Self {
            ingestion_service,
            config_store,
        }
    }

    pub async fn execute(
        &self,
        request: IngestCatalogRequest,
    ) -> Result<IngestCatalogResponse, IngestCatalogError> {
        let start_time = std::time::Instant::now();

        if request.bucket_name.trim().is_empty() {
            return Err(IngestCatalogError::ConfigurationError(
                "Bucket name cannot be empty".to_string(),
            ));
        }
        if request.retriever_name.trim().is_empty() {
            return Err(IngestCatalogError::ConfigurationError(
                "Retriever name cannot be empty".to_string(),
            ));
        }

        let config = CatalogConfig::new(
            request.bucket_name.trim().to_string(),
            request.retriever_name.trim().to_string(),
            request.s3_endpoint.trim().to_string(),
        );

        let rows_loaded = self
            .ingestion_service
            .ingest(&config)
            .await
            .map_err(|e| match e {
                IngestionServiceError::RepositoryError(msg)
                | IngestionServiceError::RetrieverError(msg)
                | IngestionServiceError::SourceError(msg) => {
                    IngestCatalogError::ExternalServiceError(msg)
                }
            })?;

        // Searches are only valid against a config whose ingest succeeded.
        self.config_store.set(config.clone());

        Ok(IngestCatalogResponse {
            bucket_name: config.bucket_name().to_string(),
            retriever_name: config.retriever_name().to_string(),
            rows_loaded,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
