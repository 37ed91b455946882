use serde::{Deserialize, Serialize};

use crate::application::use_cases::ingest_catalog::IngestCatalogResponse;

#[derive(Debug, Deserialize)]
pub struct IngestRequestDto {
    pub bucket_name: String,
    pub retriever_name: String,
    #[serde(default)]
    pub s3_endpoint: String,
}

#[derive(Debug, Serialize)]
pub struct IngestResponseDto {
    pub bucket_name: String,
    pub retriever_name: String,
    pub rows_loaded: usize,
    pub elapsed_ms: u64,
}

impl From<IngestCatalogResponse> for IngestResponseDto {
    fn from(response: IngestCatalogResponse) -> Self {
        Self {
            bucket_name: response.bucket_name,
            retriever_name: response.retriever_name,
            rows_loaded: response.rows_loaded,
            elapsed_ms: response.elapsed_ms,
        }
    }
}
