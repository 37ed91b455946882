use serde::{Deserialize, Serialize};

/// The bucket/retriever binding chosen during ingestion.
///
/// Every search after a successful ingest runs against the retriever and
/// bucket recorded here. The config travels as an explicit value through the
/// orchestrators instead of living in ambient session globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    bucket_name: String,
    retriever_name: String,
    s3_endpoint: String,
}

impl CatalogConfig {
    pub fn new(bucket_name: String, retriever_name: String, s3_endpoint: String) -> Self {
        Self {
            bucket_name,
            retriever_name,
            s3_endpoint,
        }
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn retriever_name(&self) -> &str {
        &self.retriever_name
    }

    pub fn s3_endpoint(&self) -> &str {
        &self.s3_endpoint
    }
}
