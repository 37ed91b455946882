use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::services::CatalogSearchService;
use crate::application::services::search_service::{SearchMatch, SearchServiceError};

#[derive(Debug)]
pub enum SearchCatalogError {
    ConfigurationError(String),
    ValidationError(String),
    NoResults,
    ExternalServiceError(String),
}

impl std::fmt::Display for SearchCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCatalogError::ConfigurationError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            SearchCatalogError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            SearchCatalogError::NoResults => write!(f, "No results found"),
            SearchCatalogError::ExternalServiceError(msg) => {
                write!(f, "External service error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchCatalogError {}

#[derive(Debug, Clone)]
pub struct SearchTextRequest {
    pub query: String,
    pub top_k: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct SearchImageRequest {
    /// Object key of the query image inside the configured bucket. For
    /// uploads this is the uploaded file's name.
    pub image_key: String,
    pub top_k: Option<i32>,
}

#[derive(Debug)]
pub struct SearchCatalogResponse {
    pub matches: Vec<SearchMatch>,
    pub search_time_ms: u64,
}

/// Entry point for both search modes. Requires an active catalog config
/// (i.e. a completed ingest), validates inputs, and reports timing.
pub struct SearchCatalogUseCase {
    search_service: Arc<CatalogSearchService>,
    config_store: Arc<dyn ConfigStore>,
    default_top_k: i32,
}

impl SearchCatalogUseCase {
    pub fn new(
        search_service: Arc<CatalogSearchService>,
        config_store: Arc<dyn ConfigStore>,
        default_top_k: i32,
    ) -> Self {
        Self {
            search_service,
            config_store,
            default_top_k,
        }
    }

    pub async fn execute_text(
        &self,
        request: SearchTextRequest,
    ) -> Result<SearchCatalogResponse, SearchCatalogError> {
        let start_time = std::time::Instant::now();

        if request.query.trim().is_empty() {
            return Err(SearchCatalogError::ValidationError(
                "Query cannot be empty".to_string(),
            ));
        }

        let top_k = self.validated_top_k(request.top_k)?;
        let config = self.active_config()?;

        let matches = self
            .search_service
            .search_by_text(config.retriever_name(), top_k, request.query.trim())
            .await
            .map_err(Self::map_service_error)?;

        Ok(SearchCatalogResponse {
            matches,
            search_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    pub async fn execute_image(
        &self,
        request: SearchImageRequest,
    ) -> Result<SearchCatalogResponse, SearchCatalogError> {
        let start_time = std::time::Instant::now();

        if request.image_key.trim().is_empty() {
            return Err(SearchCatalogError::ValidationError(
                "Image key cannot be empty".to_string(),
            ));
        }

        let top_k = self.validated_top_k(request.top_k)?;
        let config = self.active_config()?;

        let matches = self
            .search_service
            .search_by_image(&config, top_k, request.image_key.trim())
            .await
            .map_err(Self::map_service_error)?;

        Ok(SearchCatalogResponse {
            matches,
            search_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    fn active_config(
        &self,
    ) -> Result<crate::domain::entities::CatalogConfig, SearchCatalogError> {
        self.config_store.current().ok_or_else(|| {
            SearchCatalogError::ConfigurationError(
                "No catalog has been ingested yet".to_string(),
            )
        })
    }

    fn validated_top_k(&self, top_k: Option<i32>) -> Result<i32, SearchCatalogError> {
        let top_k = top_k.unwrap_or(self.default_top_k);
        if !(1..=100).contains(&top_k) {
            return Err(SearchCatalogError::ValidationError(
                "top_k must be between 1 and 100".to_string(),
            ));
        }
        Ok(top_k)
    }

    fn map_service_error(error: SearchServiceError) -> SearchCatalogError {
        match error {
            SearchServiceError::NoResults => SearchCatalogError::NoResults,
            SearchServiceError::RetrieverError(msg)
            | SearchServiceError::RepositoryError(msg) => {
                SearchCatalogError::ExternalServiceError(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::application::ports::vector_retriever::{
        RetrievedItem, VectorRetriever, VectorRetrieverError,
    };
    use crate::application::services::ProductResolver;
    use crate::domain::entities::{CatalogConfig, Product};
    use crate::domain::repositories::{
        ProductRepository, product_repository::ProductRepositoryError,
    };

    struct EchoRetriever {
        last_top_k: Mutex<Option<i32>>,
    }

    #[async_trait]
    impl VectorRetriever for EchoRetriever {
        async fn create_retriever(
            &self,
            _name: &str,
            _bucket: &str,
            _endpoint: &str,
        ) -> Result<(), VectorRetrieverError> {
            Ok(())
        }

        async fn refresh_retriever(&self, _name: &str) -> Result<(), VectorRetrieverError> {
            Ok(())
        }

        async fn retrieve_by_text(
            &self,
            _name: &str,
            top_k: i32,
            _query: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            *self.last_top_k.lock().unwrap() = Some(top_k);
            Ok(vec![RetrievedItem {
                img_id: "id1".to_string(),
            }])
        }

        async fn retrieve_by_image(
            &self,
            _name: &str,
            top_k: i32,
            _bucket: &str,
            _image_key: &str,
            _endpoint: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            *self.last_top_k.lock().unwrap() = Some(top_k);
            Ok(vec![RetrievedItem {
                img_id: "id1".to_string(),
            }])
        }
    }

    struct EmptyRepository;

    #[async_trait]
    impl ProductRepository for EmptyRepository {
        async fn reset_schema(&self) -> Result<(), ProductRepositoryError> {
            Ok(())
        }

        async fn insert_batch(
            &self,
            _products: &[Product],
        ) -> Result<usize, ProductRepositoryError> {
            Ok(0)
        }

        async fn find_by_img_id(
            &self,
            _img_id: &str,
        ) -> Result<Option<Product>, ProductRepositoryError> {
            Ok(None)
        }

        async fn distinct_categories(&self) -> Result<Vec<String>, ProductRepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_category(
            &self,
            _category: &str,
            _limit: i64,
        ) -> Result<Vec<Product>, ProductRepositoryError> {
            Ok(Vec::new())
        }

        async fn count(&self) -> Result<i64, ProductRepositoryError> {
            Ok(0)
        }
    }

    struct FixedConfigStore {
        config: Option<CatalogConfig>,
    }

    impl ConfigStore for FixedConfigStore {
        fn current(&self) -> Option<CatalogConfig> {
            self.config.clone()
        }

        fn set(&self, _config: CatalogConfig) {}

        fn clear(&self) {}
    }

    fn use_case(with_config: bool) -> (SearchCatalogUseCase, Arc<EchoRetriever>) {
        let retriever = Arc::new(EchoRetriever {
            last_top_k: Mutex::new(None),
        });
        let resolver = Arc::new(ProductResolver::new(
            Arc::new(EmptyRepository),
            PathBuf::from("dataset/images"),
        ));
        let service = Arc::new(CatalogSearchService::new(retriever.clone(), resolver));
        let config = with_config.then(|| {
            CatalogConfig::new(
                "demo-bucket".to_string(),
                "img_embeddings".to_string(),
                String::new(),
            )
        });
        (
            SearchCatalogUseCase::new(service, Arc::new(FixedConfigStore { config }), 5),
            retriever,
        )
    }

    #[tokio::test]
    async fn test_text_search_without_ingest_is_a_configuration_error() {
        let (use_case, _) = use_case(false);
        let result = use_case
            .execute_text(SearchTextRequest {
                query: "shoe".to_string(),
                top_k: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(SearchCatalogError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let (use_case, _) = use_case(true);
        let result = use_case
            .execute_text(SearchTextRequest {
                query: "   ".to_string(),
                top_k: None,
            })
            .await;

        assert!(matches!(result, Err(SearchCatalogError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_top_k_defaults_when_not_given() {
        let (use_case, retriever) = use_case(true);
        use_case
            .execute_text(SearchTextRequest {
                query: "shoe".to_string(),
                top_k: None,
            })
            .await
            .unwrap();

        assert_eq!(*retriever.last_top_k.lock().unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_out_of_range_top_k_is_rejected() {
        let (use_case, _) = use_case(true);
        let result = use_case
            .execute_text(SearchTextRequest {
                query: "shoe".to_string(),
                top_k: Some(0),
            })
            .await;

        assert!(matches!(result, Err(SearchCatalogError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_image_search_passes_explicit_top_k() {
        let (use_case, retriever) = use_case(true);
        use_case
            .execute_image(SearchImageRequest {
                image_key: "query.jpg".to_string(),
                top_k: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(*retriever.last_top_k.lock().unwrap(), Some(2));
    }
}
