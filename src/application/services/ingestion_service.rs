use std::sync::Arc;

use crate::application::ports::{CatalogSource, VectorRetriever};
use crate::domain::entities::CatalogConfig;
use crate::domain::repositories::ProductRepository;

#[derive(Debug)]
pub enum IngestionServiceError {
    RepositoryError(String),
    RetrieverError(String),
    SourceError(String),
}

impl std::fmt::Display for IngestionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestionServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
            IngestionServiceError::RetrieverError(msg) => write!(f, "Retriever error: {}", msg),
            IngestionServiceError::SourceError(msg) => write!(f, "Source error: {}", msg),
        }
    }
}

impl std::error::Error for IngestionServiceError {}

/// Orchestrates one ingestion run: reset the product table, bind and refresh
/// the named retriever, then bulk-load the catalog CSV.
///
/// The table is replaced unconditionally, so re-running with the same inputs
/// leaves the same contents. A failure aborts the remaining steps; partial
/// state (an empty table, say) is tolerated and reported, never fatal.
pub struct IngestionService {
    product_repository: Arc<dyn ProductRepository>,
    vector_retriever: Arc<dyn VectorRetriever>,
    catalog_source: Arc<dyn CatalogSource>,
}

impl IngestionService {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        vector_retriever: Arc<dyn VectorRetriever>,
        catalog_source: Arc<dyn CatalogSource>,
    ) -> Self {
        Self {
            product_repository,
            vector_retriever,
            catalog_source,
        }
    }

    /// Returns the number of catalog rows loaded.
    pub async fn ingest(&self, config: &CatalogConfig) -> Result<usize, IngestionServiceError> {
        self.product_repository
            .reset_schema()
            .await
            .map_err(|e| IngestionServiceError::RepositoryError(e.to_string()))?;

        self.vector_retriever
            .create_retriever(
                config.retriever_name(),
                config.bucket_name(),
                config.s3_endpoint(),
            )
            .await
            .map_err(|e| IngestionServiceError::RetrieverError(e.to_string()))?;

        self.vector_retriever
            .refresh_retriever(config.retriever_name())
            .await
            .map_err(|e| IngestionServiceError::RetrieverError(e.to_string()))?;

        let products = self
            .catalog_source
            .read_catalog()
            .map_err(|e| IngestionServiceError::SourceError(e.to_string()))?;

        let loaded = self
            .product_repository
            .insert_batch(&products)
            .await
            .map_err(|e| IngestionServiceError::RepositoryError(e.to_string()))?;

        tracing::info!(
            "Ingested {} products for retriever '{}'",
            loaded,
            config.retriever_name()
        );

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::catalog_source::CatalogSourceError;
    use crate::application::ports::vector_retriever::{RetrievedItem, VectorRetrieverError};
    use crate::domain::entities::Product;
    use crate::domain::repositories::product_repository::ProductRepositoryError;

    fn product(img_id: &str) -> Product {
        Product::new(
            img_id.to_string(),
            "Men".to_string(),
            "Apparel".to_string(),
            "Topwear".to_string(),
            "Tshirts".to_string(),
            "Blue".to_string(),
            "Summer".to_string(),
            Some(2016),
            Some("Casual".to_string()),
            Some(format!("Product {}", img_id)),
        )
    }

    #[derive(Default)]
    struct InMemoryProductRepository {
        rows: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn reset_schema(&self) -> Result<(), ProductRepositoryError> {
            self.rows.lock().unwrap().clear();
            Ok(())
        }

        async fn insert_batch(
            &self,
            products: &[Product],
        ) -> Result<usize, ProductRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            rows.extend_from_slice(products);
            Ok(products.len())
        }

        async fn find_by_img_id(
            &self,
            img_id: &str,
        ) -> Result<Option<Product>, ProductRepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.img_id() == img_id)
                .cloned())
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
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    #[derive(Default)]
    struct RecordingRetriever {
        calls: Mutex<Vec<String>>,
        fail_on_create: bool,
    }

    #[async_trait]
    impl VectorRetriever for RecordingRetriever {
        async fn create_retriever(
            &self,
            name: &str,
            _bucket: &str,
            _endpoint: &str,
        ) -> Result<(), VectorRetrieverError> {
            self.calls.lock().unwrap().push(format!("create:{}", name));
            if self.fail_on_create {
                return Err(VectorRetrieverError::ExtensionError(
                    "connection refused".to_string(),
                ));
            }
            Ok(())
        }

        async fn refresh_retriever(&self, name: &str) -> Result<(), VectorRetrieverError> {
            self.calls.lock().unwrap().push(format!("refresh:{}", name));
            Ok(())
        }

        async fn retrieve_by_text(
            &self,
            _name: &str,
            _top_k: i32,
            _query: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            Ok(Vec::new())
        }

        async fn retrieve_by_image(
            &self,
            _name: &str,
            _top_k: i32,
            _bucket: &str,
            _image_key: &str,
            _endpoint: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            Ok(Vec::new())
        }
    }

    struct FixedCatalogSource {
        products: Vec<Product>,
    }

    impl CatalogSource for FixedCatalogSource {
        fn read_catalog(&self) -> Result<Vec<Product>, CatalogSourceError> {
            Ok(self.products.clone())
        }
    }

    fn config() -> CatalogConfig {
        CatalogConfig::new(
            "demo-bucket".to_string(),
            "img_embeddings".to_string(),
            "http://s3.eu-central-1.amazonaws.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_ingest_loads_rows_and_registers_retriever() {
        let repository = Arc::new(InMemoryProductRepository::default());
        let retriever = Arc::new(RecordingRetriever::default());
        let source = Arc::new(FixedCatalogSource {
            products: vec![product("a"), product("b")],
        });

        let service =
            IngestionService::new(repository.clone(), retriever.clone(), source);

        let loaded = service.ingest(&config()).await.unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(repository.count().await.unwrap(), 2);
        assert_eq!(
            *retriever.calls.lock().unwrap(),
            vec!["create:img_embeddings", "refresh:img_embeddings"]
        );
    }

    #[tokio::test]
    async fn test_reingest_replaces_rows_without_duplicates() {
        let repository = Arc::new(InMemoryProductRepository::default());
        let retriever = Arc::new(RecordingRetriever::default());
        let source = Arc::new(FixedCatalogSource {
            products: vec![product("a"), product("b"), product("c")],
        });

        let service =
            IngestionService::new(repository.clone(), retriever, source);

        service.ingest(&config()).await.unwrap();
        service.ingest(&config()).await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_retriever_failure_aborts_before_load() {
        let repository = Arc::new(InMemoryProductRepository::default());
        let retriever = Arc::new(RecordingRetriever {
            fail_on_create: true,
            ..Default::default()
        });
        let source = Arc::new(FixedCatalogSource {
            products: vec![product("a")],
        });

        let service =
            IngestionService::new(repository.clone(), retriever.clone(), source);

        let result = service.ingest(&config()).await;

        assert!(matches!(
            result,
            Err(IngestionServiceError::RetrieverError(_))
        ));
        // Schema was reset but nothing was loaded: empty table, no refresh.
        assert_eq!(repository.count().await.unwrap(), 0);
        assert_eq!(
            *retriever.calls.lock().unwrap(),
            vec!["create:img_embeddings"]
        );
    }
}
