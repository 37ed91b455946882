use std::sync::Arc;

use crate::application::ports::VectorRetriever;
use crate::application::services::product_resolver::{ProductResolver, ResolvedProduct};
use crate::domain::entities::CatalogConfig;

#[derive(Debug)]
pub enum SearchServiceError {
    NoResults,
    RetrieverError(String),
    RepositoryError(String),
}

impl std::fmt::Display for SearchServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchServiceError::NoResults => write!(f, "No results found"),
            SearchServiceError::RetrieverError(msg) => write!(f, "Retriever error: {}", msg),
            SearchServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for SearchServiceError {}

/// One entry of a search result, in the engine's ranking order.
///
/// `product` is `None` when the retriever returned an id the catalog no
/// longer holds; the caller renders it as "not found" rather than dropping
/// it, so the response always has as many entries as the engine returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    pub img_id: String,
    pub product: Option<ResolvedProduct>,
}

/// Orchestrates a similarity search: ask the vector engine for the top-k
/// ids, then resolve each id against the product table.
///
/// Ranking is owned by the engine; this service never re-sorts. An empty
/// engine response short-circuits with `NoResults` before any lookups.
pub struct CatalogSearchService {
    vector_retriever: Arc<dyn VectorRetriever>,
    resolver: Arc<ProductResolver>,
}

impl CatalogSearchService {
    pub fn new(vector_retriever: Arc<dyn VectorRetriever>, resolver: Arc<ProductResolver>) -> Self {
        Self {
            vector_retriever,
            resolver,
        }
    }

    pub async fn search_by_text(
        &self,
        retriever_name: &str,
        top_k: i32,
        query: &str,
    ) -> Result<Vec<SearchMatch>, SearchServiceError> {
        let items = self
            .vector_retriever
            .retrieve_by_text(retriever_name, top_k, query)
            .await
            .map_err(|e| SearchServiceError::RetrieverError(e.to_string()))?;

        self.resolve_matches(items).await
    }

    pub async fn search_by_image(
        &self,
        config: &CatalogConfig,
        top_k: i32,
        image_key: &str,
    ) -> Result<Vec<SearchMatch>, SearchServiceError> {
        let items = self
            .vector_retriever
            .retrieve_by_image(
                config.retriever_name(),
                top_k,
                config.bucket_name(),
                image_key,
                config.s3_endpoint(),
            )
            .await
            .map_err(|e| SearchServiceError::RetrieverError(e.to_string()))?;

        self.resolve_matches(items).await
    }

    async fn resolve_matches(
        &self,
        items: Vec<crate::application::ports::RetrievedItem>,
    ) -> Result<Vec<SearchMatch>, SearchServiceError> {
        if items.is_empty() {
            return Err(SearchServiceError::NoResults);
        }

        let mut matches = Vec::with_capacity(items.len());
        for item in items {
            let product = self
                .resolver
                .resolve(&item.img_id)
                .await
                .map_err(|e| SearchServiceError::RepositoryError(e.to_string()))?;

            matches.push(SearchMatch {
                img_id: item.img_id,
                product,
            });
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::ports::vector_retriever::{RetrievedItem, VectorRetrieverError};
    use crate::domain::entities::Product;
    use crate::domain::repositories::{
        ProductRepository, product_repository::ProductRepositoryError,
    };

    struct StubRetriever {
        items: Result<Vec<RetrievedItem>, String>,
    }

    #[async_trait]
    impl VectorRetriever for StubRetriever {
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
            _top_k: i32,
            _query: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            self.items
                .clone()
                .map_err(VectorRetrieverError::ExtensionError)
        }

        async fn retrieve_by_image(
            &self,
            _name: &str,
            _top_k: i32,
            _bucket: &str,
            _image_key: &str,
            _endpoint: &str,
        ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
            self.items
                .clone()
                .map_err(VectorRetrieverError::ExtensionError)
        }
    }

    struct CountingRepository {
        rows: Mutex<Vec<Product>>,
        lookups: AtomicUsize,
    }

    impl CountingRepository {
        fn with_products(products: Vec<Product>) -> Self {
            Self {
                rows: Mutex::new(products),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for CountingRepository {
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
            img_id: &str,
        ) -> Result<Option<Product>, ProductRepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
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

    fn product(img_id: &str, name: &str) -> Product {
        Product::new(
            img_id.to_string(),
            "Women".to_string(),
            "Footwear".to_string(),
            "Shoes".to_string(),
            "Heels".to_string(),
            "Red".to_string(),
            "Summer".to_string(),
            Some(2012),
            None,
            Some(name.to_string()),
        )
    }

    fn item(img_id: &str) -> RetrievedItem {
        RetrievedItem {
            img_id: img_id.to_string(),
        }
    }

    fn service(
        items: Result<Vec<RetrievedItem>, String>,
        repository: Arc<CountingRepository>,
    ) -> CatalogSearchService {
        let resolver = Arc::new(ProductResolver::new(
            repository,
            PathBuf::from("dataset/images"),
        ));
        CatalogSearchService::new(Arc::new(StubRetriever { items }), resolver)
    }

    #[tokio::test]
    async fn test_returns_one_entry_per_hit_in_engine_order() {
        let repository = Arc::new(CountingRepository::with_products(vec![
            product("a", "First"),
            product("c", "Third"),
        ]));
        let service = service(
            Ok(vec![item("c"), item("missing"), item("a")]),
            repository.clone(),
        );

        let matches = service
            .search_by_text("img_embeddings", 3, "shoe")
            .await
            .unwrap();

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].img_id, "c");
        assert_eq!(matches[0].product.as_ref().unwrap().name, "Third");
        assert_eq!(matches[1].img_id, "missing");
        assert!(matches[1].product.is_none());
        assert_eq!(matches[2].img_id, "a");
        assert_eq!(matches[2].product.as_ref().unwrap().name, "First");
    }

    #[tokio::test]
    async fn test_empty_engine_response_signals_no_results_without_lookups() {
        let repository = Arc::new(CountingRepository::with_products(vec![product(
            "a", "First",
        )]));
        let service = service(Ok(vec![]), repository.clone());

        let result = service.search_by_text("img_embeddings", 5, "nothing").await;

        assert!(matches!(result, Err(SearchServiceError::NoResults)));
        assert_eq!(repository.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_retriever_failure_surfaces_as_retriever_error() {
        let repository = Arc::new(CountingRepository::with_products(Vec::new()));
        let service = service(Err("connection refused".to_string()), repository.clone());

        let result = service.search_by_text("img_embeddings", 5, "shoe").await;

        assert!(matches!(result, Err(SearchServiceError::RetrieverError(_))));
        assert_eq!(repository.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_image_search_uses_session_bucket_and_endpoint() {
        let repository = Arc::new(CountingRepository::with_products(vec![product(
            "id1",
            "Red Shoe",
        )]));
        let service = service(Ok(vec![item("id1")]), repository);
        let config = CatalogConfig::new(
            "demo-bucket".to_string(),
            "img_embeddings".to_string(),
            "http://s3.eu-central-1.amazonaws.com".to_string(),
        );

        let matches = service
            .search_by_image(&config, 2, "query.jpg")
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].product.as_ref().unwrap().image_path,
            "dataset/images/id1.jpg"
        );
    }
}
