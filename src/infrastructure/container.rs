use std::{path::PathBuf, sync::Arc};

use crate::{
    application::{
        ports::{CatalogSource, ConfigStore, VectorRetriever},
        services::{CatalogSearchService, IngestionService, ProductResolver},
        use_cases::{BrowseCatalogUseCase, IngestCatalogUseCase, SearchCatalogUseCase},
    },
    domain::repositories::ProductRepository,
    infrastructure::{
        catalog::CsvCatalogSource,
        database::{create_connection_pool, repositories::PostgresProductRepository},
        external_services::{AidbRetriever, aidb_retriever::DEFAULT_MODEL_ID},
        session::InMemoryConfigStore,
    },
    presentation::http::handlers::{CatalogHandler, IngestHandler, SearchHandler},
};

const DEFAULT_IMAGES_DIR: &str = "dataset/images";
const DEFAULT_CATALOG_CSV: &str = "dataset/stylesc.csv";
const DEFAULT_TOP_K: i32 = 5;

pub struct AppContainer {
    // Repositories and ports
    pub product_repository: Arc<dyn ProductRepository>,
    pub vector_retriever: Arc<dyn VectorRetriever>,
    pub catalog_source: Arc<dyn CatalogSource>,
    pub config_store: Arc<dyn ConfigStore>,

    // Application services
    pub ingestion_service: Arc<IngestionService>,
    pub search_service: Arc<CatalogSearchService>,
    pub product_resolver: Arc<ProductResolver>,

    // Use cases
    pub ingest_catalog_use_case: Arc<IngestCatalogUseCase>,
    pub search_catalog_use_case: Arc<SearchCatalogUseCase>,
    pub browse_catalog_use_case: Arc<BrowseCatalogUseCase>,

    // HTTP handlers
    pub ingest_handler: Arc<IngestHandler>,
    pub search_handler: Arc<SearchHandler>,
    pub catalog_handler: Arc<CatalogHandler>,
}

impl AppContainer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let db_pool = create_connection_pool()?;

        let images_dir = PathBuf::from(
            std::env::var("IMAGES_DIR").unwrap_or_else(|_| DEFAULT_IMAGES_DIR.to_string()),
        );
        let catalog_csv = PathBuf::from(
            std::env::var("CATALOG_CSV").unwrap_or_else(|_| DEFAULT_CATALOG_CSV.to_string()),
        );
        let model_id =
            std::env::var("CLIP_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        let default_top_k = std::env::var("DEFAULT_TOP_K")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(DEFAULT_TOP_K);

        // Ports
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(PostgresProductRepository::new(db_pool.clone()));
        let vector_retriever: Arc<dyn VectorRetriever> =
            Arc::new(AidbRetriever::new(db_pool, model_id));
        let catalog_source: Arc<dyn CatalogSource> =
            Arc::new(CsvCatalogSource::new(catalog_csv));
        let config_store: Arc<dyn ConfigStore> = Arc::new(InMemoryConfigStore::new());

        // Application services
        let product_resolver = Arc::new(ProductResolver::new(
            product_repository.clone(),
            images_dir,
        ));
        let ingestion_service = Arc::new(IngestionService::new(
            product_repository.clone(),
            vector_retriever.clone(),
            catalog_source.clone(),
        ));
        let search_service = Arc::new(CatalogSearchService::new(
            vector_retriever.clone(),
            product_resolver.clone(),
        ));

        // Use cases
        let ingest_catalog_use_case = Arc::new(IngestCatalogUseCase::new(
            ingestion_service.clone(),
            config_store.clone(),
        ));
        let search_catalog_use_case = Arc::new(SearchCatalogUseCase::new(
            search_service.clone(),
            config_store.clone(),
            default_top_k,
        ));
        let browse_catalog_use_case = Arc::new(BrowseCatalogUseCase::new(
            product_repository.clone(),
            product_resolver.clone(),
        ));

        // HTTP handlers
        let ingest_handler = Arc::new(IngestHandler::new(ingest_catalog_use_case.clone()));
        let search_handler = Arc::new(SearchHandler::new(search_catalog_use_case.clone()));
        let catalog_handler = Arc::new(CatalogHandler::new(browse_catalog_use_case.clone()));

        Ok(Self {
            product_repository,
            vector_retriever,
            catalog_source,
            config_store,
            ingestion_service,
            search_service,
            product_resolver,
            ingest_catalog_use_case,
            search_catalog_use_case,
            browse_catalog_use_case,
            ingest_handler,
            search_handler,
            catalog_handler,
        })
    }
}
