pub mod ingestion_service;
pub mod product_resolver;
pub mod search_service;

pub use ingestion_service::IngestionService;
pub use product_resolver::ProductResolver;
pub use search_service::CatalogSearchService;
