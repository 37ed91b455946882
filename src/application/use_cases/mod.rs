pub mod browse_catalog;
pub mod ingest_catalog;
pub mod search_catalog;

pub use browse_catalog::BrowseCatalogUseCase;
pub use ingest_catalog::IngestCatalogUseCase;
pub use search_catalog::SearchCatalogUseCase;
