pub mod catalog_handler;
pub mod ingest_handler;
pub mod search_handler;

pub use catalog_handler::CatalogHandler;
pub use ingest_handler::IngestHandler;
pub use search_handler::SearchHandler;
