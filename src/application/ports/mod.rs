pub mod catalog_source;
pub mod config_store;
pub mod vector_retriever;

pub use catalog_source::CatalogSource;
pub use config_store::ConfigStore;
pub use vector_retriever::{RetrievedItem, VectorRetriever};
