use crate::domain::entities::Product;

#[derive(Debug)]
pub enum CatalogSourceError {
    IoError(String),
    MalformedRow(String),
}

impl std::fmt::Display for CatalogSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSourceError::IoError(msg) => write!(f, "IO error: {}", msg),
            CatalogSourceError::MalformedRow(msg) => write!(f, "Malformed row: {}", msg),
        }
    }
}

impl std::error::Error for CatalogSourceError {}

/// Source of catalog metadata rows for the bulk load.
pub trait CatalogSource: Send + Sync {
    fn read_catalog(&self) -> Result<Vec<Product>, CatalogSourceError>;
}
