use async_trait::async_trait;

use crate::domain::entities::Product;

#[derive(Debug)]
pub enum ProductRepositoryError {
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for ProductRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ProductRepositoryError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ProductRepositoryError {}

/// Relational access to the product table.
///
/// The table is owned by the most recent ingestion: `reset_schema` drops and
/// recreates it, and `insert_batch` fills it from the CSV. Search only ever
/// reads single rows by image id; browsing reads by category.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Ensure the vector extension exists and recreate the product table,
    /// dropping any prior contents.
    async fn reset_schema(&self) -> Result<(), ProductRepositoryError>;

    /// Insert a batch of catalog rows, returning how many were written.
    async fn insert_batch(&self, products: &[Product]) -> Result<usize, ProductRepositoryError>;

    async fn find_by_img_id(
        &self,
        img_id: &str,
    ) -> Result<Option<Product>, ProductRepositoryError>;

    /// Distinct master categories in ascending order.
    async fn distinct_categories(&self) -> Result<Vec<String>, ProductRepositoryError>;

    /// Products in a master category ordered by display name.
    async fn find_by_category(
        &self,
        category: &str,
        limit: i64,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    async fn count(&self) -> Result<i64, ProductRepositoryError>;
}
