use std::sync::Arc;

use crate::application::services::ProductResolver;
use crate::application::services::product_resolver::ResolvedProduct;
use crate::domain::repositories::ProductRepository;

// Matches the category pane of the original UI.
const CATEGORY_PAGE_SIZE: i64 = 30;

#[derive(Debug)]
pub enum BrowseCatalogError {
    RepositoryError(String),
}

impl std::fmt::Display for BrowseCatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowseCatalogError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for BrowseCatalogError {}

/// Plain relational browsing of the catalog, no vector engine involved.
pub struct BrowseCatalogUseCase {
    product_repository: Arc<dyn ProductRepository>,
    resolver: Arc<ProductResolver>,
}

impl BrowseCatalogUseCase {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        resolver: Arc<ProductResolver>,
    ) -> Self {
        Self {
            product_repository,
            resolver,
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, BrowseCatalogError> {
        self.product_repository
            .distinct_categories()
            .await
            .map_err(|e| BrowseCatalogError::RepositoryError(e.to_string()))
    }

    pub async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<ResolvedProduct>, BrowseCatalogError> {
        let products = self
            .product_repository
            .find_by_category(category, CATEGORY_PAGE_SIZE)
            .await
            .map_err(|e| BrowseCatalogError::RepositoryError(e.to_string()))?;

        Ok(products
            .into_iter()
            .map(|p| ResolvedProduct {
                img_id: p.img_id().to_string(),
                name: p.display_name_or_id().to_string(),
                image_path: self.resolver.image_path(p.img_id()),
            })
            .collect())
    }
}
