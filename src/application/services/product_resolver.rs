use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::repositories::{
    ProductRepository, product_repository::ProductRepositoryError,
};

/// A product resolved for display: its name and where its image lives on
/// disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProduct {
    pub img_id: String,
    pub name: String,
    pub image_path: String,
}

/// Turns image ids returned by the vector engine into displayable metadata.
///
/// Image paths are constructed deterministically as `<images_dir>/<id>.jpg`;
/// an id with no matching catalog row resolves to `None`, never an error.
pub struct ProductResolver {
    product_repository: Arc<dyn ProductRepository>,
    images_dir: PathBuf,
}

impl ProductResolver {
    pub fn new(product_repository: Arc<dyn ProductRepository>, images_dir: PathBuf) -> Self {
        Self {
            product_repository,
            images_dir,
        }
    }

    pub fn image_path(&self, img_id: &str) -> String {
        self.images_dir
            .join(format!("{}.jpg", img_id))
            .to_string_lossy()
            .into_owned()
    }

    pub async fn resolve(
        &self,
        img_id: &str,
    ) -> Result<Option<ResolvedProduct>, ProductRepositoryError> {
        let product = self.product_repository.find_by_img_id(img_id).await?;

        Ok(product.map(|p| ResolvedProduct {
            img_id: p.img_id().to_string(),
            name: p.display_name_or_id().to_string(),
            image_path: self.image_path(p.img_id()),
        }))
    }
}
