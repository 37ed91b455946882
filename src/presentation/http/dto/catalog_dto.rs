use serde::Serialize;

use crate::application::services::product_resolver::ResolvedProduct;

#[derive(Debug, Serialize)]
pub struct CategoryListResponseDto {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductCardDto {
    pub img_id: String,
    pub name: String,
    pub image_path: String,
}

impl From<ResolvedProduct> for ProductCardDto {
    fn from(product: ResolvedProduct) -> Self {
        Self {
            img_id: product.img_id,
            name: product.name,
            image_path: product.image_path,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryProductsResponseDto {
    pub category: String,
    pub products: Vec<ProductCardDto>,
}
