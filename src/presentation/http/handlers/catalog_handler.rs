use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::BrowseCatalogUseCase;
use crate::presentation::http::dto::{
    ApiResponse, CategoryListResponseDto, CategoryProductsResponseDto, ProductCardDto,
};

pub struct CatalogHandler {
    browse_use_case: Arc<BrowseCatalogUseCase>,
}

impl CatalogHandler {
    pub fn new(browse_use_case: Arc<BrowseCatalogUseCase>) -> Self {
        Self { browse_use_case }
    }

    pub async fn list_categories(
        State(handler): State<Arc<CatalogHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.browse_use_case.list_categories().await {
            Ok(categories) => Ok((
                StatusCode::OK,
                Json(ApiResponse::success(CategoryListResponseDto { categories })),
            )),
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "CATALOG_UNAVAILABLE".to_string(),
                    e.to_string(),
                    None,
                )),
            )),
        }
    }

    pub async fn products_in_category(
        State(handler): State<Arc<CatalogHandler>>,
        Path(category): Path<String>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.browse_use_case.products_in_category(&category).await {
            Ok(products) => {
                let dto = CategoryProductsResponseDto {
                    category,
                    products: products.into_iter().map(ProductCardDto::from).collect(),
                };
                Ok((StatusCode::OK, Json(ApiResponse::success(dto))))
            }
            Err(e) => Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    "CATALOG_UNAVAILABLE".to_string(),
                    e.to_string(),
                    None,
                )),
            )),
        }
    }
}
