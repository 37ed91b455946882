pub mod catalog_dto;
pub mod ingest_dto;
pub mod response_dto;
pub mod search_dto;

pub use catalog_dto::{CategoryListResponseDto, CategoryProductsResponseDto, ProductCardDto};
pub use ingest_dto::{IngestRequestDto, IngestResponseDto};
pub use response_dto::{ApiResponse, HealthResponseDto};
pub use search_dto::{SearchResponseDto, SearchResultDto, SearchTextParamsDto};
