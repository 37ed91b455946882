pub mod catalog_config;
pub mod product;

pub use catalog_config::CatalogConfig;
pub use product::Product;
