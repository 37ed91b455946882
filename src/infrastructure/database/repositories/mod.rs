pub mod postgres_product_repository;

pub use postgres_product_repository::PostgresProductRepository;
