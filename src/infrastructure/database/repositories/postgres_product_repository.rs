use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::domain::entities::Product;
use crate::domain::repositories::{
    ProductRepository, product_repository::ProductRepositoryError,
};
use crate::infrastructure::database::models::ProductModel;
use crate::infrastructure::database::schema::products;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

// Multi-row inserts in chunks keep the bulk load well under Postgres's bind
// parameter limit (10 columns * 500 rows per statement).
const INSERT_CHUNK_SIZE: usize = 500;

const RESET_SCHEMA_SQL: &str = "\
CREATE EXTENSION IF NOT EXISTS aidb CASCADE;
DROP TABLE IF EXISTS products;
CREATE TABLE products (
    img_id TEXT NOT NULL,
    gender TEXT NOT NULL,
    master_category TEXT NOT NULL,
    sub_category TEXT NOT NULL,
    article_type TEXT NOT NULL,
    base_colour TEXT NOT NULL,
    season TEXT NOT NULL,
    year INTEGER,
    usage TEXT,
    product_display_name TEXT
);";

pub struct PostgresProductRepository {
    pool: DbPool,
}

impl PostgresProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn reset_schema(&self) -> Result<(), ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        conn.batch_execute(RESET_SCHEMA_SQL)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn insert_batch(&self, entities: &[Product]) -> Result<usize, ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        let models: Vec<ProductModel> = entities.iter().map(ProductModel::from).collect();

        let mut inserted = 0;
        for chunk in models.chunks(INSERT_CHUNK_SIZE) {
            inserted += diesel::insert_into(products::table)
                .values(chunk)
                .execute(&mut conn)
                .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;
        }

        Ok(inserted)
    }

    async fn find_by_img_id(
        &self,
        item_id: &str,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        let model = products::table
            .filter(products::img_id.eq(item_id))
            .select(ProductModel::as_select())
            .first::<ProductModel>(&mut conn)
            .optional()
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Product::from))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        products::table
            .select(products::master_category)
            .distinct()
            .order(products::master_category.asc())
            .load::<String>(&mut conn)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))
    }

    async fn find_by_category(
        &self,
        category: &str,
        limit: i64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        let models = products::table
            .filter(products::master_category.eq(category))
            .order(products::product_display_name.asc())
            .limit(limit)
            .select(ProductModel::as_select())
            .load::<ProductModel>(&mut conn)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn count(&self) -> Result<i64, ProductRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        products::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))
    }
}
