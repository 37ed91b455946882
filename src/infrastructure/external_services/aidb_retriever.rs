use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};

use crate::application::ports::vector_retriever::{
    RetrievedItem, VectorRetriever, VectorRetrieverError,
};
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

/// `aidb` ships CLIP for joint text/image embeddings; this is the model the
/// retriever is bound to unless overridden via `CLIP_MODEL`.
pub const DEFAULT_MODEL_ID: &str = "clip-vit-base-patch32";

#[derive(QueryableByName)]
struct RetrieveRow {
    #[diesel(sql_type = Text)]
    data: String,
}

/// `VectorRetriever` backed by the Postgres `aidb` extension.
///
/// Every operation is one SQL function call; the extension owns the
/// embedding model, the index, and the ranking. Inputs always travel as bind
/// parameters, never interpolated into the SQL text.
pub struct AidbRetriever {
    pool: DbPool,
    model_id: String,
}

impl AidbRetriever {
    pub fn new(pool: DbPool, model_id: String) -> Self {
        Self { pool, model_id }
    }

    fn decode_rows(rows: Vec<RetrieveRow>) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
        rows.iter()
            .map(|row| RetrievedItem::from_payload(&row.data))
            .collect()
    }
}

#[async_trait]
impl VectorRetriever for AidbRetriever {
    async fn create_retriever(
        &self,
        name: &str,
        bucket: &str,
        endpoint: &str,
    ) -> Result<(), VectorRetrieverError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        // Schema, data column, and object prefix are fixed for this catalog.
        diesel::sql_query(
            "SELECT aidb.create_s3_retriever($1, 'public', $2, 'img', $3, '', $4)",
        )
        .bind::<Text, _>(name)
        .bind::<Text, _>(&self.model_id)
        .bind::<Text, _>(bucket)
        .bind::<Text, _>(endpoint)
        .execute(&mut conn)
        .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        tracing::info!("Created retriever '{}' for bucket '{}'", name, bucket);

        Ok(())
    }

    async fn refresh_retriever(&self, name: &str) -> Result<(), VectorRetrieverError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        diesel::sql_query("SELECT aidb.refresh_retriever($1)")
            .bind::<Text, _>(name)
            .execute(&mut conn)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        tracing::info!("Refreshed retriever '{}'", name);

        Ok(())
    }

    async fn retrieve_by_text(
        &self,
        name: &str,
        top_k: i32,
        query: &str,
    ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        let rows = diesel::sql_query("SELECT data FROM aidb.retrieve($1, $2, $3)")
            .bind::<Text, _>(query)
            .bind::<Integer, _>(top_k)
            .bind::<Text, _>(name)
            .load::<RetrieveRow>(&mut conn)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        Self::decode_rows(rows)
    }

    async fn retrieve_by_image(
        &self,
        name: &str,
        top_k: i32,
        bucket: &str,
        image_key: &str,
        endpoint: &str,
    ) -> Result<Vec<RetrievedItem>, VectorRetrieverError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        let rows =
            diesel::sql_query("SELECT data FROM aidb.retrieve_via_s3($1, $2, $3, $4, $5)")
                .bind::<Text, _>(name)
                .bind::<Integer, _>(top_k)
                .bind::<Text, _>(bucket)
                .bind::<Text, _>(image_key)
                .bind::<Text, _>(endpoint)
                .load::<RetrieveRow>(&mut conn)
                .map_err(|e| VectorRetrieverError::ExtensionError(e.to_string()))?;

        Self::decode_rows(rows)
    }
}
