use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug)]
pub enum VectorRetrieverError {
    ExtensionError(String),
    InvalidPayload(String),
}

impl std::fmt::Display for VectorRetrieverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorRetrieverError::ExtensionError(msg) => write!(f, "Extension error: {}", msg),
            VectorRetrieverError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
        }
    }
}

impl std::error::Error for VectorRetrieverError {}

/// One ranked hit from the vector engine.
///
/// The engine returns an opaque structured payload per hit; the only field
/// this service relies on is the image id. Unknown fields are ignored so the
/// engine can evolve its payload without breaking us.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RetrievedItem {
    pub img_id: String,
}

impl RetrievedItem {
    /// Decode a single payload string. The payload is a JSON document owned
    /// by the retriever interface; anything that does not parse, or parses
    /// without an `img_id`, is rejected rather than evaluated.
    pub fn from_payload(payload: &str) -> Result<Self, VectorRetrieverError> {
        serde_json::from_str(payload)
            .map_err(|e| VectorRetrieverError::InvalidPayload(e.to_string()))
    }
}

/// Nearest-neighbor retrieval delegated to the database extension.
///
/// Creation and refresh bind a named retriever to a bucket/endpoint and an
/// embedding model; the two retrieve calls return hits in the engine's own
/// ranking order, which callers must preserve.
#[async_trait]
pub trait VectorRetriever: Send + Sync {
    async fn create_retriever(
        &self,
        name: &str,
        bucket: &str,
        endpoint: &str,
    ) -> Result<(), VectorRetrieverError>;

    async fn refresh_retriever(&self, name: &str) -> Result<(), VectorRetrieverError>;

    async fn retrieve_by_text(
        &self,
        name: &str,
        top_k: i32,
        query: &str,
    ) -> Result<Vec<RetrievedItem>, VectorRetrieverError>;

    async fn retrieve_by_image(
        &self,
        name: &str,
        top_k: i32,
        bucket: &str,
        image_key: &str,
        endpoint: &str,
    ) -> Result<Vec<RetrievedItem>, VectorRetrieverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_with_only_img_id() {
        let item = RetrievedItem::from_payload(r#"{"img_id": "15970"}"#).unwrap();
        assert_eq!(item.img_id, "15970");
    }

    #[test]
    fn test_payload_with_extra_fields_is_accepted() {
        let payload = r#"{"img_id": "39386", "distance": 0.1234, "key": "39386.jpg"}"#;
        let item = RetrievedItem::from_payload(payload).unwrap();
        assert_eq!(item.img_id, "39386");
    }

    #[test]
    fn test_payload_missing_img_id_is_rejected() {
        let result = RetrievedItem::from_payload(r#"{"key": "39386.jpg"}"#);
        assert!(matches!(
            result,
            Err(VectorRetrieverError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_payload_that_is_not_json_is_rejected() {
        let result = RetrievedItem::from_payload("__import__('os')");
        assert!(matches!(
            result,
            Err(VectorRetrieverError::InvalidPayload(_))
        ));
    }
}
