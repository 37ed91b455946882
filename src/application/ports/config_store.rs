use crate::domain::entities::CatalogConfig;

/// Session-scoped storage for the active bucket/retriever binding.
///
/// A successful ingest writes the config; searches read it back. Only the
/// current value matters, so the port is deliberately tiny.
pub trait ConfigStore: Send + Sync {
    fn current(&self) -> Option<CatalogConfig>;
    fn set(&self, config: CatalogConfig);
    fn clear(&self);
}
