use std::sync::RwLock;

use crate::application::ports::ConfigStore;
use crate::domain::entities::CatalogConfig;

/// Single-slot config store for the demo's one-user session model.
///
/// The original kept this state in the UI framework's session dictionary;
/// here it is an explicit store the orchestrators read and write.
#[derive(Default)]
pub struct InMemoryConfigStore {
    current: RwLock<Option<CatalogConfig>>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn current(&self) -> Option<CatalogConfig> {
        self.current.read().expect("config store lock").clone()
    }

    fn set(&self, config: CatalogConfig) {
        *self.current.write().expect("config store lock") = Some(config);
    }

    fn clear(&self) {
        *self.current.write().expect("config store lock") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_read_back() {
        let store = InMemoryConfigStore::new();
        assert!(store.current().is_none());

        store.set(CatalogConfig::new(
            "bucket".to_string(),
            "retriever".to_string(),
            "http://localhost:9000".to_string(),
        ));

        let config = store.current().unwrap();
        assert_eq!(config.retriever_name(), "retriever");
    }

    #[test]
    fn test_clear_removes_the_config() {
        let store = InMemoryConfigStore::new();
        store.set(CatalogConfig::new(
            "bucket".to_string(),
            "retriever".to_string(),
            String::new(),
        ));
        store.clear();
        assert!(store.current().is_none());
    }
}
