pub mod in_memory_config_store;

pub use in_memory_config_store::InMemoryConfigStore;
