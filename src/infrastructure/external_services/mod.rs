pub mod aidb_retriever;

pub use aidb_retriever::AidbRetriever;
