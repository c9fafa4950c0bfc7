//! # RAG Indexer
//!
//! Offline pipeline that turns a source text into a persisted vector index.
//!
//! ```text
//! source text / file
//!     │
//!     ├──> Chunker (fixed | sentence | paragraph)
//!     ├──> EmbeddingProvider, one call per chunk, empty result = skipped
//!     ├──> VectorStore::add_documents (single append)
//!     └──> VectorStore::save(index_name)
//! ```
//!
//! ```no_run
//! use rag_indexer::{Indexer, IndexerConfig};
//! use rag_vector_store::StubEmbeddingProvider;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = IndexerConfig::load("rag.toml")?.apply_env_overrides();
//!     let mut indexer = Indexer::with_config(config, Arc::new(StubEmbeddingProvider::new(64)))?;
//!     let stats = indexer.build_index_from_file("data/marriage_law.txt", "legal_index.json")?;
//!     println!("{} chunks, {} skipped", stats.chunks, stats.skipped);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod indexer;
mod stats;

pub use config::{IndexerConfig, INDEX_NAME_ENV, STORAGE_PATH_ENV};
pub use error::{IndexerError, Result};
pub use indexer::Indexer;
pub use stats::IndexStats;
