//! # RAG Vector Store
//!
//! Embedding-annotated chunks kept in insertion order and persisted as a
//! single JSON artifact.
//!
//! ## Architecture
//!
//! ```text
//! Chunk[]
//!     │
//!     ├──> EmbeddingProvider (injected)
//!     │      └─> Vec<f32>, empty = no embedding
//!     │
//!     ├──> VectorStore
//!     │      └─> storage_path/index_name (JSON array, whole-file replace)
//!     │
//!     └──> FlatIndex
//!            └─> cosine top-k, stable on ties
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rag_vector_store::{Chunk, Document, EmbeddingProvider, StubEmbeddingProvider, VectorStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider = StubEmbeddingProvider::new(8);
//!     let chunk = Chunk::new("Both spouses have equal status in the family.", 0, 45, 0);
//!     let embedding = provider.embed(&chunk.text)?;
//!
//!     let mut store = VectorStore::new("data");
//!     store.add_documents(vec![Document::new(chunk, embedding)]);
//!     store.save("legal_index.json")?;
//!
//!     let mut reloaded = VectorStore::new("data");
//!     reloaded.load("legal_index.json")?;
//!     assert_eq!(reloaded.len(), 1);
//!     Ok(())
//! }
//! ```

mod embeddings;
mod error;
mod flat_index;
mod store;
mod types;

pub use embeddings::{cosine_similarity, EmbeddingProvider, StubEmbeddingProvider};
pub use error::{Result, VectorStoreError};
pub use flat_index::FlatIndex;
pub use store::VectorStore;
pub use types::Document;

// Re-export chunker types for convenience
pub use rag_text_chunker::Chunk;
