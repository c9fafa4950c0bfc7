//! # RAG Search
//!
//! Query-time retrieval: embed the query, rank stored documents by cosine
//! similarity, return the top `k` chunks with their scores.
//!
//! ```no_run
//! use rag_search::{Retriever, DEFAULT_TOP_K};
//! use rag_vector_store::StubEmbeddingProvider;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(StubEmbeddingProvider::new(64));
//!     let retriever = Retriever::open_existing("data", "legal_index.json", provider)?;
//!     for hit in retriever.retrieve("離婚時財產如何分割?", DEFAULT_TOP_K)? {
//!         println!("{:.3} {}", hit.score, hit.text());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod retriever;
mod shared;
mod types;

pub use error::{Result, SearchError};
pub use retriever::{Retriever, DEFAULT_TOP_K};
pub use shared::SharedRetriever;
pub use types::QueryResult;
