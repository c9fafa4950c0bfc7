//! # RAG Text Chunker
//!
//! Boundary-aware splitting of reference documents into position-tracked
//! chunks ready for embedding.
//!
//! ## Strategies
//!
//! ```text
//! Source Text
//!     │
//!     ├──> fixed      sliding window, cut back to whitespace/punctuation
//!     │
//!     ├──> sentence   pack whole sentences up to the size limit
//!     │
//!     └──> paragraph  one chunk per paragraph, oversized ones windowed
//! ```
//!
//! Offsets are character offsets (not bytes) into the source text. Sentence
//! and paragraph offsets are reconstructed from piece lengths and are only
//! approximate.
//!
//! ## Example
//!
//! ```rust
//! use rag_text_chunker::{Chunker, ChunkerConfig, ChunkingStrategy};
//!
//! let config = ChunkerConfig::new(200, 20, ChunkingStrategy::FixedWindow);
//! let chunker = Chunker::new(config).unwrap();
//!
//! let chunks = chunker.chunk("Marriage is based on free will. Both parties are equal.");
//! for chunk in &chunks {
//!     println!("[{}] {}..{}: {}", chunk.chunk_idx, chunk.start_idx, chunk.end_idx, chunk.text);
//! }
//! assert_eq!(chunks.len(), 1);
//! ```

mod chunker;
mod config;
mod error;
mod strategy;
mod types;

pub use chunker::{chunk_text, Chunker};
pub use config::{ChunkerConfig, ChunkingStrategy, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use error::{ChunkerError, Result};
pub use types::Chunk;
