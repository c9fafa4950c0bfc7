use rag_text_chunker::Chunk;
use serde::{Deserialize, Serialize};

/// A ranked chunk returned to the caller. Carries no embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(flatten)]
    pub chunk: Chunk,

    /// Cosine similarity to the query, in `[-1, 1]`
    pub score: f32,
}

impl QueryResult {
    pub fn text(&self) -> &str {
        &self.chunk.text
    }
}
