use serde::{Deserialize, Serialize};

/// Statistics about one indexing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of chunks produced by the chunker
    pub chunks: usize,

    /// Chunks that received an embedding and were stored
    pub embedded: usize,

    /// Chunks dropped because the provider returned no embedding
    pub skipped: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl IndexStats {
    pub fn new(chunks: usize) -> Self {
        Self {
            chunks,
            ..Self::default()
        }
    }

    pub fn add_embedded(&mut self) {
        self.embedded += 1;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }
}
