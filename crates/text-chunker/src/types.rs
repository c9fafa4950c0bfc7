use serde::{Deserialize, Serialize};

/// A position-tracked slice of source text
///
/// Offsets count characters (Unicode scalar values), not bytes, so they stay
/// meaningful for CJK text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text, trimmed of surrounding whitespace
    pub text: String,

    /// Start offset in the source text
    pub start_idx: usize,

    /// End offset in the source text (exclusive)
    pub end_idx: usize,

    /// Dense 0-based sequence number within one chunking call
    pub chunk_idx: usize,

    /// Origin identifier, attached by file-based chunking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Chunk {
    /// Create a new chunk without a source
    #[must_use]
    pub fn new(text: impl Into<String>, start_idx: usize, end_idx: usize, chunk_idx: usize) -> Self {
        Self {
            text: text.into(),
            start_idx,
            end_idx,
            chunk_idx,
            source: None,
        }
    }

    /// Builder: set source
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
