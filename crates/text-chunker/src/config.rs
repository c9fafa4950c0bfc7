use crate::error::ChunkerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default window size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Default overlap between consecutive fixed windows, in characters
pub const DEFAULT_OVERLAP: usize = 50;

/// Configuration for text chunking behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Maximum chunk size in characters
    pub chunk_size: usize,

    /// Characters shared by adjacent fixed windows
    pub overlap: usize,

    /// Chunking strategy to use
    pub strategy: ChunkingStrategy,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            strategy: ChunkingStrategy::FixedWindow,
        }
    }
}

impl ChunkerConfig {
    /// Config with the given window and strategy
    #[must_use]
    pub const fn new(chunk_size: usize, overlap: usize, strategy: ChunkingStrategy) -> Self {
        Self {
            chunk_size,
            overlap,
            strategy,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be > 0".to_string());
        }

        // Sentence packing never slides a window, so the overlap is irrelevant there.
        if self.strategy != ChunkingStrategy::BySentence && self.overlap >= self.chunk_size {
            return Err(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            ));
        }

        Ok(())
    }
}

/// Strategy for splitting text into chunks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChunkingStrategy {
    /// Sliding character window that prefers to cut at whitespace or punctuation
    #[default]
    #[serde(rename = "fixed")]
    FixedWindow,

    /// Pack whole sentences until the size limit is reached
    #[serde(rename = "sentence")]
    BySentence,

    /// One chunk per blank-line separated paragraph, oversized ones windowed
    #[serde(rename = "paragraph")]
    ByParagraph,
}

impl ChunkingStrategy {
    /// Get the configuration name of the strategy
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FixedWindow => "fixed",
            Self::BySentence => "sentence",
            Self::ByParagraph => "paragraph",
        }
    }
}

impl fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkingStrategy {
    type Err = ChunkerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::FixedWindow),
            "sentence" => Ok(Self::BySentence),
            "paragraph" => Ok(Self::ByParagraph),
            other => Err(ChunkerError::invalid_config(format!(
                "Unknown chunking strategy '{other}' (expected 'fixed', 'sentence' or 'paragraph')"
            ))),
        }
    }
}
