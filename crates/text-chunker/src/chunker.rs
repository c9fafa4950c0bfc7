use crate::config::{ChunkerConfig, ChunkingStrategy};
use crate::error::{ChunkerError, Result};
use crate::strategy::StrategyExecutor;
use crate::types::Chunk;
use std::path::Path;

/// Main chunker interface for processing text
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Create a new chunker, rejecting invalid configuration
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Create a chunker from a strategy name (`fixed`, `sentence`, `paragraph`)
    pub fn from_parts(chunk_size: usize, overlap: usize, strategy: &str) -> Result<Self> {
        let strategy: ChunkingStrategy = strategy.parse()?;
        Self::new(ChunkerConfig::new(chunk_size, overlap, strategy))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk text from a string
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let chunks = StrategyExecutor::new(self.config.clone()).execute(text);
        log::debug!(
            "Chunked {} chars into {} chunks ({})",
            text.chars().count(),
            chunks.len(),
            self.config.strategy
        );
        chunks
    }

    /// Chunk a UTF-8 file, tagging every chunk with the file path as its source
    pub fn chunk_file(&self, path: impl AsRef<Path>) -> Result<Vec<Chunk>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let source = path.to_string_lossy();

        let chunks: Vec<Chunk> = self
            .chunk(&content)
            .into_iter()
            .map(|chunk| chunk.with_source(source.as_ref()))
            .collect();

        log::info!("Chunked {} into {} chunks", path.display(), chunks.len());
        Ok(chunks)
    }
}

/// Chunk text and keep only the chunk texts
pub fn chunk_text(
    text: &str,
    chunk_size: usize,
    overlap: usize,
    strategy: &str,
) -> Result<Vec<String>> {
    let chunker = Chunker::from_parts(chunk_size, overlap, strategy)?;
    Ok(chunker.chunk(text).into_iter().map(|c| c.text).collect())
}
