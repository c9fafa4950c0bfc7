use crate::config::IndexerConfig;
use crate::error::Result;
use crate::stats::IndexStats;
use rag_text_chunker::{Chunk, Chunker};
use rag_vector_store::{Document, EmbeddingProvider, VectorStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

const PROGRESS_EVERY: usize = 5;

/// Chunk → embed → store → save pipeline
pub struct Indexer {
    config: IndexerConfig,
    chunker: Chunker,
    store: VectorStore,
    provider: Arc<dyn EmbeddingProvider>,
}

impl Indexer {
    /// Indexer with the default chunking (fixed windows of 512 characters)
    pub fn new(
        storage_path: impl Into<PathBuf>,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        Self::with_config(IndexerConfig::new(storage_path), provider)
    }

    pub fn with_config(config: IndexerConfig, provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        config.validate()?;
        let chunker = Chunker::new(config.chunker.clone())?;
        let store = VectorStore::new(&config.storage_path);

        Ok(Self {
            config,
            chunker,
            store,
            provider,
        })
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Index `source_text` and save it as `storage_path/index_name`
    pub fn build_index(&mut self, source_text: &str, index_name: &str) -> Result<IndexStats> {
        log::info!("Chunking {} chars of source text", source_text.chars().count());
        let chunks = self.chunker.chunk(source_text);
        self.index_chunks(chunks, index_name)
    }

    /// Index a UTF-8 file; every document records the file as its `source`
    pub fn build_index_from_file(
        &mut self,
        source_path: impl AsRef<Path>,
        index_name: &str,
    ) -> Result<IndexStats> {
        log::info!("Chunking {}...", source_path.as_ref().display());
        let chunks = self.chunker.chunk_file(source_path)?;
        self.index_chunks(chunks, index_name)
    }

    /// `build_index` into the configured index name
    pub fn build(&mut self, source_text: &str) -> Result<IndexStats> {
        let index_name = self.config.index_name.clone();
        self.build_index(source_text, &index_name)
    }

    fn index_chunks(&mut self, chunks: Vec<Chunk>, index_name: &str) -> Result<IndexStats> {
        let started = Instant::now();
        let total = chunks.len();
        let mut stats = IndexStats::new(total);
        let mut documents = Vec::with_capacity(total);

        log::info!("Generating embeddings for {total} chunks...");
        for (i, chunk) in chunks.into_iter().enumerate() {
            let embedding = self.provider.embed(&chunk.text)?;
            if embedding.is_empty() {
                log::debug!("No embedding for chunk {}, skipping", chunk.chunk_idx);
                stats.add_skipped();
            } else {
                documents.push(Document::new(chunk, embedding));
                stats.add_embedded();
            }

            if (i + 1) % PROGRESS_EVERY == 0 {
                log::info!("Processed {}/{} chunks", i + 1, total);
            }
        }

        self.store.add_documents(documents);
        self.store.save(index_name)?;

        stats.time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        log::info!(
            "Index saved to {:?}: {stats:?}",
            self.store.index_path(index_name)
        );
        Ok(stats)
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub fn into_store(self) -> VectorStore {
        self.store
    }
}
