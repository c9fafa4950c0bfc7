use crate::error::{Result, SearchError};
use crate::types::QueryResult;
use rag_vector_store::{EmbeddingProvider, FlatIndex, VectorStore};
use std::path::Path;
use std::sync::Arc;

/// Number of results a caller gets when it has no preference
pub const DEFAULT_TOP_K: usize = 3;

/// Top-k cosine retrieval over a loaded store
pub struct Retriever {
    store: VectorStore,
    provider: Arc<dyn EmbeddingProvider>,
}

impl Retriever {
    pub fn new(store: VectorStore, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, provider }
    }

    /// Load `storage_path/index_name`; a missing file yields an empty retriever.
    pub fn open(
        storage_path: impl AsRef<Path>,
        index_name: &str,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        let mut store = VectorStore::new(storage_path);
        store.load(index_name)?;
        Ok(Self::new(store, provider))
    }

    /// Like [`Retriever::open`], but a missing index is an error.
    pub fn open_existing(
        storage_path: impl AsRef<Path>,
        index_name: &str,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self> {
        let mut store = VectorStore::new(storage_path);
        if !store.load(index_name)? {
            return Err(SearchError::IndexNotFound(store.index_path(index_name)));
        }
        Ok(Self::new(store, provider))
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub fn retrieve(&self, query: &str, k: usize) -> Result<Vec<QueryResult>> {
        rank(&self.store, self.provider.as_ref(), query, k)
    }
}

/// Embed `query` and return the `k` most similar documents, best first.
///
/// An empty query embedding returns no results.
pub(crate) fn rank(
    store: &VectorStore,
    provider: &dyn EmbeddingProvider,
    query: &str,
    k: usize,
) -> Result<Vec<QueryResult>> {
    let query_embedding = provider.embed(query)?;
    if query_embedding.is_empty() {
        log::debug!("Query produced no embedding");
        return Ok(Vec::new());
    }

    let documents = store.documents();
    let results: Vec<QueryResult> = FlatIndex::new(documents)
        .search(&query_embedding, k)
        .into_iter()
        .map(|(idx, score)| QueryResult {
            chunk: documents[idx].chunk.clone(),
            score,
        })
        .collect();

    log::debug!(
        "Retrieved {} of {} documents (k={})",
        results.len(),
        documents.len(),
        k
    );
    Ok(results)
}
