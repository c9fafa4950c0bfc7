use crate::error::{Result, SearchError};
use crate::retriever::rank;
use crate::types::QueryResult;
use rag_vector_store::{EmbeddingProvider, VectorStore};
use std::sync::{Arc, RwLock};

/// Retriever that can be queried from many threads while the index is rebuilt.
///
/// Queries rank against an `Arc` snapshot taken under a short read lock;
/// [`SharedRetriever::replace_store`] swaps the snapshot, so a query that
/// already started finishes on the store it saw.
pub struct SharedRetriever {
    store: RwLock<Arc<VectorStore>>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SharedRetriever {
    pub fn new(store: VectorStore, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            store: RwLock::new(Arc::new(store)),
            provider,
        }
    }

    /// Current store snapshot
    pub fn snapshot(&self) -> Result<Arc<VectorStore>> {
        let guard = self.store.read().map_err(|_| SearchError::LockPoisoned)?;
        Ok(Arc::clone(&*guard))
    }

    pub fn retrieve(&self, query: &str, k: usize) -> Result<Vec<QueryResult>> {
        let store = self.snapshot()?;
        rank(&store, self.provider.as_ref(), query, k)
    }

    /// Publish a rebuilt store; returns the previous snapshot.
    pub fn replace_store(&self, store: VectorStore) -> Result<Arc<VectorStore>> {
        let mut guard = self.store.write().map_err(|_| SearchError::LockPoisoned)?;
        log::info!(
            "Replacing store snapshot ({} -> {} documents)",
            guard.len(),
            store.len()
        );
        Ok(std::mem::replace(&mut *guard, Arc::new(store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rag_vector_store::{Chunk, Document};
    use std::thread;

    fn single(text: &str, embedding: Vec<f32>) -> VectorStore {
        let mut store = VectorStore::new("unused");
        store.add_documents(vec![Document::new(
            Chunk::new(text, 0, text.chars().count(), 0),
            embedding,
        )]);
        store
    }

    fn unit_query() -> Arc<dyn EmbeddingProvider> {
        Arc::new(|_: &str| -> rag_vector_store::Result<Vec<f32>> { Ok(vec![1.0, 0.0]) })
    }

    #[test]
    fn test_replace_store_keeps_old_snapshot_alive() {
        let shared = SharedRetriever::new(single("old", vec![1.0, 0.0]), unit_query());
        let before = shared.snapshot().unwrap();

        let previous = shared.replace_store(single("new", vec![1.0, 0.0])).unwrap();
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.documents()[0].text(), "old");

        let results = shared.retrieve("q", 1).unwrap();
        assert_eq!(results[0].text(), "new");
    }

    #[test]
    fn test_concurrent_queries() {
        let shared = Arc::new(SharedRetriever::new(
            single("doc", vec![1.0, 0.0]),
            unit_query(),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.retrieve("q", 3).unwrap().len())
            })
            .collect();
        shared.replace_store(single("rebuilt", vec![1.0, 0.0])).unwrap();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let shared = Arc::new(SharedRetriever::new(single("doc", vec![1.0]), unit_query()));
        let poisoner = Arc::clone(&shared);
        let _ = thread::spawn(move || {
            let _guard = poisoner.store.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(shared.retrieve("q", 1), Err(SearchError::LockPoisoned)));
        assert!(matches!(
            shared.replace_store(VectorStore::new("unused")),
            Err(SearchError::LockPoisoned)
        ));
    }
}
