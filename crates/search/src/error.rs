use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    VectorStore(#[from] rag_vector_store::VectorStoreError),

    #[error("Index not found at {}", .0.display())]
    IndexNotFound(PathBuf),

    #[error("Store lock poisoned")]
    LockPoisoned,
}
