use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid indexer configuration: {0}")]
    Config(String),

    #[error(transparent)]
    ChunkerError(#[from] rag_text_chunker::ChunkerError),

    #[error(transparent)]
    VectorStoreError(#[from] rag_vector_store::VectorStoreError),
}
