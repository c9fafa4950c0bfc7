use crate::error::{Result, VectorStoreError};
use crate::types::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Ordered in-memory document collection with whole-file JSON persistence.
///
/// Insertion order is preserved across `add_documents`, `save` and `load`.
/// The store has no internal synchronization; share it behind a lock or a
/// snapshot when queries and rebuilds can overlap.
#[derive(Debug, Clone)]
pub struct VectorStore {
    documents: Vec<Document>,
    storage_path: PathBuf,
}

impl VectorStore {
    pub fn new(storage_path: impl AsRef<Path>) -> Self {
        log::debug!("Initializing VectorStore at {:?}", storage_path.as_ref());
        Self {
            documents: Vec::new(),
            storage_path: storage_path.as_ref().to_path_buf(),
        }
    }

    /// Append documents as-is: no deduplication, no dimension check.
    pub fn add_documents(&mut self, docs: Vec<Document>) {
        log::info!("Adding {} documents to store", docs.len());
        self.documents.extend(docs);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Location of the artifact for `index_name`
    pub fn index_path(&self, index_name: &str) -> PathBuf {
        self.storage_path.join(index_name)
    }

    /// Embedding length of the first document, if any
    pub fn dimension(&self) -> Option<usize> {
        self.documents.first().map(Document::dimension)
    }

    /// Fail on the first document whose embedding length differs from the first one.
    pub fn check_dimensions(&self) -> Result<()> {
        let Some(expected) = self.dimension() else {
            return Ok(());
        };
        match self.documents.iter().find(|doc| doc.dimension() != expected) {
            Some(doc) => Err(VectorStoreError::InvalidDimension {
                expected,
                actual: doc.dimension(),
            }),
            None => Ok(()),
        }
    }

    /// Write every document to `storage_path/index_name`, replacing the file.
    ///
    /// The write is not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&self, index_name: &str) -> Result<()> {
        let path = self.index_path(index_name);
        log::info!("Saving VectorStore to {:?}", path);

        std::fs::create_dir_all(&self.storage_path)?;
        let data = serde_json::to_string_pretty(&self.documents)?;
        std::fs::write(&path, data)?;

        log::info!("VectorStore saved successfully ({} documents)", self.len());
        Ok(())
    }

    /// Replace the contents with `storage_path/index_name`.
    ///
    /// Returns `Ok(false)` and leaves the store untouched when the file does
    /// not exist.
    pub fn load(&mut self, index_name: &str) -> Result<bool> {
        let path = self.index_path(index_name);
        log::info!("Loading VectorStore from {:?}", path);

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("Index not found at {:?}; keeping current documents", path);
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };

        self.documents = serde_json::from_str(&data)?;
        log::info!("Loaded {} documents", self.documents.len());
        Ok(true)
    }
}
