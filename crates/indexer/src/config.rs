use crate::error::{IndexerError, Result};
use rag_text_chunker::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const STORAGE_PATH_ENV: &str = "RAG_STORAGE_PATH";
pub const INDEX_NAME_ENV: &str = "RAG_INDEX_NAME";

/// Where an index lives and how its source text is chunked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Directory holding index artifacts
    pub storage_path: PathBuf,

    /// File name of the index inside `storage_path`
    pub index_name: String,

    /// Chunking used when building
    pub chunker: ChunkerConfig,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data"),
            index_name: "index.json".to_string(),
            chunker: ChunkerConfig::default(),
        }
    }
}

impl IndexerConfig {
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            ..Self::default()
        }
    }

    /// Read a config file. JSON is tried first, then TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let config = Self::parse(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(bytes: &[u8]) -> Result<Self> {
        match serde_json::from_slice(bytes) {
            Ok(config) => Ok(config),
            Err(json_err) => {
                let utf8 = std::str::from_utf8(bytes)
                    .map_err(|err| IndexerError::Config(format!("{json_err}; {err}")))?;
                toml::from_str(utf8).map_err(|toml_err| {
                    IndexerError::Config(format!(
                        "Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                    ))
                })
            }
        }
    }

    /// Apply `RAG_STORAGE_PATH` / `RAG_INDEX_NAME` from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(STORAGE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.storage_path = PathBuf::from(path);
        }
        if let Some(name) = lookup(INDEX_NAME_ENV).filter(|v| !v.trim().is_empty()) {
            self.index_name = name;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.chunker.validate().map_err(IndexerError::Config)?;
        if self.index_name.trim().is_empty() {
            return Err(IndexerError::Config("index_name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Full path of the index artifact
    pub fn index_path(&self) -> PathBuf {
        self.storage_path.join(&self.index_name)
    }
}
