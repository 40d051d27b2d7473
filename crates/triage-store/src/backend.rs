//! Storage backends for the review store.
//!
//! Persistence is whole-collection: every mutation re-serializes the entire
//! record list through `persist`. There is no incremental write path and no
//! transaction log, so a backend only ever holds one document.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::debug;

use triage_contracts::{
    error::{TriageError, TriageResult},
    prediction::PredictionRecord,
};

/// A durable medium for the full prediction collection.
///
/// `load` is called once when a store opens; `persist` after every mutation.
/// Implementations must treat `persist` as a full overwrite of whatever was
/// stored before.
pub trait StorageBackend: Send + Sync {
    /// Read the entire persisted collection. An empty medium loads as an
    /// empty list, not an error.
    fn load(&self) -> TriageResult<Vec<PredictionRecord>>;

    /// Overwrite the medium with the full collection.
    fn persist(&self, records: &[PredictionRecord]) -> TriageResult<()>;
}

/// An in-process backend holding the document behind an `Arc<Mutex<_>>`.
///
/// Clones share the same document, so a store reopened from a clone of its
/// backend sees everything persisted through the original — which is what
/// tests and the scripted demo rely on.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Arc<Mutex<Vec<PredictionRecord>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> TriageResult<Vec<PredictionRecord>> {
        let document = self.document.lock().map_err(|e| TriageError::StoreUnavailable {
            reason: format!("memory backend lock poisoned: {}", e),
        })?;
        Ok(document.clone())
    }

    fn persist(&self, records: &[PredictionRecord]) -> TriageResult<()> {
        let mut document = self.document.lock().map_err(|e| TriageError::StoreUnavailable {
            reason: format!("memory backend lock poisoned: {}", e),
        })?;
        *document = records.to_vec();
        Ok(())
    }
}

/// A backend persisting the collection as one JSON document on disk.
///
/// A missing file loads as an empty collection. Writes are plain overwrites
/// with no locking or concurrency token: when two processes share the same
/// path, the last writer wins. That matches the single-profile medium this
/// store is designed for and is a documented limitation, not a guarantee.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path this backend reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> TriageResult<Vec<PredictionRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no record document yet, starting empty");
            return Ok(Vec::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| TriageError::StoreUnavailable {
                reason: format!("failed to read '{}': {}", self.path.display(), e),
            })?;

        serde_json::from_str(&contents).map_err(|e| TriageError::StoreUnavailable {
            reason: format!("failed to parse '{}': {}", self.path.display(), e),
        })
    }

    fn persist(&self, records: &[PredictionRecord]) -> TriageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TriageError::StoreUnavailable {
                reason: format!("failed to create '{}': {}", parent.display(), e),
            })?;
        }

        let json =
            serde_json::to_string_pretty(records).map_err(|e| TriageError::StoreUnavailable {
                reason: format!("failed to serialize record collection: {}", e),
            })?;

        std::fs::write(&self.path, json).map_err(|e| TriageError::StoreUnavailable {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            "record collection persisted"
        );
        Ok(())
    }
}
