//! Durable storage seam for lifecycle records.
//!
//! The `StateStore` trait is injected into `CardStateManager`; transition
//! logic never touches a concrete backend. The whole map is loaded into
//! memory and rewritten on every save. Single-writer only: a concurrent
//! deployment needs a mutex around load-mutate-save or per-record versioning
//! on top of this seam.
//!
//! `JsonFileStore` deliberately loads a missing or corrupt snapshot as an
//! empty map, trading durability-of-evidence for availability.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::warn;

use super::record::StateRecord;
use crate::cards::CardId;

/// In-memory form of the durable mapping.
pub type StateMap = FxHashMap<CardId, StateRecord>;

/// Errors from a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Abstraction over a lifecycle record store.
///
/// `load_all` tolerates an empty or missing store as an empty mapping.
/// `save_all` replaces the durable representation wholesale; from the
/// caller's perspective the replacement is atomic.
pub trait StateStore {
    /// Load the full card-id to record mapping.
    fn load_all(&mut self) -> Result<StateMap, StoreError>;

    /// Replace the durable mapping with `states`.
    fn save_all(&mut self, states: &StateMap) -> Result<(), StoreError>;
}

/// JSON snapshot store, one file holding the entire mapping.
///
/// Saves write a sibling temp file and rename it over the target, so readers
/// never observe a half-written snapshot.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given snapshot file.
    ///
    /// The file is not created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load_all(&mut self) -> Result<StateMap, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StateMap::default()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(states) => Ok(states),
            Err(e) => {
                // Lossy recovery: a corrupt snapshot loads as an empty store
                warn!(path = %self.path.display(), error = %e, "corrupt state snapshot, starting empty");
                Ok(StateMap::default())
            }
        }
    }

    fn save_all(&mut self, states: &StateMap) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(states)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Volatile store for tests and explicit no-persistence mode.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    states: StateMap,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store with existing records.
    #[must_use]
    pub fn with_states(states: StateMap) -> Self {
        Self { states }
    }
}

impl StateStore for MemoryStore {
    fn load_all(&mut self) -> Result<StateMap, StoreError> {
        Ok(self.states.clone())
    }

    fn save_all(&mut self, states: &StateMap) -> Result<(), StoreError> {
        self.states = states.clone();
        Ok(())
    }
}
