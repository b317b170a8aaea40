use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::record;
use super::types::SatelliteState;

/// File-backed storage for the satellite state record.
///
/// Every call opens the file, reads or writes it completely, and closes it
/// again; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the state record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the file does not exist,
    /// [`StoreError::Io`] for other read failures, and the decode errors of
    /// [`record::decode`] for a malformed record.
    pub fn load(&self) -> Result<SatelliteState, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::from_io(self.path.clone(), e))?;
        record::decode(&raw)
    }

    /// Overwrites the state file with the record for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self, state: &SatelliteState) -> Result<(), StoreError> {
        fs::write(&self.path, record::encode(state)).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
