//! Handoff slots for extracted style modules.
//!
//! A primary compile stores the extracted payload under a synthetic path;
//! the host later re-enters the loader with that path and takes it. Each
//! slot is written once and read once.

use crate::error::{LoaderError, Result};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

#[derive(Debug, Default)]
pub struct VirtualArtifactRegistry {
    pending: DashMap<String, String>,
}

impl VirtualArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, path: impl Into<String>, payload: impl Into<String>) -> Result<()> {
        match self.pending.entry(path.into()) {
            Entry::Occupied(entry) => Err(LoaderError::Conflict(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(payload.into());
                Ok(())
            }
        }
    }

    /// Remove and return the payload stored under `path`.
    pub fn take(&self, path: &str) -> Result<String> {
        self.pending
            .remove(path)
            .map(|(_, payload)| payload)
            .ok_or_else(|| LoaderError::Lookup(path.to_string()))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.pending.contains_key(path)
    }

    /// Number of slots written but not yet taken.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
