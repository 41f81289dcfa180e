//! In-memory storage implementation

use super::traits::*;
use crate::error::StorageError;
use datalabs_types::{Platform, PlatformId, PlatformSpec};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// In-memory platform registry
///
/// Records are keyed by their sequence number, so iteration order is
/// creation order. Sequence numbers are never reused, even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    inner: RwLock<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    platforms: BTreeMap<u64, Platform>,
    last_sequence: u64,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

fn sequence_of(id: &PlatformId) -> Option<u64> {
    match id.sequence() {
        Ok(sequence) => Some(sequence),
        Err(err) => {
            tracing::debug!(platform_id = %id, error = %err, "Malformed platform id");
            None
        }
    }
}

impl PlatformStore for InMemoryStorage {
    fn create(&self, spec: PlatformSpec) -> StorageResult<Platform> {
        let mut registry = self.inner.write();

        let sequence = registry
            .last_sequence
            .checked_add(1)
            .ok_or(StorageError::SequenceExhausted)?;

        let platform = Platform::from_spec(PlatformId::from_sequence(sequence), spec);
        registry.last_sequence = sequence;
        registry.platforms.insert(sequence, platform.clone());

        Ok(platform)
    }

    fn list(&self) -> StorageResult<Vec<Platform>> {
        let registry = self.inner.read();
        Ok(registry.platforms.values().cloned().collect())
    }

    fn get(&self, id: &PlatformId) -> StorageResult<Option<Platform>> {
        let Some(sequence) = sequence_of(id) else {
            return Ok(None);
        };

        let registry = self.inner.read();
        Ok(registry.platforms.get(&sequence).cloned())
    }

    fn delete(&self, id: &PlatformId) -> StorageResult<bool> {
        let Some(sequence) = sequence_of(id) else {
            return Ok(false);
        };

        let mut registry = self.inner.write();
        Ok(registry.platforms.remove(&sequence).is_some())
    }

    fn contains(&self, id: &PlatformId) -> StorageResult<bool> {
        let Some(sequence) = sequence_of(id) else {
            return Ok(false);
        };

        let registry = self.inner.read();
        Ok(registry.platforms.contains_key(&sequence))
    }

    fn count(&self) -> StorageResult<usize> {
        Ok(self.inner.read().platforms.len())
    }
}
