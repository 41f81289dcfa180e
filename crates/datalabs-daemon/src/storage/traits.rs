//! Storage trait definitions

use crate::error::StorageError;
use datalabs_types::{Platform, PlatformId, PlatformSpec};

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage for platform records
///
/// Implementations must allocate ids and insert records atomically so that
/// concurrent creates never observe the same next id.
pub trait PlatformStore: Send + Sync {
    /// Register a new platform and return the stored record
    fn create(&self, spec: PlatformSpec) -> StorageResult<Platform>;

    /// List all platforms in creation order
    fn list(&self) -> StorageResult<Vec<Platform>>;

    /// Get a platform by ID
    fn get(&self, id: &PlatformId) -> StorageResult<Option<Platform>>;

    /// Delete a platform by ID, returning whether it existed
    fn delete(&self, id: &PlatformId) -> StorageResult<bool>;

    /// Check whether a platform is registered
    fn contains(&self, id: &PlatformId) -> StorageResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Number of registered platforms
    fn count(&self) -> StorageResult<usize> {
        Ok(self.list()?.len())
    }
}
