//! Storage layer for datalabs-daemon
//!
//! Holds the platform registry. Records live for the lifetime of the process
//! only.

mod memory;
mod traits;

pub use memory::InMemoryStorage;
pub use traits::{PlatformStore, StorageResult};
