//! AI Data Labs daemon library
//!
//! This module provides the core components for the API daemon:
//! - REST API handlers (platforms, agents, data, monitoring)
//! - Platform registry storage
//! - Prometheus scrape endpoint
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod storage;

pub use api::{create_router, AppState};
pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError, StorageError};
pub use metrics::MetricsExporter;
pub use server::Server;
pub use storage::{InMemoryStorage, PlatformStore};
