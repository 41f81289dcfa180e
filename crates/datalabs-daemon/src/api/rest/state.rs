//! Application state for API handlers

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::metrics::MetricsExporter;
use crate::storage::PlatformStore;
use axum::extract::FromRef;
use datalabs_types::PlatformId;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Platform registry
    pub storage: Arc<dyn PlatformStore>,

    /// API behaviour switches
    pub api: ApiConfig,

    /// Prometheus exporter backing `/metrics`
    pub metrics: MetricsExporter,

    /// Service version
    pub version: String,
}

impl AppState {
    /// Create new application state
    pub fn new(storage: Arc<dyn PlatformStore>, api: ApiConfig, metrics: MetricsExporter) -> Self {
        Self {
            storage,
            api,
            metrics,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Enforce the platform-reference policy for platform-scoped stubs.
    ///
    /// A no-op unless `api.validate_platform_refs` is set.
    pub fn check_platform_ref(&self, platform_id: &str) -> ApiResult<()> {
        if !self.api.validate_platform_refs {
            return Ok(());
        }

        if self.storage.contains(&PlatformId::new(platform_id))? {
            Ok(())
        } else {
            Err(ApiError::platform_not_found())
        }
    }
}

impl FromRef<AppState> for MetricsExporter {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}
