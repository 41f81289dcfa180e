//! Prometheus scrape endpoint
//!
//! Only the standard process collector is registered. Platform-level metrics
//! are served separately by the monitoring handlers.

use crate::error::{DaemonError, DaemonResult};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::Arc;

/// Owns the registry exported on `/metrics`
#[derive(Clone)]
pub struct MetricsExporter {
    registry: Arc<Registry>,
}

impl MetricsExporter {
    /// Create an exporter, optionally prefixing every metric with `namespace`
    pub fn new(namespace: Option<&str>) -> DaemonResult<Self> {
        let registry = Registry::new_custom(namespace.map(str::to_string), None)
            .map_err(|e| DaemonError::Metrics(e.to_string()))?;

        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))
            .map_err(|e| DaemonError::Metrics(e.to_string()))?;

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Handler for GET /metrics
pub async fn metrics_handler(State(exporter): State<MetricsExporter>) -> Response {
    match exporter.export() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
