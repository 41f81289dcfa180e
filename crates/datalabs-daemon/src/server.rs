//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::metrics::MetricsExporter;
use crate::storage::{InMemoryStorage, PlatformStore};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// AI Data Labs API server
pub struct Server {
    config: DaemonConfig,
    storage: Arc<dyn PlatformStore>,
    metrics: MetricsExporter,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let metrics = MetricsExporter::new(config.metrics.namespace.as_deref())?;

        Ok(Self {
            config,
            storage: Arc::new(InMemoryStorage::new()),
            metrics,
        })
    }

    /// Build the HTTP application without binding a socket
    pub fn router(&self) -> Router {
        let state = AppState::new(
            self.storage.clone(),
            self.config.api.clone(),
            self.metrics.clone(),
        );
        create_router(state, &self.config)
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        tracing::info!("Starting AI Data Labs API...");

        let app = self.router();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!(address = %addr, "API ready to serve requests");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!(
            platforms = self.storage.count().unwrap_or_default(),
            "API shutdown complete"
        );

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }

    tracing::info!("Shutting down AI Data Labs API...");
}
