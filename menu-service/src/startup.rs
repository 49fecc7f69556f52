//! Application startup and lifecycle management.

use crate::config::MenuConfig;
use crate::services::{MenuStore, MongoDb, MongoMenuStore};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Connect to MongoDB and bind the HTTP listener.
    ///
    /// An unreachable database is logged but does not abort startup; requests
    /// then fail individually until the driver reaches the server.
    pub async fn build(config: MenuConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, config.mongodb.database.as_deref()).await?;

        match db.health_check().await {
            Ok(()) => tracing::info!("MongoDB connected"),
            Err(e) => tracing::error!("Failed to connect to MongoDB: {}", e),
        }

        let store: Arc<dyn MenuStore> = Arc::new(MongoMenuStore::new(db));
        Self::build_with_store(config, store).await
    }

    /// Bind the HTTP listener around an already constructed store (port 0 = random port).
    pub async fn build_with_store(
        config: MenuConfig,
        store: Arc<dyn MenuStore>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Menu service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(store),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
