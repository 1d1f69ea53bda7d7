//! HTTP server.
//!
//! Routes inbound requests to a [`PaperSource`]. The source is a trait object
//! so handlers can be exercised against test doubles; in production it is the
//! [`ArxivClient`].

pub mod transport;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::client::ArxivClient;
use crate::error::ClientResult;
use crate::models::Paper;

/// Something that can answer the two paper queries.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Newest papers in the configured categories.
    async fn latest(&self, start: u32, max_results: u32) -> ClientResult<Vec<Paper>>;

    /// Papers matching `keyword` in any field.
    async fn search(&self, keyword: &str, start: u32, max_results: u32)
    -> ClientResult<Vec<Paper>>;
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn latest(&self, start: u32, max_results: u32) -> ClientResult<Vec<Paper>> {
        Ok(self.get_latest(start, max_results).await)
    }

    async fn search(
        &self,
        keyword: &str,
        start: u32,
        max_results: u32,
    ) -> ClientResult<Vec<Paper>> {
        Ok(self.search_by_keyword(keyword, start, max_results).await)
    }
}

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PaperSource>,
    /// Directory holding `index.html` and the frontend assets.
    pub static_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn PaperSource>, static_dir: impl Into<PathBuf>) -> Self {
        Self { source, static_dir: static_dir.into() }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").field("static_dir", &self.static_dir).finish()
    }
}

/// HTTP server for the paper viewer.
#[derive(Debug)]
pub struct PaperServer {
    state: AppState,
}

impl PaperServer {
    /// Create a server backed by the arXiv client.
    #[must_use]
    pub fn new(client: ArxivClient, static_dir: impl Into<PathBuf>) -> Self {
        Self { state: AppState::new(Arc::new(client), static_dir) }
    }

    /// Bind and serve until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error if the address cannot be bound or the server fails.
    pub async fn run_http(self, addr: SocketAddr) -> anyhow::Result<()> {
        let router = transport::create_router(self.state);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
