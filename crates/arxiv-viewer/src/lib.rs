//! arXiv Paper Viewer backend
//!
//! A thin HTTP backend over the arXiv export API. It forwards paging and
//! query parameters upstream, decodes the Atom feed, and serves normalized
//! paper records as JSON alongside a static frontend.
//!
//! # Features
//!
//! - **Two endpoints**: latest papers in a fixed category set, keyword search
//! - **Fail-soft fetching**: upstream failures are logged and yield no papers
//! - **Total normalization**: every feed entry becomes exactly one paper
//!
//! # Example
//!
//! ```no_run
//! use arxiv_viewer::{client::ArxivClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!
//!     let papers = client.search_by_keyword("quantum computing", 0, 5).await;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod server;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ApiError, ClientError, FeedError};
pub use models::{Paper, PaperAuthor, SearchQuery};
pub use server::{AppState, PaperServer, PaperSource};
