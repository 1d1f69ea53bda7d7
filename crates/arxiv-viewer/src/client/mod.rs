//! arXiv API client.
//!
//! Provides the feed fetcher:
//! - One outbound GET per call, connection pooling via reqwest
//! - Optional bounded retry with exponential backoff (off by default)
//! - Fail-soft: every failure is logged and degrades to an empty list

use std::time::{Duration, Instant};

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::feed;
use crate::models::{Paper, SearchQuery};

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Upstream query endpoint.
    api_url: String,

    /// Request timeout, kept for error reporting.
    request_timeout: Duration,

    /// Retry budget per call.
    max_retries: u32,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails or the endpoint is not a URL.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        url::Url::parse(&config.api_url)
            .map_err(|e| anyhow::anyhow!("invalid arXiv API URL '{}': {e}", config.api_url))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.retries_enabled() {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(10))
                .build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            client: builder.build(),
            api_url: config.api_url.clone(),
            request_timeout: config.request_timeout,
            max_retries: config.max_retries,
        })
    }

    /// Upstream endpoint this client queries.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Run one search and return the normalized papers.
    ///
    /// Never fails: non-2xx responses, transport errors and unparsable bodies
    /// are logged and yield an empty list.
    pub async fn fetch(&self, query: &SearchQuery) -> Vec<Paper> {
        let started = Instant::now();

        match self.try_fetch(query).await {
            Ok(papers) => {
                tracing::info!(
                    count = papers.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Successfully fetched papers"
                );
                papers
            }
            Err(e) => {
                tracing::error!(
                    kind = e.kind(),
                    search_query = %query.search_query,
                    error = %e,
                    "arXiv fetch failed, returning no papers"
                );
                Vec::new()
            }
        }
    }

    /// Newest submissions in the configured categories.
    pub async fn get_latest(&self, start: u32, max_results: u32) -> Vec<Paper> {
        let query = SearchQuery::latest(start, max_results);
        tracing::info!(
            search_query = %query.search_query,
            start,
            max_results,
            "Fetching latest papers"
        );
        self.fetch(&query).await
    }

    /// Search all fields for `keyword`. Callers reject blank keywords first.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        start: u32,
        max_results: u32,
    ) -> Vec<Paper> {
        tracing::info!(keyword, start, max_results, "Searching papers by keyword");
        self.fetch(&SearchQuery::keyword(keyword, start, max_results)).await
    }

    /// Fetch pipeline with errors kept typed.
    async fn try_fetch(&self, query: &SearchQuery) -> ClientResult<Vec<Paper>> {
        let params = query.params();
        tracing::debug!(url = %self.api_url, ?params, "Fetching papers from arXiv");

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        let body = Self::handle_response(response).await?;
        let entries = feed::parse_feed(&body)?;

        Ok(entries.into_iter().map(feed::normalize).collect())
    }

    /// Handle API response status codes, returning the body on success.
    async fn handle_response(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::status(status.as_u16(), body))
        }
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_succeeds() {
        let client = ArxivClient::new(&Config::default()).unwrap();
        assert_eq!(client.api_url(), "http://export.arxiv.org/api/query");
    }

    #[test]
    fn test_client_with_retries_succeeds() {
        let config = Config { max_retries: 3, ..Config::default() };
        assert!(ArxivClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let config = Config { api_url: "not a url".to_string(), ..Config::default() };
        assert!(ArxivClient::new(&config).is_err());
    }

    #[test]
    fn test_debug_shows_endpoint() {
        let client = ArxivClient::new(&Config::for_testing("http://127.0.0.1:9")).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("127.0.0.1:9"));
    }
}
