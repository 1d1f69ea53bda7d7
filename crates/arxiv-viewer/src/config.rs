//! Configuration for the arXiv viewer backend.

use std::path::PathBuf;
use std::time::Duration;

/// Upstream API constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const QUERY_URL: &str = "http://export.arxiv.org/api/query";

    /// Request timeout for a single upstream query.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("arxiv-viewer/", env!("CARGO_PKG_VERSION"));

    /// Retries on transient upstream failures. Zero keeps the single-attempt behavior.
    pub const MAX_RETRIES: u32 = 0;

    /// Categories queried by the "latest papers" feed.
    pub const LATEST_CATEGORIES: &[&str] = &["cs.AI", "math.CO", "physics.hep-ph"];
}

/// Paging defaults for the HTTP endpoints.
pub mod paging {
    /// Default offset into the upstream result set.
    pub const DEFAULT_START: u32 = 0;

    /// Default page size for `/papers/latest` and `/papers/search`.
    pub const DEFAULT_MAX_RESULTS: u32 = 25;

    /// Page size used when a caller builds a raw query without one.
    pub const FETCH_MAX_RESULTS: u32 = 10;
}

/// Directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "frontend/static";

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Maximum transient retries for one outbound call.
    pub max_retries: u32,

    /// User agent header.
    pub user_agent: String,

    /// Static frontend directory.
    pub static_dir: PathBuf,
}

impl Config {
    /// Create a configuration with the production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::QUERY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            user_agent: api::USER_AGENT.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
            ..Self::new()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized: `ARXIV_API_URL`, `ARXIV_MAX_RETRIES`,
    /// `ARXIV_REQUEST_TIMEOUT_SECS`, `STATIC_DIR`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(retries) = std::env::var("ARXIV_MAX_RETRIES") {
            config.max_retries = retries
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid ARXIV_MAX_RETRIES '{retries}': {e}"))?;
        }
        if let Ok(secs) = std::env::var("ARXIV_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid ARXIV_REQUEST_TIMEOUT_SECS '{secs}': {e}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(dir) = std::env::var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Whether the outbound call is wrapped in retry middleware.
    #[must_use]
    pub const fn retries_enabled(&self) -> bool {
        self.max_retries > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
