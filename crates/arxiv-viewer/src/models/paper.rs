//! Paper data model served to HTTP clients.

use serde::{Deserialize, Serialize};

/// Placeholder for an expected feed field that the upstream omitted.
pub const NOT_AVAILABLE: &str = "N/A";

/// A paper author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperAuthor {
    /// Display name.
    pub name: String,
}

impl PaperAuthor {
    /// Create an author from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A normalized arXiv search result.
///
/// One `Paper` is a projection of exactly one feed entry. It is built fresh
/// per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier, e.g. `2301.00001v1`.
    pub arxiv_id: String,

    /// Paper title.
    pub title: String,

    /// Abstract, trimmed.
    pub summary: String,

    /// Authors in feed order.
    pub authors: Vec<PaperAuthor>,

    /// Publication timestamp, verbatim from the feed.
    pub published_date: String,

    /// Last update timestamp; falls back to `published_date`.
    #[serde(default)]
    pub updated_date: Option<String>,

    /// Direct PDF link when one can be resolved.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Category terms in feed order.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl Paper {
    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Whether a PDF link was resolved.
    #[must_use]
    pub const fn has_pdf(&self) -> bool {
        self.pdf_url.is_some()
    }

    /// Category terms, empty when none were present.
    #[must_use]
    pub fn category_terms(&self) -> &[String] {
        self.categories.as_deref().unwrap_or_default()
    }
}
