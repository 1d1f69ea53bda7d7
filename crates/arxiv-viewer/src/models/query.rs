//! Upstream query parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{api, paging};

/// Sort key understood by the arXiv API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Relevance to the query.
    Relevance,
    /// Last update timestamp.
    LastUpdatedDate,
    /// Original submission timestamp.
    #[default]
    SubmittedDate,
}

impl SortBy {
    /// Wire value for the `sortBy` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastUpdatedDate => "lastUpdatedDate",
            Self::SubmittedDate => "submittedDate",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction understood by the arXiv API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Wire value for the `sortOrder` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound search against the arXiv API.
///
/// `start` and `max_results` are passed through as the requested window;
/// the upstream enforces the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// arXiv query expression, e.g. `all:quantum`.
    pub search_query: String,
    /// Offset into the upstream result set.
    pub start: u32,
    /// Requested page size.
    pub max_results: u32,
    /// Sort key.
    pub sort_by: SortBy,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl SearchQuery {
    /// Query with default paging and newest-submitted-first ordering.
    #[must_use]
    pub fn new(search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            start: paging::DEFAULT_START,
            max_results: paging::FETCH_MAX_RESULTS,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }

    /// Recent submissions across the configured categories.
    #[must_use]
    pub fn latest(start: u32, max_results: u32) -> Self {
        let expr = api::LATEST_CATEGORIES
            .iter()
            .map(|cat| format!("cat:{cat}"))
            .collect::<Vec<_>>()
            .join(" OR ");

        Self::new(expr).with_window(start, max_results)
    }

    /// Keyword search over all fields.
    #[must_use]
    pub fn keyword(keyword: &str, start: u32, max_results: u32) -> Self {
        Self::new(format!("all:{keyword}")).with_window(start, max_results)
    }

    /// Set the paging window.
    #[must_use]
    pub const fn with_window(mut self, start: u32, max_results: u32) -> Self {
        self.start = start;
        self.max_results = max_results;
        self
    }

    /// Set the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Query-string pairs in the order the upstream documents them.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search_query", self.search_query.clone()),
            ("start", self.start.to_string()),
            ("max_results", self.max_results.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ]
    }
}
