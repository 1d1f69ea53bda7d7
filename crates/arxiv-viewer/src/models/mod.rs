//! Data models for arXiv papers and upstream queries.
//!
//! `Paper` is the JSON shape served to clients; field names are snake_case
//! to match what the frontend reads.

mod paper;
mod query;

pub use paper::{NOT_AVAILABLE, Paper, PaperAuthor};
pub use query::{SearchQuery, SortBy, SortOrder};
