//! Entry normalization: one [`FeedEntry`] in, one [`Paper`] out.
//!
//! Pure and total. Every entry produces a paper even when all of its fields
//! fall back to the `"N/A"` placeholder.

use super::{FeedEntry, FeedLink};
use crate::models::{NOT_AVAILABLE, Paper, PaperAuthor};

const ABS_MARKER: &str = "/abs/";
const PDF_MARKER: &str = "/pdf/";

/// Map a decoded entry to a [`Paper`].
#[must_use]
pub fn normalize(entry: FeedEntry) -> Paper {
    let arxiv_id = extract_arxiv_id(entry.id.as_deref().unwrap_or_default());
    let pdf_url = resolve_pdf_url(&entry.links);

    let authors = entry
        .authors
        .into_iter()
        .map(|a| PaperAuthor::new(a.name.unwrap_or_else(not_available)))
        .collect();

    let published_date = entry.published.unwrap_or_else(not_available);
    let updated_date = entry.updated.unwrap_or_else(|| published_date.clone());

    let categories =
        entry.tags.into_iter().map(|t| t.term.unwrap_or_else(not_available)).collect();

    let summary = entry.summary.map_or_else(not_available, |s| s.trim().to_string());

    Paper {
        arxiv_id,
        title: entry.title.unwrap_or_else(not_available),
        summary,
        authors,
        published_date,
        updated_date: Some(updated_date),
        pdf_url,
        categories: Some(categories),
    }
}

/// Everything after the last `/abs/`, or the raw id when the marker is absent.
#[must_use]
pub fn extract_arxiv_id(raw_id: &str) -> String {
    raw_id
        .rfind(ABS_MARKER)
        .map_or(raw_id, |idx| &raw_id[idx + ABS_MARKER.len()..])
        .to_string()
}

/// First explicit PDF link, else the alternate `/abs/` link rewritten to `/pdf/`.
#[must_use]
pub fn resolve_pdf_url(links: &[FeedLink]) -> Option<String> {
    if let Some(href) = links.iter().filter(|l| l.is_pdf()).find_map(|l| l.href.as_deref()) {
        return Some(href.to_string());
    }

    links
        .iter()
        .filter(|l| l.is_alternate())
        .find_map(|l| l.href.as_deref())
        .filter(|href| href.contains(ABS_MARKER))
        .map(|href| href.replace(ABS_MARKER, PDF_MARKER))
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}
