//! Property-based tests for entry normalization.

use proptest::prelude::*;

use arxiv_viewer::feed::{
    FeedAuthor, FeedEntry, FeedLink, FeedTag, PDF_MIME_TYPE, extract_arxiv_id, normalize,
    resolve_pdf_url,
};
use arxiv_viewer::models::NOT_AVAILABLE;

fn arb_link() -> impl Strategy<Value = FeedLink> {
    (
        proptest::option::of(prop_oneof![
            "http://arxiv\\.org/abs/[0-9]{4}\\.[0-9]{5}v[1-9]",
            "http://arxiv\\.org/pdf/[0-9]{4}\\.[0-9]{5}v[1-9]",
            "https://[a-z]{3,10}\\.com/[a-z]{1,10}",
        ]),
        proptest::option::of(prop_oneof![Just("alternate"), Just("related"), Just("self")]),
        proptest::option::of(prop_oneof![Just(PDF_MIME_TYPE), Just("text/html")]),
    )
        .prop_map(|(href, rel, mime_type)| FeedLink {
            href,
            rel: rel.map(String::from),
            mime_type: mime_type.map(String::from),
        })
}

/// Generate arbitrary decoded entries, including ones missing every field.
fn arb_entry() -> impl Strategy<Value = FeedEntry> {
    (
        proptest::option::of("(http://arxiv\\.org/abs/)?[0-9]{4}\\.[0-9]{4,5}(v[0-9])?"),
        proptest::option::of("[A-Za-z0-9 :]{0,80}"),
        proptest::option::of("[ \\n]{0,3}[A-Za-z0-9 .,]{0,200}[ \\n]{0,3}"),
        proptest::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]T00:00:00Z"),
        proptest::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]T12:00:00Z"),
        proptest::collection::vec(proptest::option::of("[A-Z][a-z]{1,10} [A-Z][a-z]{1,12}"), 0..6),
        proptest::collection::vec(arb_link(), 0..4),
        proptest::collection::vec(proptest::option::of("[a-z]{2,8}\\.[A-Z]{2}"), 0..5),
    )
        .prop_map(|(id, title, summary, published, updated, authors, links, tags)| FeedEntry {
            id,
            title,
            summary,
            published,
            updated,
            authors: authors.into_iter().map(|name| FeedAuthor { name }).collect(),
            links,
            tags: tags.into_iter().map(|term| FeedTag { term }).collect(),
        })
}

proptest! {
    /// The id is whatever follows the `/abs/` marker.
    #[test]
    fn arxiv_id_follows_abs_marker(id in "[0-9]{4}\\.[0-9]{5}v[1-9]") {
        prop_assert_eq!(extract_arxiv_id(&format!("http://arxiv.org/abs/{id}")), id);
    }

    /// Ids without the marker pass through untouched.
    #[test]
    fn arxiv_id_without_marker_is_unchanged(raw in "[a-z0-9.:]{0,40}") {
        prop_assert_eq!(extract_arxiv_id(&raw), raw);
    }

    /// Every entry yields a complete paper.
    #[test]
    fn normalize_is_total(entry in arb_entry()) {
        let author_count = entry.authors.len();
        let tag_count = entry.tags.len();
        let published = entry.published.clone();
        let updated = entry.updated.clone();

        let paper = normalize(entry);

        prop_assert_eq!(paper.authors.len(), author_count);
        prop_assert_eq!(paper.category_terms().len(), tag_count);
        prop_assert!(paper.authors.iter().all(|a| !a.name.is_empty()));
        prop_assert_eq!(paper.summary.trim(), paper.summary.as_str());

        let expected_published = published.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        prop_assert_eq!(&paper.published_date, &expected_published);
        prop_assert_eq!(paper.updated_date, Some(updated.unwrap_or(expected_published)));
    }

    /// An explicit PDF link always wins over the derived one.
    #[test]
    fn typed_pdf_link_takes_precedence(links in proptest::collection::vec(arb_link(), 0..5)) {
        let first_typed = links
            .iter()
            .filter(|l| l.mime_type.as_deref() == Some(PDF_MIME_TYPE))
            .find_map(|l| l.href.clone());

        let resolved = resolve_pdf_url(&links);

        match first_typed {
            Some(href) => prop_assert_eq!(resolved, Some(href)),
            None => {
                if let Some(url) = resolved {
                    prop_assert!(url.contains("/pdf/"));
                }
            }
        }
    }
}
