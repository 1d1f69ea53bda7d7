//! Atom feed decoding.
//!
//! [`parse_feed`] turns an upstream response body into transient
//! [`FeedEntry`] records. Absence is modeled with `Option` here; the
//! normalizer decides what an absent field becomes in a [`Paper`].
//!
//! [`Paper`]: crate::models::Paper

mod normalize;

pub use normalize::{extract_arxiv_id, normalize, resolve_pdf_url};

use roxmltree::{Document, Node};

use crate::error::FeedError;

/// Atom 1.0 namespace.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// MIME type arXiv puts on direct PDF links.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// One `<author>` of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedAuthor {
    pub name: Option<String>,
}

/// One `<link>` of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedLink {
    pub href: Option<String>,
    pub rel: Option<String>,
    pub mime_type: Option<String>,
}

impl FeedLink {
    /// Atom treats a link without `rel` as `alternate`.
    #[must_use]
    pub fn is_alternate(&self) -> bool {
        self.rel.as_deref().is_none_or(|rel| rel == "alternate")
    }

    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mime_type.as_deref() == Some(PDF_MIME_TYPE)
    }
}

/// One `<category>` of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedTag {
    pub term: Option<String>,
}

/// A decoded `<entry>`, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    pub authors: Vec<FeedAuthor>,
    pub links: Vec<FeedLink>,
    pub tags: Vec<FeedTag>,
}

/// Parse an Atom document into its entries, in document order.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the body is not well-formed XML and
/// [`FeedError::NotAFeed`] if the root element is not an Atom `<feed>`.
pub fn parse_feed(body: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let doc = Document::parse(body)?;
    let root = doc.root_element();

    if !is_atom(root, "feed") {
        return Err(FeedError::NotAFeed { root: root.tag_name().name().to_string() });
    }

    let entries: Vec<FeedEntry> =
        root.children().filter(|n| is_atom(*n, "entry")).map(parse_entry).collect();

    tracing::debug!(entries = entries.len(), "Parsed Atom feed");
    Ok(entries)
}

fn parse_entry(entry: Node<'_, '_>) -> FeedEntry {
    let mut parsed = FeedEntry::default();

    for child in entry.children().filter(Node::is_element) {
        if !in_atom_ns(child) {
            continue;
        }

        match child.tag_name().name() {
            "id" => set_once(&mut parsed.id, child),
            "title" => set_once(&mut parsed.title, child),
            "summary" => set_once(&mut parsed.summary, child),
            "published" => set_once(&mut parsed.published, child),
            "updated" => set_once(&mut parsed.updated, child),
            "author" => parsed.authors.push(FeedAuthor {
                name: child.children().find(|n| is_atom(*n, "name")).map(element_text),
            }),
            "link" => parsed.links.push(FeedLink {
                href: child.attribute("href").map(str::to_string),
                rel: child.attribute("rel").map(str::to_string),
                mime_type: child.attribute("type").map(str::to_string),
            }),
            "category" => {
                parsed.tags.push(FeedTag { term: child.attribute("term").map(str::to_string) });
            }
            _ => {}
        }
    }

    parsed
}

/// First occurrence wins.
fn set_once(slot: &mut Option<String>, node: Node<'_, '_>) {
    if slot.is_none() {
        *slot = Some(element_text(node));
    }
}

/// All descendant text of an element, concatenated; an empty element yields `""`.
///
/// Comments are skipped and nested markup (e.g. `type="xhtml"` content)
/// contributes its text.
fn element_text(node: Node<'_, '_>) -> String {
    node.descendants().filter(Node::is_text).filter_map(|n| n.text()).collect()
}

fn in_atom_ns(node: Node<'_, '_>) -> bool {
    node.tag_name().namespace().is_none_or(|ns| ns == ATOM_NS)
}

fn is_atom(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && in_atom_ns(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>ArXiv Query</title>
  <entry>
    <id>http://arxiv.org/abs/2301.00001v1</id>
    <updated>2023-01-01T10:00:00Z</updated>
    <published>2023-01-01T12:00:00Z</published>
    <title>Test Paper Title 1</title>
    <summary>  Abstract &amp; more.  </summary>
    <author><name>Author One</name><arxiv:affiliation>Somewhere</arxiv:affiliation></author>
    <author><name>Author Two</name></author>
    <link href="http://arxiv.org/abs/2301.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2301.00001v1" rel="related" type="application/pdf"/>
    <arxiv:primary_category term="cs.AI" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.AI" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.LG" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_entry_fields() {
        let entries = parse_feed(ENTRY_FEED).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.id.as_deref(), Some("http://arxiv.org/abs/2301.00001v1"));
        assert_eq!(entry.title.as_deref(), Some("Test Paper Title 1"));
        assert_eq!(entry.summary.as_deref(), Some("  Abstract & more.  "));
        assert_eq!(entry.published.as_deref(), Some("2023-01-01T12:00:00Z"));
        assert_eq!(entry.updated.as_deref(), Some("2023-01-01T10:00:00Z"));
        assert_eq!(entry.authors.len(), 2);
        assert_eq!(entry.authors[1].name.as_deref(), Some("Author Two"));
        assert_eq!(entry.links.len(), 2);
        assert!(entry.links[0].is_alternate());
        assert!(entry.links[1].is_pdf());
    }

    #[test]
    fn test_foreign_namespace_category_ignored() {
        let entries = parse_feed(ENTRY_FEED).unwrap();
        let terms: Vec<_> = entries[0].tags.iter().filter_map(|t| t.term.as_deref()).collect();
        assert_eq!(terms, ["cs.AI", "cs.LG"]);
    }

    #[test]
    fn test_empty_feed() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        assert!(parse_feed(body).unwrap().is_empty());
    }

    #[test]
    fn test_missing_and_empty_elements() {
        let body = r#"<feed xmlns="http://www.w3.org/2005/Atom">
<entry><title></title><author/><category/></entry></feed>"#;
        let entries = parse_feed(body).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.title.as_deref(), Some(""));
        assert!(entry.id.is_none());
        assert!(entry.summary.is_none());
        assert_eq!(entry.authors, vec![FeedAuthor { name: None }]);
        assert_eq!(entry.tags, vec![FeedTag { term: None }]);
    }

    #[test]
    fn test_comment_inside_text_keeps_all_content() {
        let body = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>
<title>Quantum <!-- note --> Computing</title>
<summary>Part one <!-- x --> part two</summary>
</entry></feed>"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries[0].title.as_deref(), Some("Quantum  Computing"));
        assert_eq!(entries[0].summary.as_deref(), Some("Part one  part two"));
    }

    #[test]
    fn test_xhtml_summary_text() {
        let body = r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>
<summary type="xhtml">
  <div xmlns="http://www.w3.org/1999/xhtml">An <em>abstract</em>.</div>
</summary>
<title><![CDATA[Graphs & Trees]]></title>
</entry></feed>"#;
        let entries = parse_feed(body).unwrap();
        assert_eq!(entries[0].summary.as_deref().map(str::trim), Some("An abstract."));
        assert_eq!(entries[0].title.as_deref(), Some("Graphs & Trees"));
    }

    #[test]
    fn test_link_without_rel_is_alternate() {
        let link = FeedLink { href: Some("x".into()), rel: None, mime_type: None };
        assert!(link.is_alternate());
        let related = FeedLink { rel: Some("related".into()), ..link };
        assert!(!related.is_alternate());
    }

    #[test]
    fn test_malformed_body_is_xml_error() {
        let err = parse_feed("This is not XML, it's just a string.").unwrap_err();
        assert!(matches!(err, FeedError::Xml(_)));
    }

    #[test]
    fn test_non_feed_root_rejected() {
        let err = parse_feed("<html><body>Service Unavailable</body></html>").unwrap_err();
        assert!(matches!(err, FeedError::NotAFeed { ref root } if root == "html"));
    }
}
