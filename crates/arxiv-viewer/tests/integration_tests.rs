//! Integration tests against the live arXiv API.
//!
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use arxiv_viewer::client::ArxivClient;
use arxiv_viewer::config::Config;
use arxiv_viewer::models::SearchQuery;

fn create_client() -> ArxivClient {
    let config = Config { max_retries: 2, ..Config::default() };
    ArxivClient::new(&config).expect("Failed to create client")
}

#[tokio::test]
async fn test_latest_papers_live() {
    let papers = create_client().get_latest(0, 5).await;

    assert!(!papers.is_empty(), "arXiv returned no recent papers");
    assert!(papers.len() <= 5);
    for paper in &papers {
        assert!(!paper.arxiv_id.is_empty());
        assert!(paper.updated_date.is_some());
        println!("{} - {}", paper.arxiv_id, paper.title);
    }
}

#[tokio::test]
async fn test_keyword_search_live() {
    let papers = create_client().search_by_keyword("quantum computing", 0, 3).await;

    assert!(!papers.is_empty());
    assert!(papers.iter().all(|p| p.pdf_url.as_deref().is_none_or(|u| u.contains("/pdf/"))));
}

#[tokio::test]
async fn test_paging_window_live() {
    let client = create_client();
    let first = client.fetch(&SearchQuery::keyword("graph", 0, 2)).await;
    let second = client.fetch(&SearchQuery::keyword("graph", 2, 2)).await;

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert_ne!(first[0].arxiv_id, second[0].arxiv_id);
}
