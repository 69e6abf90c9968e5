pub mod frequency;
pub mod links;
pub mod sections;
pub mod text;
pub mod tree;

use std::collections::HashSet;

use crate::error::Result;
use crate::fetcher::WIKI_BASE_URL;
use sections::ScrapeResult;
use tree::Node;

/// Two-pass pipeline: raw HTML → node tree → per-section reports.
pub fn process_page(html: &str, page_url: &str, stopwords: &HashSet<String>) -> Result<ScrapeResult> {
    let root = Node::parse_document(html);
    sections::extract(&root, stopwords, WIKI_BASE_URL, page_url)
}
