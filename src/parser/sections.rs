use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::frequency::{self, TOP_TERMS};
use super::links;
use super::text;
use super::tree::Node;
use crate::error::{Result, ScrapeError};

const BODY_ANCHOR_TAG: &str = "p";
const SECTION_TAG: &str = "h2";
const BLOCK_TAGS: &[&str] = &["p", "div", "table"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Frozen summary of one article section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub top_terms: Vec<TermCount>,
    pub links: Vec<String>,
}

/// Section reports keyed by title, in document order.
///
/// A repeated title replaces the earlier report but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScrapeResult {
    sections: Vec<SectionReport>,
}

impl ScrapeResult {
    pub fn insert(&mut self, report: SectionReport) {
        match self.sections.iter_mut().find(|s| s.title == report.title) {
            Some(existing) => *existing = report,
            None => self.sections.push(report),
        }
    }

    pub fn get(&self, title: &str) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionReport> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScrapeResult {
    type Item = &'a SectionReport;
    type IntoIter = std::slice::Iter<'a, SectionReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Section being accumulated. Fresh containers per section.
#[derive(Debug)]
struct OpenSection {
    title: String,
    words: Vec<String>,
    links: Vec<String>,
}

impl OpenSection {
    fn new(heading: &Node) -> Self {
        OpenSection {
            title: text::clean_title(&heading.text()),
            words: Vec::new(),
            links: Vec::new(),
        }
    }

    fn close(self) -> SectionReport {
        let top_terms = frequency::most_common(&self.words, TOP_TERMS)
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        debug!(
            "Closed section {:?}: {} words, {} links",
            self.title,
            self.words.len(),
            self.links.len()
        );
        SectionReport {
            title: self.title,
            top_terms,
            links: self.links,
        }
    }
}

enum State {
    BeforeBody,
    InSection(OpenSection),
}

enum Event<'a> {
    Heading(&'a Node),
    Block(&'a Node),
    Other,
}

fn classify_node(node: &Node) -> Event<'_> {
    match node.tag() {
        Some(SECTION_TAG) => Event::Heading(node),
        Some(tag) if BLOCK_TAGS.contains(&tag) => Event::Block(node),
        _ => Event::Other,
    }
}

/// Split an article into `h2`-delimited sections and summarize each one.
///
/// Scanning starts after the first `<p>` in the document and only walks that
/// paragraph's following siblings. Content before it, and headings nested
/// inside other elements, are never seen.
pub fn extract(
    root: &Node,
    stopwords: &HashSet<String>,
    base_url: &str,
    page_url: &str,
) -> Result<ScrapeResult> {
    let stream = root
        .siblings_after_first(BODY_ANCHOR_TAG)
        .ok_or_else(|| ScrapeError::Input("no paragraph element found".to_string()))?;

    let mut result = ScrapeResult::default();
    let mut state = State::BeforeBody;

    for node in stream {
        state = match (state, classify_node(node)) {
            (State::BeforeBody, Event::Heading(h)) => State::InSection(OpenSection::new(h)),
            (State::InSection(open), Event::Heading(h)) => {
                result.insert(open.close());
                State::InSection(OpenSection::new(h))
            }
            (State::InSection(mut open), Event::Block(block)) => {
                open.links.extend(links::extract(block, base_url, page_url));
                open.words
                    .extend(text::normalize_words(&block.text(), stopwords));
                State::InSection(open)
            }
            (state, _) => state,
        };
    }

    if let State::InSection(open) = state {
        result.insert(open.close());
    }

    debug!("Extracted {} sections", result.len());
    Ok(result)
}

// ── Tests ──
