use super::tree::Node;

const WIKI_PREFIX: &str = "/wiki";
const CITE_PREFIX: &str = "#cite";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `/wiki...`, resolved against the site origin.
    Wiki,
    /// `#cite...`, resolved against the page being scraped.
    Citation,
    /// Anything else, kept verbatim.
    Other,
}

pub fn classify(href: &str) -> LinkKind {
    if href.starts_with(WIKI_PREFIX) {
        LinkKind::Wiki
    } else if href.starts_with(CITE_PREFIX) {
        LinkKind::Citation
    } else {
        LinkKind::Other
    }
}

/// Absolute form of an `href` according to its kind.
pub fn resolve(href: &str, base_url: &str, page_url: &str) -> String {
    match classify(href) {
        LinkKind::Wiki => format!("{}{}", base_url, href),
        LinkKind::Citation => format!("{}{}", page_url, href),
        LinkKind::Other => href.to_string(),
    }
}

/// Every anchor carrying an `href` below `node`, resolved, document order.
/// Anchors without the attribute are not links and are skipped.
pub fn extract(node: &Node, base_url: &str, page_url: &str) -> Vec<String> {
    node.find_all_with_attr("a", "href")
        .filter_map(|a| a.attr("href"))
        .map(|href| resolve(href, base_url, page_url))
        .collect()
}

// ── Tests ──
