use crate::parser::sections::ScrapeResult;

/// Plain-text report, one block per section in document order.
pub fn render_text(result: &ScrapeResult) -> String {
    let mut out = String::new();
    for section in result {
        out.push_str(&format!("Title of Section: {}\n\n", section.title));

        out.push_str("Most frequent words:\n");
        for t in &section.top_terms {
            out.push_str(&format!("{}: {}\n", t.term, t.count));
        }
        out.push('\n');

        out.push_str(&format!("Hyperlinks in {}:\n", section.title));
        for link in &section.links {
            out.push_str(link);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn render_json(result: &ScrapeResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

// ── Tests ──
