use ego_tree::iter::Edge;
use scraper::{ElementRef, Html};

/// Tags whose text content never renders.
const INVISIBLE_TAGS: &[&str] = &["script", "style"];

/// Owned document tree. Built once from the HTML parser's output so that the
/// section scan only ever sees text and elements.
///
/// Every walk over the tree, including drop, uses an explicit stack, so
/// nesting depth is bounded by memory rather than the call stack.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
}

impl Node {
    /// Parse a full HTML document. The returned root is the `<html>` element;
    /// comments, doctypes and processing instructions are dropped.
    pub fn parse_document(html: &str) -> Node {
        let document = Html::parse_document(html);
        from_element(document.root_element())
    }

    /// Tag name for elements, `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text(_) => None,
        }
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Siblings that follow the first `tag` element found anywhere below this
    /// node, in document order. `None` when no such element exists.
    pub fn siblings_after_first(&self, tag: &str) -> Option<&[Node]> {
        // (siblings, index of the next one to visit)
        let mut stack = vec![(self.children(), 0usize)];
        while let Some((siblings, i)) = stack.pop() {
            let Some(node) = siblings.get(i) else {
                continue;
            };
            if node.is(tag) {
                return Some(&siblings[i + 1..]);
            }
            stack.push((siblings, i + 1));
            stack.push((node.children(), 0));
        }
        None
    }

    /// All nodes below this one, pre-order. Restartable: each call walks afresh.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().iter().rev().collect(),
        }
    }

    /// Descendant `tag` elements carrying attribute `attr`, document order.
    pub fn find_all_with_attr<'a>(
        &'a self,
        tag: &'a str,
        attr: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.descendants()
            .filter(move |n| n.is(tag) && n.attr(attr).is_some())
    }

    /// Concatenated text of every descendant text node, skipping script/style.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element { tag, children, .. } => {
                    if !INVISIBLE_TAGS.contains(&tag.as_str()) {
                        stack.extend(children.iter().rev());
                    }
                }
            }
        }
        out
    }

    fn push_child(&mut self, child: Node) {
        if let Node::Element { children, .. } = self {
            children.push(child);
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Element { children, .. } => std::mem::take(children),
            Node::Text(_) => return,
        };
        while let Some(mut node) = pending.pop() {
            if let Node::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

fn from_element(root: ElementRef<'_>) -> Node {
    // elements opened but not yet closed
    let mut open: Vec<Node> = Vec::new();

    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                scraper::Node::Element(el) => open.push(Node::Element {
                    tag: el.name().to_string(),
                    attrs: el
                        .attrs()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                    children: Vec::new(),
                }),
                scraper::Node::Text(text) => {
                    if let Some(parent) = open.last_mut() {
                        parent.push_child(Node::Text(text.to_string()));
                    }
                }
                _ => {}
            },
            Edge::Close(node) if node.value().is_element() => {
                let Some(done) = open.pop() else { continue };
                match open.last_mut() {
                    Some(parent) => parent.push_child(done),
                    None => return done,
                }
            }
            Edge::Close(_) => {}
        }
    }

    unreachable!("traversal always closes the root element")
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drops_comments() {
        let root = Node::parse_document("<p>a<!-- hidden -->b</p>");
        assert_eq!(root.tag(), Some("html"));
        let p = root.descendants().find(|n| n.is("p")).unwrap();
        assert_eq!(p.children().len(), 2);
        assert_eq!(p.text(), "ab");
    }

    #[test]
    fn siblings_after_first_paragraph() {
        let root = Node::parse_document("<body><div><p>nested</p><h2>A</h2></div><p>top</p><h2>B</h2></body>");
        let siblings = root.siblings_after_first("p").unwrap();
        // first p in document order is the nested one
        assert_eq!(siblings.len(), 1);
        assert_eq!(siblings[0].text(), "A");
    }

    #[test]
    fn no_paragraph() {
        let root = Node::parse_document("<h2>Only a heading</h2>");
        assert!(root.siblings_after_first("p").is_none());
    }

    #[test]
    fn descendants_are_preorder_and_restartable() {
        let root = Node::parse_document("<div id=x><span>1</span><b>2</b></div>");
        let div = root.descendants().find(|n| n.attr("id") == Some("x")).unwrap();
        let tags: Vec<_> = div.descendants().filter_map(|n| n.tag()).collect();
        assert_eq!(tags, vec!["span", "b"]);
        assert_eq!(div.descendants().count(), div.descendants().count());
    }

    #[test]
    fn anchors_without_href_are_not_found() {
        let root = Node::parse_document(r#"<p><a href="/wiki/A">a</a><a name="x">b</a><a href="">c</a></p>"#);
        let hrefs: Vec<_> = root
            .find_all_with_attr("a", "href")
            .filter_map(|n| n.attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["/wiki/A", ""]);
    }

    #[test]
    fn deep_nesting_walks_without_recursion() {
        let depth = 20_000;
        let html = format!(
            "<div id=deep>{}word{}</div>",
            "<span>".repeat(depth),
            "</span>".repeat(depth)
        );
        let root = Node::parse_document(&html);
        let div = root.descendants().find(|n| n.attr("id") == Some("deep")).unwrap();
        assert_eq!(div.text(), "word");
        assert_eq!(div.descendants().filter(|n| n.is("span")).count(), depth);
        assert!(root.siblings_after_first("p").is_none());
        drop(root);
    }

    #[test]
    fn text_skips_script_and_style() {
        let root = Node::parse_document("<p>visible<script>var x;</script><style>p{}</style> text</p>");
        let p = root.descendants().find(|n| n.is("p")).unwrap();
        assert_eq!(p.text(), "visible text");
    }
}
