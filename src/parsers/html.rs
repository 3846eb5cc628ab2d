use crate::results::Link;
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector"));

/// Elements whose text never shows up on the rendered page
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Elements that start a new line when rendered; their text never runs into a neighbour's
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "caption", "dd", "details",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "head", "header", "hr", "li", "main", "nav", "ol", "option", "p", "pre",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr", "ul",
];

/// Extracts the visible text of a document as a single whitespace-normalized string.
///
/// Inline markup is transparent (`Java<b>Script</b>` reads as one word), block
/// elements are separated by whitespace.
pub fn extract_text(doc: &Html) -> String {
    let mut raw = String::new();
    collect_text(doc.tree.root(), &mut raw);

    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    ::log::debug!("HTML parser extracted {} characters of text", text.len());
    text
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if INVISIBLE_ELEMENTS.contains(&el.name()) => {}
            Node::Element(el) => {
                let block = BLOCK_ELEMENTS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                collect_text(child, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

/// Extracts every anchor that carries an `href`, in document order
pub fn extract_links(doc: &Html) -> Vec<Link> {
    let links = doc
        .select(&LINK_SELECTOR)
        .filter_map(|e| {
            let url = e.value().attr("href")?;
            let text = e.text().collect::<String>();
            Some(Link::new(text.trim(), url))
        })
        .collect::<Vec<Link>>();

    // Log the number of links found
    ::log::debug!("HTML parser found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).map(|l| &l.url).collect::<Vec<_>>()
        );
    }

    links
}
