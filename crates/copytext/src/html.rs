//! HTML parsing support.
//!
//! Parses HTML strings into [`Node`] trees and locates copy targets inside a
//! page with CSS selectors.

use scraper::{ElementRef, Html, Node as ScraperNode, Selector};

use crate::node::Node;
use crate::{Error, Result};

/// Parse an HTML fragment into a Node tree.
///
/// The returned root is the `html` wrapper element the parser creates.
///
/// # Example
///
/// ```rust
/// use copytext::{parse_html, serialize, Options};
///
/// let node = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(serialize(&node, &Options::default()), "# Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    scraper_to_node(fragment.root_element())
}

/// Parse a complete HTML document and return its root element
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element())
}

/// Find every element of a page matching `selector`, in document order
pub fn select(html: &str, selector: &str) -> Result<Vec<Node>> {
    let parsed = Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;
    let document = Html::parse_document(html);
    let matches: Vec<Node> = document.select(&parsed).map(scraper_to_node).collect();

    tracing::debug!("Selector {:?} matched {} elements", selector, matches.len());
    Ok(matches)
}

/// Run each selector independently and collect all matches.
///
/// An invalid selector is logged and skipped; the remaining selectors still
/// run.
pub fn select_all<S: AsRef<str>>(html: &str, selectors: &[S]) -> Vec<Node> {
    let mut matches = Vec::new();
    for selector in selectors {
        let selector = selector.as_ref();
        match select(html, selector) {
            Ok(found) => matches.extend(found),
            Err(err) => tracing::error!("Error processing selector {:?}: {}", selector, err),
        }
    }
    matches
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
