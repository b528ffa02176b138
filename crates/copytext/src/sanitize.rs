//! Class stripping.
//!
//! Produces a private deep copy of a subtree with every `class` attribute
//! removed. The input tree is only read.

use std::ops::Deref;

use crate::node::{Element, Node};
use crate::utilities::CLASS_ATTRIBUTE;

/// A deep copy of a subtree with no `class` attribute anywhere in it.
///
/// Only [`sanitize`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedNode(Node);

impl SanitizedNode {
    /// Borrow the sanitized tree
    pub fn as_node(&self) -> &Node {
        &self.0
    }

    /// Take ownership of the sanitized tree
    pub fn into_inner(self) -> Node {
        self.0
    }
}

impl Deref for SanitizedNode {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.0
    }
}

impl AsRef<Node> for SanitizedNode {
    fn as_ref(&self) -> &Node {
        &self.0
    }
}

/// Copy `node` and strip the class attribute from it and every descendant.
pub fn sanitize(node: &Node) -> SanitizedNode {
    let mut copy = node.clone();
    strip_classes(&mut copy);
    SanitizedNode(copy)
}

fn strip_classes(node: &mut Node) {
    if let Node::Element(element) = node {
        strip_element(element);
    }
}

fn strip_element(element: &mut Element) {
    element
        .attributes
        .retain(|name, _| !name.eq_ignore_ascii_case(CLASS_ATTRIBUTE));
    for child in &mut element.children {
        strip_classes(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_class_anywhere(node: &Node) -> bool {
        node.has_attr("class") || node.children().any(has_class_anywhere)
    }

    fn styled_tree() -> Node {
        let mut root = Node::element_with_attrs(
            "article",
            vec![("class", "prose"), ("id", "main")],
        );
        let mut p = Node::element_with_attrs("p", vec![("CLASS", "text-sm")]);
        p.add_child(Node::text("See "));
        let mut a = Node::element_with_attrs(
            "a",
            vec![("class", "link"), ("href", "/docs"), ("data-x", "1")],
        );
        a.add_child(Node::text("docs"));
        p.add_child(a);
        root.add_child(p);
        root.add_child(Node::text("\n"));
        root
    }

    #[test]
    fn test_strips_class_from_every_element() {
        let sanitized = sanitize(&styled_tree());
        assert!(!has_class_anywhere(&sanitized));
    }

    #[test]
    fn test_keeps_other_attributes_and_structure() {
        let original = styled_tree();
        let sanitized = sanitize(&original);

        assert_eq!(sanitized.attr("id"), Some("main"));
        assert_eq!(sanitized.tag_name(), "article");
        assert_eq!(sanitized.text_content(), original.text_content());
        assert_eq!(sanitized.children().count(), original.children().count());

        let a = sanitized
            .children()
            .next()
            .and_then(|p| p.element_children().next())
            .unwrap();
        assert_eq!(a.attr("href"), Some("/docs"));
        assert_eq!(a.attr("data-x"), Some("1"));
    }

    #[test]
    fn test_does_not_touch_input() {
        let original = styled_tree();
        let before = original.clone();
        let _ = sanitize(&original);

        assert_eq!(original, before);
        assert_eq!(original.attr("class"), Some("prose"));
    }

    #[test]
    fn test_text_node_passes_through() {
        let sanitized = sanitize(&Node::text("plain"));
        assert_eq!(sanitized.into_inner(), Node::text("plain"));
    }

    #[test]
    fn test_inner_html_has_no_class() {
        let sanitized = sanitize(&styled_tree());
        assert_eq!(
            sanitized.inner_html(),
            "<p>See <a href=\"/docs\" data-x=\"1\">docs</a></p>\n"
        );
    }
}
