//! Document tree model.
//!
//! A [`Node`] is either a run of text or an element with attributes and
//! ordered children. Any parser (html5ever, a live DOM bridge, hand-built
//! fixtures) can produce this structure; the sanitizer and serializer only
//! ever read it.

use indexmap::IndexMap;

use crate::utilities::is_void;

/// Attribute map preserving source order.
pub type Attributes = IndexMap<String, String>;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text node content, untrimmed.
    Text(String),
    /// Element node.
    Element(Element),
}

/// An element with a tag, attributes and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as delivered by the parser. Compared case-insensitively.
    pub tag: String,
    /// Attributes in source order.
    pub attributes: Attributes,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.tag.to_lowercase()
    }

    /// Get an attribute value by name, ignoring ASCII case
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing one with the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let existing = self
            .attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned();

        match existing {
            Some(key) => {
                self.attributes.insert(key, value.to_string());
            }
            None => {
                self.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Remove an attribute by name, ignoring ASCII case. Order of the
    /// remaining attributes is kept.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self
            .attributes
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))?;
        self.attributes
            .shift_remove_index(index)
            .map(|(_, value)| value)
    }

    fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.clone()
                } else {
                    format!("{}=\"{}\"", name, escape_html_attr(value))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get the tag name (lowercase). Text nodes report `#text`.
    pub fn tag_name(&self) -> String {
        match self {
            Node::Element(element) => element.tag_name(),
            Node::Text(_) => "#text".to_string(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.attr(name)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute. No-op on text nodes.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Node::Element(element) = self {
            element.set_attr(name, value);
        }
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.as_element().into_iter().flat_map(|e| e.children.iter())
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node. Text nodes cannot hold children; the call is ignored.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Get all text content from this node and descendants, untrimmed
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(content),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Reconstruct outer HTML
    pub fn outer_html(&self) -> String {
        match self {
            Node::Text(content) => escape_html_text(content),
            Node::Element(element) => {
                let tag = element.tag_name();
                let attrs = element.attributes_string();
                let open = if attrs.is_empty() {
                    format!("<{}>", tag)
                } else {
                    format!("<{} {}>", tag, attrs)
                };

                if is_void(&tag) {
                    open
                } else {
                    format!("{}{}</{}>", open, self.inner_html(), tag)
                }
            }
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children()
            .map(|child| child.outer_html())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text node content
fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), "#text");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("Title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
        assert!(!node.has_attr("id"));
    }

    #[test]
    fn test_set_attr_replaces_case_insensitively() {
        let mut node = Node::element_with_attrs("div", vec![("ID", "one")]);
        node.set_attr("id", "two");

        let element = node.as_element().unwrap();
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(node.attr("id"), Some("two"));
    }

    #[test]
    fn test_remove_attr_keeps_order() {
        let mut element = Element::new("div");
        element.set_attr("id", "a");
        element.set_attr("class", "b");
        element.set_attr("title", "c");

        assert_eq!(element.remove_attr("CLASS"), Some("b".to_string()));
        let keys: Vec<&str> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "title"]);
        assert_eq!(element.remove_attr("class"), None);
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().count(), 3);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_text_node_ignores_children() {
        let mut text = Node::text("leaf");
        text.add_child(Node::text("ignored"));
        assert_eq!(text.children().count(), 0);
    }

    #[test]
    fn test_text_content_is_untrimmed() {
        let mut div = Node::element("div");
        div.add_child(Node::text(" Hello "));
        let mut span = Node::element("span");
        span.add_child(Node::text("World\n"));
        div.add_child(span);

        assert_eq!(div.text_content(), " Hello World\n");
    }

    #[test]
    fn test_outer_html() {
        let mut a = Node::element_with_attrs("a", vec![("href", "https://example.com?a=1&b=2")]);
        a.add_child(Node::text("1 < 2"));

        assert_eq!(
            a.outer_html(),
            "<a href=\"https://example.com?a=1&amp;b=2\">1 &lt; 2</a>"
        );
    }

    #[test]
    fn test_void_element_html() {
        let br = Node::element("br");
        assert_eq!(br.outer_html(), "<br>");

        let img = Node::element_with_attrs("img", vec![("src", "test.png"), ("alt", "Test")]);
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"Test\">");
    }

    #[test]
    fn test_inner_html() {
        let mut div = Node::element("div");
        let mut p = Node::element("p");
        p.add_child(Node::text("Text"));
        div.add_child(p);
        div.add_child(Node::element_with_attrs("input", vec![("disabled", "")]));

        assert_eq!(div.inner_html(), "<p>Text</p><input disabled>");
    }
}
