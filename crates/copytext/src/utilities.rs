//! Utility functions and constants shared by the tree walkers.

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Attribute carrying presentational class names
pub const CLASS_ATTRIBUTE: &str = "class";

/// Most consecutive newlines a block separator may produce
pub const MAX_NEWLINE_RUN: usize = 2;

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Indentation for a list item at the given nesting level
pub fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// Push `count` newlines, stopping once the buffer ends in a blank line.
pub fn push_newlines(out: &mut String, count: usize) {
    let trailing = out.bytes().rev().take_while(|&b| b == b'\n').count();
    let room = MAX_NEWLINE_RUN.saturating_sub(trailing);
    for _ in 0..count.min(room) {
        out.push('\n');
    }
}
