//! Node tree to Markdown serialization
//!
//! A single depth-first walk appends to one output buffer. Each element is
//! dispatched on its [`Tag`]; tags without a rule pass their children
//! through unchanged.
//!
//! Headings, bold, emphasis and link text are rendered from the flattened
//! text of their subtree, so markup nested inside them is not converted.

use crate::node::{Element, Node};
use crate::options::Options;
use crate::utilities::{indent, push_newlines};

const FENCE: &str = "```";

/// Serialize a node tree to a Markdown string
pub fn serialize(node: &Node, options: &Options) -> String {
    let mut output = String::with_capacity(1024);
    serialize_node(node, options, Context::default(), &mut output);
    output.trim().to_string()
}

/// State carried down the walk
#[derive(Debug, Default, Clone, Copy)]
struct Context {
    /// Nesting depth of list items, used for indentation only
    list_level: usize,
    /// Below a code fence; everything is literal text
    in_pre: bool,
}

/// Element kinds with a Markdown rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Heading(usize),
    Paragraph,
    Pre,
    Code,
    List { ordered: bool },
    Strong,
    Emphasis,
    Anchor,
    LineBreak,
    Other,
}

impl Tag {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => Tag::Heading(1),
            "h2" => Tag::Heading(2),
            "h3" => Tag::Heading(3),
            "h4" => Tag::Heading(4),
            "p" => Tag::Paragraph,
            "pre" => Tag::Pre,
            "code" => Tag::Code,
            "ul" => Tag::List { ordered: false },
            "ol" => Tag::List { ordered: true },
            "strong" | "b" => Tag::Strong,
            "em" | "i" => Tag::Emphasis,
            "a" => Tag::Anchor,
            "br" => Tag::LineBreak,
            _ => Tag::Other,
        }
    }
}

fn serialize_node(node: &Node, options: &Options, ctx: Context, out: &mut String) {
    match node {
        Node::Text(content) if ctx.in_pre => out.push_str(content),
        Node::Text(content) => out.push_str(content.trim()),
        Node::Element(element) => serialize_element(node, element, options, ctx, out),
    }
}

fn serialize_children(node: &Node, options: &Options, ctx: Context, out: &mut String) {
    for child in node.children() {
        serialize_node(child, options, ctx, out);
    }
}

fn serialize_element(
    node: &Node,
    element: &Element,
    options: &Options,
    ctx: Context,
    out: &mut String,
) {
    // The enclosing fence already opened; nested code is inlined verbatim.
    if ctx.in_pre {
        out.push_str(&node.text_content());
        return;
    }

    match Tag::from_name(&element.tag) {
        Tag::Heading(level) => {
            push_newlines(out, 1);
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(node.text_content().trim());
            push_newlines(out, 2);
        }

        Tag::Paragraph => {
            serialize_children(node, options, ctx, out);
            push_newlines(out, 2);
        }

        Tag::Pre | Tag::Code => serialize_code_block(node, options, ctx, out),

        Tag::List { ordered } => serialize_list(node, ordered, options, ctx, out),

        Tag::Strong => {
            out.push_str("**");
            out.push_str(&node.text_content());
            out.push_str("**");
        }

        Tag::Emphasis => {
            out.push('_');
            out.push_str(&node.text_content());
            out.push('_');
        }

        Tag::Anchor => {
            let href = element
                .attr("href")
                .map(|href| options.resolve_href(href))
                .unwrap_or_default();
            out.push('[');
            out.push_str(&node.text_content());
            out.push_str("](");
            out.push_str(&href);
            out.push(')');
        }

        Tag::LineBreak => push_newlines(out, 1),

        Tag::Other => serialize_children(node, options, ctx, out),
    }
}

fn serialize_code_block(node: &Node, options: &Options, ctx: Context, out: &mut String) {
    push_newlines(out, 1);
    out.push_str(FENCE);
    out.push('\n');

    // Code bodies go straight into the buffer so blank lines survive.
    let body_ctx = Context {
        in_pre: true,
        ..ctx
    };
    serialize_children(node, options, body_ctx, out);

    out.push('\n');
    out.push_str(FENCE);
    push_newlines(out, 2);
}

fn serialize_list(node: &Node, ordered: bool, options: &Options, ctx: Context, out: &mut String) {
    let indent = indent(ctx.list_level);
    let item_ctx = Context {
        list_level: ctx.list_level + 1,
        ..ctx
    };

    for (i, item) in node.element_children().enumerate() {
        out.push_str(&indent);
        if ordered {
            out.push_str(&(i + 1).to_string());
            out.push_str(". ");
        } else {
            out.push_str("- ");
        }

        serialize_children(item, options, item_ctx, out);
        push_newlines(out, 1);
    }

    push_newlines(out, 1);
}
