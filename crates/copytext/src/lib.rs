//! # copytext
//!
//! Turn a section of a rendered page into clipboard content: a sanitized
//! copy of its markup and a Markdown rendering of the same tree.
//!
//! ## Design
//!
//! The crate works on a plain [`Node`] tree rather than on a parser's own
//! types, so a live DOM bridge, html5ever, or hand-built fixtures can all
//! feed it. Three operations make up the core:
//!
//! - [`sanitize`]: deep copy with every `class` attribute removed
//! - [`serialize`]: one depth-first walk producing Markdown
//! - [`build_and_dispatch`]: write both forms to a [`ClipboardWriter`],
//!   falling back to Markdown alone if the rich write is rejected
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use copytext::{CopyTextService, Node};
//!
//! let service = CopyTextService::new();
//!
//! let mut h3 = Node::element_with_attrs("h3", vec![("class", "text-xl")]);
//! h3.add_child(Node::text("Install"));
//!
//! let sanitized = service.sanitize(&h3);
//! assert_eq!(sanitized.outer_html(), "<h3>Install</h3>");
//! assert_eq!(service.serialize(&sanitized), "### Install");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use copytext::{parse_html, serialize, Options};
//!
//! let node = parse_html("<ol><li>One</li><li>Two</li></ol>");
//! assert_eq!(serialize(&node, &Options::default()), "1. One\n2. Two");
//! ```

pub mod clipboard;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod sanitize;
mod serialize;
mod service;
mod utilities;

pub use clipboard::{
    build_and_dispatch, ClipboardError, ClipboardPayload, ClipboardWriter, MIME_HTML, MIME_PLAIN,
};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_html, select, select_all};
pub use node::{Attributes, Element, Node};
pub use options::Options;
pub use sanitize::{sanitize, SanitizedNode};
pub use serialize::serialize;
pub use service::CopyTextService;

/// Error type for copytext operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
