//! Clipboard payloads and two-tier dispatch.
//!
//! A copy request first offers the clipboard both the sanitized markup and
//! the Markdown text. If the writer rejects that, the Markdown alone is
//! written. The second attempt only starts after the first has resolved.

use crate::node::Node;
use crate::options::Options;
use crate::sanitize::sanitize;
use crate::serialize::serialize;

/// Mime type of the rich representation
pub const MIME_HTML: &str = "text/html";

/// Mime type of the plain representation
pub const MIME_PLAIN: &str = "text/plain";

/// Clipboard write failure. Permission denial, unsupported formats and
/// platform errors are not told apart.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Content handed to the clipboard for one copy request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    /// Sanitized markup alongside its Markdown rendering
    Dual { html: String, plain: String },
    /// Markdown only
    PlainText(String),
}

impl ClipboardPayload {
    /// Sanitize `node` and package both representations
    pub fn build(node: &Node, options: &Options) -> Self {
        let sanitized = sanitize(node);
        let plain = serialize(&sanitized, options);
        let html = sanitized.inner_html();
        ClipboardPayload::Dual { html, plain }
    }

    /// The plain-text-only form of this payload
    pub fn fallback(&self) -> Self {
        ClipboardPayload::PlainText(self.plain_text().to_string())
    }

    /// The Markdown representation
    pub fn plain_text(&self) -> &str {
        match self {
            ClipboardPayload::Dual { plain, .. } => plain,
            ClipboardPayload::PlainText(plain) => plain,
        }
    }

    /// The markup representation, if present
    pub fn html(&self) -> Option<&str> {
        match self {
            ClipboardPayload::Dual { html, .. } => Some(html),
            ClipboardPayload::PlainText(_) => None,
        }
    }

    /// Mime-tagged parts, rich first
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        match self {
            ClipboardPayload::Dual { html, plain } => {
                vec![(MIME_HTML, html.as_str()), (MIME_PLAIN, plain.as_str())]
            }
            ClipboardPayload::PlainText(plain) => vec![(MIME_PLAIN, plain.as_str())],
        }
    }
}

/// Destination for clipboard payloads.
///
/// Implementations may reject either payload kind independently.
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError>;
}

/// Copy `node` through `writer`, falling back to plain text.
///
/// Returns `true` if either write succeeded.
pub async fn build_and_dispatch<W>(node: &Node, options: &Options, writer: &mut W) -> bool
where
    W: ClipboardWriter,
{
    let payload = ClipboardPayload::build(node, options);

    let err = match writer.write(&payload).await {
        Ok(()) => {
            tracing::debug!("Copied as markdown: {}", payload.plain_text());
            return true;
        }
        Err(err) => err,
    };

    tracing::warn!("Rich clipboard write failed, retrying as plain text: {}", err);
    let fallback = payload.fallback();
    match writer.write(&fallback).await {
        Ok(()) => {
            tracing::debug!("Copied as markdown (fallback): {}", fallback.plain_text());
            true
        }
        Err(err) => {
            tracing::error!("Failed to copy: {}", err);
            false
        }
    }
}
