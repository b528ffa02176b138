//! CopyTextService - the entry point used by copy triggers.

use crate::clipboard::{build_and_dispatch, ClipboardPayload, ClipboardWriter};
use crate::node::Node;
use crate::options::Options;
use crate::sanitize::{sanitize, SanitizedNode};
use crate::serialize::serialize;

/// Bundles serialization options with the copy operations
#[derive(Debug, Clone, Default)]
pub struct CopyTextService {
    options: Options,
}

impl CopyTextService {
    /// Create a new CopyTextService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CopyTextService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Strip class attributes from a copy of `node`
    pub fn sanitize(&self, node: &Node) -> SanitizedNode {
        sanitize(node)
    }

    /// Convert `node` to Markdown
    pub fn serialize(&self, node: &Node) -> String {
        serialize(node, &self.options)
    }

    /// Build the dual-format payload for `node`
    pub fn payload(&self, node: &Node) -> ClipboardPayload {
        ClipboardPayload::build(node, &self.options)
    }

    /// Copy `node` to `writer`, falling back to plain text
    pub async fn build_and_dispatch<W: ClipboardWriter>(&self, node: &Node, writer: &mut W) -> bool {
        build_and_dispatch(node, &self.options, writer).await
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
