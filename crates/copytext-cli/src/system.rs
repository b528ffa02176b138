//! System clipboard writer backed by arboard.

use arboard::Clipboard;
use copytext::{ClipboardError, ClipboardPayload, ClipboardWriter};

/// Writes payloads to the OS clipboard
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Open the OS clipboard
    pub fn open() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Rejected(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write(&mut self, payload: &ClipboardPayload) -> Result<(), ClipboardError> {
        let result = match payload {
            ClipboardPayload::Dual { html, plain } => {
                self.clipboard.set_html(html.as_str(), Some(plain.as_str()))
            }
            ClipboardPayload::PlainText(plain) => self.clipboard.set_text(plain.as_str()),
        };
        result.map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}
