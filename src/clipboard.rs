//! Clipboard seam.
//!
//! The browser crate writes through `navigator.clipboard`; the terminal uses
//! the system clipboard via arboard. Failures are reported to the caller,
//! which turns them into a toast.

/// Errors produced by clipboard writes.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[async_trait::async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard for the terminal front end.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(feature = "cli")]
#[async_trait::async_trait(?Send)]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard.set_text(text).map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
