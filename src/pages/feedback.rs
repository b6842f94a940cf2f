//! Transient notifications shared by the pages.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::messages;

/// How long a toast stays up. The host owns the timer.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Info,
}

impl Tone {
    /// CSS modifier used by the browser front end.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub tone: Tone,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self { tone, message: message.into() }
    }
}

/// Copy `text` and describe the outcome. Clipboard failures end here.
pub async fn copy_with_feedback<C: Clipboard + ?Sized>(clipboard: &C, text: &str) -> Toast {
    match clipboard.write_text(text).await {
        Ok(()) => Toast::new(Tone::Success, messages::COPIED),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            Toast::new(Tone::Danger, messages::COPY_FAILED)
        }
    }
}
