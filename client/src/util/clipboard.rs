//! `navigator.clipboard` as a [`Clipboard`].

use linkdeck::clipboard::{Clipboard, ClipboardError};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClipboard;

#[async_trait::async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "csr")]
        {
            let window = web_sys::window()
                .ok_or_else(|| ClipboardError::Unavailable("no window".to_owned()))?;
            let Some(clipboard) = window.navigator().clipboard() else {
                return Err(ClipboardError::Unavailable("navigator.clipboard".to_owned()));
            };
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable("no browser".to_owned()))
        }
    }
}
