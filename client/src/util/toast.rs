//! Toast expiry.

use linkdeck::pages::TOAST_DURATION;

/// Run `dismiss` once the toast duration has elapsed.
pub fn dismiss_later(dismiss: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        dismiss();
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (dismiss, TOAST_DURATION);
    }
}
