//! Inline alerts and floating toasts.

use leptos::prelude::*;
use linkdeck::pages::{Toast, Tone};

/// Dismissible inline alert.
#[component]
pub fn Notice(
    tone: Tone,
    #[prop(into)] message: String,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", tone.class()) role="alert">
            <span class="alert__message">{message}</span>
            {children.map(|c| c())}
            {on_close.map(|cb| view! {
                <button class="btn-close" aria-label="Close" on:click=move |_| cb.run(())></button>
            })}
        </div>
    }
}

/// Fixed-position toast; the page clears it after the toast duration.
#[component]
pub fn ToastView(toast: Signal<Option<Toast>>) -> impl IntoView {
    move || {
        toast.get().map(|t| {
            view! {
                <div class=format!("toast alert alert-{}", t.tone.class()) role="status">
                    {t.message}
                </div>
            }
        })
    }
}
