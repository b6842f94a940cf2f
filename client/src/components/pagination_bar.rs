//! Previous/next controls for the dashboard list.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;
use linkdeck::pagination::PaginationControls;

/// "Page X of Y" label.
pub fn page_label(controls: &PaginationControls) -> String {
    format!("Page {} of {}", controls.current, controls.total_pages)
}

#[component]
pub fn PaginationBar(controls: PaginationControls, on_prev: Callback<()>, on_next: Callback<()>) -> impl IntoView {
    view! {
        <nav class="pagination-bar" aria-label="Pages">
            <button
                class="btn pagination-bar__prev"
                class:disabled=controls.prev_disabled
                disabled=controls.prev_disabled
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination-bar__label">{page_label(&controls)}</span>
            <button
                class="btn pagination-bar__next"
                class:disabled=controls.next_disabled
                disabled=controls.next_disabled
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </nav>
    }
}
