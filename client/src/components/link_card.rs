//! One row of the dashboard list.

use leptos::prelude::*;
use linkdeck::pages::LinkCard;

#[component]
pub fn LinkCardView(card: LinkCard, on_copy: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let LinkCard { index, target, alias, short_url, created, clicks } = card;
    let copy_url = short_url.clone();

    view! {
        <div class="card link-card">
            <div class="link-card__main">
                <span class="badge link-card__index">{index}</span>
                <a class="link-card__target" href=target.clone() target="_blank">{target.clone()}</a>
                <p class="link-card__short">
                    "Short link: "
                    <a href=short_url.clone() target="_blank">{short_url.clone()}</a>
                </p>
                <small class="link-card__meta">
                    {format!("Created: {created} | Clicks: {clicks}")}
                </small>
            </div>
            <div class="link-card__actions">
                <button class="btn btn-outline-primary" title="Copy link" on:click=move |_| on_copy.run(copy_url.clone())>
                    "Copy"
                </button>
                <button class="btn btn-outline-danger" title="Delete link" on:click=move |_| on_delete.run(alias.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
