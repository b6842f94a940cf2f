//! Dashboard page listing the user's links with paging, copy and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated route. Anonymous visitors are sent to `/login`
//! before anything is fetched. Deletes go through a confirmation dialog and
//! reload the current page (or the previous one when the last row went away).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use linkdeck::ShortenerApi;
use linkdeck::pages::{DashboardPage as Dashboard, LoadState, Tone, copy_with_feedback};

use crate::components::link_card::LinkCardView;
use crate::components::notice::{Notice, ToastView};
use crate::components::pagination_bar::PaginationBar;
use crate::state::session::{ServicesHandle, use_services};
use crate::util::clipboard::BrowserClipboard;
use crate::util::toast::dismiss_later;

/// Redirects to `/login` when there is no stored session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let base_url = services.with_value(|s| s.api.base_url().to_owned());
    let page = RwSignal::new(Dashboard::new(&base_url));

    // Guards once on mount and reads no signals. Logging out while here is
    // routed by the nav bar alone.
    Effect::new(move || {
        let session = services.with_value(|s| s.session.clone());
        match page.try_update(|p| p.guard(&session)).flatten() {
            Some(route) => navigate(route.path(), NavigateOptions::default()),
            None => reload(services, page),
        }
    });

    let on_prev = Callback::new(move |()| {
        if page.try_update(Dashboard::step_prev).unwrap_or(false) {
            reload(services, page);
        }
    });
    let on_next = Callback::new(move |()| {
        if page.try_update(Dashboard::step_next).unwrap_or(false) {
            reload(services, page);
        }
    });

    let on_copy = Callback::new(move |url: String| {
        leptos::task::spawn_local(async move {
            let toast = copy_with_feedback(&BrowserClipboard, &url).await;
            page.update(|p| p.set_toast(toast));
            dismiss_later(move || page.update(Dashboard::dismiss_toast));
        });
    });
    let on_delete_request = Callback::new(move |alias: String| page.update(|p| p.request_delete(&alias)));
    let on_delete_cancel = Callback::new(move |()| page.update(Dashboard::cancel_delete));

    let header = move || {
        page.with(|p| {
            let stats = p.stats();
            format!("{}: {} links", p.username().unwrap_or_default(), stats.total)
        })
    };

    let body = move || match page.with(|p| p.state().clone()) {
        LoadState::Idle | LoadState::Loading => view! { <p class="dashboard-page__status">"Loading..."</p> }.into_any(),
        LoadState::Empty => view! {
            <p class="dashboard-page__status">{linkdeck::messages::NO_LINKS}</p>
        }
        .into_any(),
        LoadState::Failed(message) => view! { <Notice tone=Tone::Danger message=message/> }.into_any(),
        LoadState::Loaded => page
            .with(Dashboard::cards)
            .into_iter()
            .map(|card| view! { <LinkCardView card=card on_copy=on_copy on_delete=on_delete_request/> })
            .collect_view()
            .into_any(),
    };

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{header}</h1>
                <span class="dashboard-page__shown">
                    {move || format!("Showing {}", page.with(|p| p.stats().shown))}
                </span>
            </header>
            {move || page.with(|p| p.alert().map(str::to_owned)).map(|message| view! {
                <Notice
                    tone=Tone::Danger
                    message=message
                    on_close=Callback::new(move |()| page.update(Dashboard::dismiss_alert))
                />
            })}
            <div class="dashboard-page__list">{body}</div>
            {move || page.with(Dashboard::pagination).map(|controls| view! {
                <PaginationBar controls=controls on_prev=on_prev on_next=on_next/>
            })}
            <Show when=move || page.with(|p| p.pending_delete().is_some())>
                <DeleteLinkDialog page=page services=services on_cancel=on_delete_cancel/>
            </Show>
            <ToastView toast=Signal::derive(move || page.with(|p| p.toast().cloned()))/>
        </section>
    }
}

/// Fetch the page the cursor points at.
fn reload(services: ServicesHandle, page: RwSignal<Dashboard>) {
    let request = page.try_update(Dashboard::begin_load);
    let Some(request) = request else {
        return;
    };
    let api = services.with_value(|s| s.api.clone());
    leptos::task::spawn_local(async move {
        let result = api.get_user_urls(request.limit, request.offset).await;
        page.update(|p| p.finish_load(result));
    });
}

/// Confirmation dialog for deleting one link.
#[component]
fn DeleteLinkDialog(page: RwSignal<Dashboard>, services: ServicesHandle, on_cancel: Callback<()>) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(alias) = page.try_update(Dashboard::begin_delete).flatten() else {
            return;
        };
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            let result = api.delete_url(&alias).await;
            if page.try_update(|p| p.finish_delete(&alias, result)).unwrap_or(false) {
                reload(services, page);
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete link"</h2>
                <p class="dialog__danger">
                    {linkdeck::messages::DELETE_CONFIRM}
                    " "
                    <code>{move || page.with(|p| p.pending_delete().map(str::to_owned))}</code>
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || page.with(Dashboard::is_deleting)
                        on:click=move |_| submit.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
