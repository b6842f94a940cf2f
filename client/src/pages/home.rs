//! Landing page with the create-link form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every alias edit may start a remote check; the view-model drops replies
//! that arrive after a newer edit. Focusing an empty alias field starts a
//! suggestion, which disables the field until it lands.

use leptos::prelude::*;
use linkdeck::ShortenerApi;
use linkdeck::alias::AliasGenerator;
use linkdeck::config::{DEFAULT_ALIAS_ATTEMPTS, DEFAULT_ALIAS_LENGTH};
use linkdeck::pages::{AliasStatus, ShortenForm, copy_with_feedback};

use crate::components::notice::{Notice, ToastView};
use crate::state::session::use_services;
use crate::util::clipboard::BrowserClipboard;
use crate::util::toast::dismiss_later;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let base_url = services.with_value(|s| s.api.base_url().to_owned());
    let form = RwSignal::new(ShortenForm::new(&base_url));

    let on_alias_input = move |ev| {
        let value = event_target_value(&ev);
        let Some(probe) = form.try_update(|f| f.begin_alias_input(&value)).flatten() else {
            return;
        };
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            let result = api.check_alias(&probe.alias).await;
            form.update(|f| f.finish_alias_check(probe.seq, result));
        });
    };

    let on_alias_focus = move |_| {
        let Some(seq) = form.try_update(ShortenForm::begin_generate).flatten() else {
            return;
        };
        let api = services.with_value(|s| s.api.clone());
        leptos::task::spawn_local(async move {
            let generated = AliasGenerator::new()
                .generate_unique(api.as_ref(), DEFAULT_ALIAS_LENGTH, DEFAULT_ALIAS_ATTEMPTS)
                .await;
            form.update(|f| f.finish_generate(seq, generated));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = services.with_value(|s| s.session.clone());
        let Some(request) = form.try_update(|f| f.begin_submit(&session)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = session.api().shorten_url(&request).await;
            form.update(|f| f.finish_submit(&request, result));
        });
    };

    let on_copy = move |_| {
        let Some(url) = form.with_untracked(|f| f.created_url().map(str::to_owned)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let toast = copy_with_feedback(&BrowserClipboard, &url).await;
            form.update(|f| f.set_toast(toast));
            dismiss_later(move || form.update(ShortenForm::dismiss_toast));
        });
    };

    let alias_hint = move || {
        let status = form.with(ShortenForm::alias_status);
        status.message().map(|message| {
            view! { <small class=format!("form-text text-{}", status.tone().class())>{message}</small> }
        })
    };

    let banner = move || {
        form.with(|f| f.banner().cloned()).map(|banner| {
            let created = form.with(|f| f.created_url().map(str::to_owned));
            view! {
                <Notice
                    tone=banner.tone()
                    message=banner.message()
                    on_close=Callback::new(move |()| form.update(ShortenForm::dismiss_banner))
                >
                    {created.map(|url| view! {
                        <div class="result">
                            <a class="result__link" href=url.clone() target="_blank">{url.clone()}</a>
                            <button class="btn btn-outline-primary" on:click=on_copy>"Copy"</button>
                        </div>
                    })}
                </Notice>
            }
        })
    };

    view! {
        <section class="shorten-page">
            <h1>"Shorten a link"</h1>
            {banner}
            <form class="shorten-form" on:submit=on_submit>
                <label class="form-label" for="url">"Long URL"</label>
                <input
                    id="url"
                    class="form-control"
                    type="url"
                    placeholder="https://example.com/a/long/path"
                    prop:value=move || form.with(|f| f.url().to_owned())
                    on:input=move |ev| form.update(|f| f.set_url(&event_target_value(&ev)))
                />
                <label class="form-label" for="alias">"Alias (optional)"</label>
                <input
                    id="alias"
                    class="form-control"
                    type="text"
                    placeholder="my-link"
                    prop:value=move || form.with(|f| f.alias().to_owned())
                    class:is-invalid=move || {
                        matches!(form.with(ShortenForm::alias_status), AliasStatus::Invalid | AliasStatus::Taken)
                    }
                    disabled=move || form.with(ShortenForm::is_generating)
                    on:input=on_alias_input
                    on:focus=on_alias_focus
                />
                {alias_hint}
                <button class="btn btn-primary" type="submit" disabled=move || form.with(ShortenForm::is_submitting)>
                    {move || if form.with(ShortenForm::is_submitting) { "Shortening..." } else { "Shorten" }}
                </button>
            </form>
            <ToastView toast=Signal::derive(move || form.with(|f| f.toast().cloned()))/>
        </section>
    }
}
