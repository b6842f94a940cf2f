//! Login page with a register toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use linkdeck::pages::{AuthForm, AuthMode, Tone};

use crate::components::notice::Notice;
use crate::state::session::use_services;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let form = RwSignal::new(AuthForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(AuthForm::begin_submit).flatten() else {
            return;
        };
        let session = services.with_value(|s| s.session.clone());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = attempt.run(&session).await;
            if let Some(route) = form.try_update(|f| f.finish_submit(result)).flatten() {
                navigate(route.path(), NavigateOptions::default());
            }
        });
    };

    let registering = move || form.with(|f| f.mode() == AuthMode::Register);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || if registering() { "Create account" } else { "Log in" }}</h1>
                {move || form.with(|f| f.error().map(str::to_owned)).map(|message| view! {
                    <Notice tone=Tone::Danger message=message/>
                })}
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || form.with(|f| f.username().to_owned())
                        on:input=move |ev| form.update(|f| f.set_username(&event_target_value(&ev)))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete=move || if registering() { "new-password" } else { "current-password" }
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password().to_owned())
                        on:input=move |ev| form.update(|f| f.set_password(&event_target_value(&ev)))
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(AuthForm::is_busy)>
                        {move || if registering() { "Register" } else { "Log in" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <Show
                    when=registering
                    fallback=move || view! {
                        <button class="btn btn-link" on:click=move |_| form.update(AuthForm::show_register)>
                            "No account yet? Register"
                        </button>
                    }
                >
                    <button class="btn btn-link" on:click=move |_| form.update(AuthForm::show_login)>
                        "Already registered? Log in"
                    </button>
                </Show>
            </div>
        </div>
    }
}
