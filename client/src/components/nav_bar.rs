//! Top navigation with auth-dependent links.
//!
//! Anonymous visitors see the login link; logged-in users see the dashboard
//! link, their name and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use linkdeck::session::AuthState;

use crate::state::session::use_services;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = use_services();
    let navigate = use_navigate();

    let username = move || {
        auth.track();
        services.with_value(|s| s.session.current_user()).unwrap_or_default()
    };

    let on_logout = move |_| {
        let route = services.with_value(|s| s.session.logout());
        navigate(route.path(), NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"linkdeck"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| view! { <a class="navbar__link unauth-only" href="/login">"Log in"</a> }
            >
                <a class="navbar__link auth-only" href="/dashboard">"My links"</a>
                <span class="navbar__user auth-only">{username}</span>
                <button class="btn navbar__logout auth-only" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
