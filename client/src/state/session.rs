//! Session wiring for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`Services`] at mount and provides it through context as a
//! local stored value (it holds `Rc`s). The auth signal is the typed
//! replacement for toggling `.auth-only` / `.unauth-only` elements: the
//! session pushes every recomputed state into it and the nav bar reacts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;
use linkdeck::config::{DEFAULT_BASE_URL, parse_base_url};
use linkdeck::session::{AuthState, AuthView};
use linkdeck::{HttpApi, Services};

/// Context handle for the app-wide collaborators.
pub type ServicesHandle = StoredValue<Services<HttpApi>, LocalStorage>;

/// Auth binding that writes into a signal.
#[derive(Clone, Copy)]
pub struct SignalAuthView {
    pub state: RwSignal<AuthState>,
}

impl AuthView for SignalAuthView {
    /// Writes only when the state changes.
    fn show(&self, state: AuthState) {
        if self.state.get_untracked() != state {
            self.state.set(state);
        }
    }
}

/// Backend origin baked in at build time via `LINKDECK_API_BASE`.
pub fn api_base_url() -> String {
    resolve_base_url(option_env!("LINKDECK_API_BASE"))
}

fn resolve_base_url(raw: Option<&str>) -> String {
    let url = parse_base_url(raw);
    if url.is_empty() { DEFAULT_BASE_URL.to_owned() } else { url }
}

/// Construct the services and sync `auth` with the stored credentials.
pub fn build_services(auth: RwSignal<AuthState>) -> Services<HttpApi> {
    let view: Rc<dyn AuthView> = Rc::new(SignalAuthView { state: auth });
    let services = Services::connect(&api_base_url(), crate::net::storage::shared_store(), view);
    services.session.check_auth_status();
    services
}

/// Context services handle. Panics outside `App`.
pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}
