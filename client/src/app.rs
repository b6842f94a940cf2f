//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use linkdeck::session::AuthState;

use crate::components::nav_bar::NavBar;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::session::{ServicesHandle, build_services};

/// Root application component.
///
/// Builds the services once, provides them and the auth signal, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::Anonymous);
    let services: ServicesHandle = StoredValue::new_local(build_services(auth));
    provide_context(auth);
    provide_context(services);

    view! {
        <Title text="linkdeck"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
