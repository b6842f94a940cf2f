//! Client-held login state.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Logged in" means a credentials entry exists in the key-value store. There
//! is no token, no expiry and no server-side session check; the stored pair is
//! replayed as Basic auth on every authenticated call. Pages consult the
//! session as a guard before protected operations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use crate::api::{Credentials, ShortenerApi};
use crate::messages;
use crate::routes::Route;
use crate::store::{SharedStore, clear_credentials, has_credentials, load_credentials, save_credentials};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Visibility binding: shows auth-only elements and hides anonymous-only ones
/// for `Authenticated`, the reverse for `Anonymous`.
pub trait AuthView {
    fn show(&self, state: AuthState);
}

/// Binding for hosts without auth-dependent chrome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuthView;

impl AuthView for NoopAuthView {
    fn show(&self, _state: AuthState) {}
}

/// Errors produced by login and registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Server rejected the login.
    #[error("{}", messages::INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// Server rejected the registration.
    #[error("{}", messages::REGISTRATION_FAILED)]
    RegistrationFailed,

    /// Request failed or the reply was unreadable.
    #[error("{}", messages::NETWORK_ERROR)]
    Network,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct SessionManager<A: ?Sized> {
    api: Rc<A>,
    store: SharedStore,
    view: Rc<dyn AuthView>,
}

impl<A: ?Sized> Clone for SessionManager<A> {
    fn clone(&self) -> Self {
        Self { api: Rc::clone(&self.api), store: Rc::clone(&self.store), view: Rc::clone(&self.view) }
    }
}

impl<A: ShortenerApi + ?Sized> SessionManager<A> {
    #[must_use]
    pub fn new(api: Rc<A>, store: SharedStore, view: Rc<dyn AuthView>) -> Self {
        Self { api, store, view }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        if has_credentials(self.store.as_ref()) {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Recompute the state, push it to the view and report whether logged in.
    pub fn check_auth_status(&self) -> bool {
        let state = self.state();
        self.view.show(state);
        state.is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        load_credentials(self.store.as_ref()).map(|c| c.username)
    }

    /// Verify the pair with the server and persist it on success.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] on a non-OK reply,
    /// [`AuthError::Network`] on transport failure or when the pair cannot be stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let credentials = Credentials::new(username, password);
        let reply = self.api.login(&credentials).await.map_err(|e| {
            tracing::warn!(error = %e, "login request failed");
            AuthError::Network
        })?;
        if !reply.is_ok() {
            tracing::info!(%username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        save_credentials(self.store.as_ref(), &credentials).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist credentials");
            AuthError::Network
        })?;
        tracing::info!(%username, "logged in");
        self.check_auth_status();
        Ok(())
    }

    /// Create the account, then log in with the same pair.
    ///
    /// # Errors
    ///
    /// [`AuthError::RegistrationFailed`] on a non-OK reply, otherwise whatever
    /// the follow-up [`Self::login`] returns.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let reply = self.api.register(&Credentials::new(username, password)).await.map_err(|e| {
            tracing::warn!(error = %e, "register request failed");
            AuthError::Network
        })?;
        if !reply.is_ok() {
            tracing::info!(%username, "registration rejected");
            return Err(AuthError::RegistrationFailed);
        }
        self.login(username, password).await
    }

    /// Forget the stored pair and return the landing route.
    pub fn logout(&self) -> Route {
        if let Err(e) = clear_credentials(self.store.as_ref()) {
            tracing::warn!(error = %e, "failed to clear credentials");
        }
        tracing::info!("logged out");
        self.check_auth_status();
        Route::Home
    }
}
