//! Login/register form view-model.
//!
//! One form with two modes. Registration logs the new account straight in, so
//! both modes end on the dashboard when they succeed.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::api::ShortenerApi;
use crate::messages;
use crate::routes::Route;
use crate::session::{AuthError, SessionManager};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Snapshot of the fields for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthAttempt {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
}

impl AuthAttempt {
    /// # Errors
    ///
    /// Whatever the session reports for this mode.
    pub async fn run<A: ShortenerApi + ?Sized>(
        &self,
        session: &SessionManager<A>,
    ) -> Result<(), AuthError> {
        match self.mode {
            AuthMode::Login => session.login(&self.username, &self.password).await,
            AuthMode::Register => session.register(&self.username, &self.password).await,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    mode: AuthMode,
    username: String,
    password: String,
    busy: bool,
    error: Option<String>,
}

impl AuthForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Submit button disabled while a request is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_username(&mut self, value: &str) {
        self.username = value.to_owned();
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_owned();
    }

    pub fn show_register(&mut self) {
        self.switch(AuthMode::Register);
    }

    pub fn show_login(&mut self) {
        self.switch(AuthMode::Login);
    }

    fn switch(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
    }

    pub fn begin_submit(&mut self) -> Option<AuthAttempt> {
        if self.busy {
            return None;
        }
        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some(messages::FIELDS_REQUIRED.to_owned());
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(AuthAttempt {
            mode: self.mode,
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Clear `busy`; on success return where to navigate.
    pub fn finish_submit(&mut self, result: Result<(), AuthError>) -> Option<Route> {
        self.busy = false;
        match result {
            Ok(()) => {
                self.password.clear();
                Some(Route::Dashboard)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub async fn submit<A: ShortenerApi + ?Sized>(
        &mut self,
        session: &SessionManager<A>,
    ) -> Option<Route> {
        let attempt = self.begin_submit()?;
        let result = attempt.run(session).await;
        self.finish_submit(result)
    }
}
