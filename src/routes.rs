//! Client-side navigation targets.

/// Pages a controller can redirect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the shorten form.
    Home,
    Login,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}
