//! Per-page view-models.
//!
//! Each page owns plain typed state plus the operations that mutate it.
//! Async operations come in two forms: a convenience `async fn` for hosts that
//! can hold `&mut self` across the request (terminal, tests), and a
//! `begin_*` / `finish_*` pair for reactive hosts that must release their
//! borrow while the request is in flight (Leptos signals).

pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod shorten;

pub use dashboard::{DashboardPage, DashboardStats, LinkCard, ListRequest, LoadState};
pub use feedback::{TOAST_DURATION, Toast, Tone, copy_with_feedback};
pub use login::{AuthAttempt, AuthForm, AuthMode};
pub use shorten::{AliasProbe, AliasStatus, Banner, ShortenForm};
