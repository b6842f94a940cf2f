//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page keeps one core view-model in a signal, runs its network calls in
//! `spawn_local` tasks and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
