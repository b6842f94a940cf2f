//! # linkdeck
//!
//! Client-side presentation layer for a URL-shortening service.
//!
//! ARCHITECTURE
//! ============
//! Page view-models (`pages`) drive the session manager (`session`) and the
//! REST client (`api`). The browser front end (`client/`, Leptos) and the
//! terminal binary (`cli`) both render these view-models; neither talks to
//! the network directly.
//!
//! ```text
//! page view-model ──▶ SessionManager (guard) ──▶ ShortenerApi ──▶ backend
//!        ▲                                             │
//!        └──────────────── typed reply ◀───────────────┘
//! ```

pub mod alias;
pub mod api;
pub mod clipboard;
pub mod config;
pub mod messages;
pub mod pages;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod session;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpApi, ShortenerApi};
pub use services::Services;
pub use session::{AuthState, SessionManager};
