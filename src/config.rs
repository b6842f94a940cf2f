//! Client configuration parsed from environment variables.
//!
//! The browser build bakes its base URL in at compile time; the terminal
//! binary reads `LINKDECK_BASE_URL` / `LINKDECK_STORE` (also exposed as clap
//! flags). Parsing is split into pure helpers so tests never touch the
//! process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed dashboard page size.
pub const ITEMS_PER_PAGE: u64 = 10;

pub const DEFAULT_ALIAS_LENGTH: usize = 6;
pub const DEFAULT_ALIAS_ATTEMPTS: usize = 5;

/// Storage key holding the JSON-encoded credentials.
pub const CREDENTIALS_KEY: &str = "credentials";

const STORE_DIR: &str = ".linkdeck";
const STORE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub store_path: PathBuf,
}

impl ClientConfig {
    /// Build config from the environment.
    ///
    /// Optional:
    /// - `LINKDECK_BASE_URL`: backend origin, default `http://localhost:8080`
    /// - `LINKDECK_STORE`: key-value file, default `$HOME/.linkdeck/storage.json`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: parse_base_url(std::env::var("LINKDECK_BASE_URL").ok().as_deref()),
            store_path: parse_store_path(
                std::env::var("LINKDECK_STORE").ok().as_deref(),
                std::env::var("HOME").ok().as_deref(),
            ),
        }
    }
}

/// Base URL with surrounding whitespace and trailing slashes removed.
/// Blank input falls back to [`DEFAULT_BASE_URL`].
#[must_use]
pub fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_owned(),
        None => DEFAULT_BASE_URL.to_owned(),
    }
}

/// Explicit store path wins; otherwise `<home>/.linkdeck/storage.json`, or the
/// working directory when no home is known.
#[must_use]
pub fn parse_store_path(raw: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(path) = raw.map(str::trim).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    match home.filter(|h| !h.is_empty()) {
        Some(home) => PathBuf::from(home).join(STORE_DIR).join(STORE_FILE),
        None => PathBuf::from(STORE_DIR).join(STORE_FILE),
    }
}
