//! REST client for the shortener backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every network call the front end makes goes through [`ShortenerApi`].
//! [`HttpApi`] is the reqwest implementation; tests substitute a scripted
//! mock. Replies are returned as parsed JSON: the client never interprets
//! HTTP status codes, and translating failures into user messages is left to
//! the page view-models.

pub mod http;
pub mod types;

pub use http::HttpApi;
pub use types::{
    AliasCheck, ApiError, Credentials, STATUS_OK, ServerInfo, ShortLink, ShortenReply,
    ShortenRequest, StatusReply, UrlPage,
};

/// Operations exposed by the shortener backend.
///
/// Single-threaded: futures are not required to be `Send`, so the same trait
/// serves the browser (fetch) and the terminal (tokio current-thread).
#[async_trait::async_trait(?Send)]
pub trait ShortenerApi {
    /// Origin every short URL is built from, without a trailing slash.
    fn base_url(&self) -> &str;

    async fn health_check(&self) -> Result<StatusReply, ApiError>;

    async fn info(&self) -> Result<ServerInfo, ApiError>;

    async fn register(&self, credentials: &Credentials) -> Result<StatusReply, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<StatusReply, ApiError>;

    /// Create a short link. Authenticated.
    async fn shorten_url(&self, request: &ShortenRequest) -> Result<ShortenReply, ApiError>;

    async fn check_alias(&self, alias: &str) -> Result<AliasCheck, ApiError>;

    /// One page of the caller's links. Authenticated.
    async fn get_user_urls(&self, limit: u64, offset: u64) -> Result<UrlPage, ApiError>;

    /// Authenticated.
    async fn delete_url(&self, alias: &str) -> Result<StatusReply, ApiError>;
}

/// Public short URL for `alias`.
#[must_use]
pub fn short_url(base_url: &str, alias: &str) -> String {
    format!("{}/{alias}", base_url.trim_end_matches('/'))
}
