//! reqwest implementation of [`ShortenerApi`].
//!
//! Thin HTTP wrapper: one request per call, body read as text and decoded by
//! a pure helper. No timeout, no retry. Credentials are looked up in the
//! shared store on every authenticated call and never cached here.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use super::ShortenerApi;
use super::types::{
    AliasCheck, ApiError, Credentials, ServerInfo, ShortenReply, ShortenRequest, StatusReply,
    UrlPage,
};
use crate::store::{SharedStore, load_credentials};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    store: SharedStore,
}

impl HttpApi {
    /// Client for `base_url` (trailing slashes dropped) reading credentials from `store`.
    #[must_use]
    pub fn new(base_url: &str, store: SharedStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `{base}{prefix}/{alias}` with `alias` percent-encoded as one path segment.
    fn alias_url(&self, prefix: &str, alias: &str) -> Result<reqwest::Url, ApiError> {
        let mut url =
            reqwest::Url::parse(&self.url(prefix)).map_err(|e| ApiError::Request(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Request(format!("base url has no path: {}", self.base_url)))?
            .push(alias);
        Ok(url)
    }

    /// Attach `Authorization: Basic ...` when credentials are stored.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match load_credentials(self.store.as_ref()) {
            Some(credentials) => request.header(AUTHORIZATION, basic_auth_header(&credentials)),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, %path, "api request");
        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let text = response.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        parse_body(&text)
    }
}

#[async_trait::async_trait(?Send)]
impl ShortenerApi for HttpApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn health_check(&self) -> Result<StatusReply, ApiError> {
        let path = "/api/health";
        self.send("GET", path, self.http.get(self.url(path))).await
    }

    async fn info(&self) -> Result<ServerInfo, ApiError> {
        let path = "/api/info";
        self.send("GET", path, self.http.get(self.url(path))).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<StatusReply, ApiError> {
        let path = "/api/users";
        self.send("POST", path, self.http.post(self.url(path)).json(credentials)).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<StatusReply, ApiError> {
        let path = "/api/users/login";
        self.send("POST", path, self.http.post(self.url(path)).json(credentials)).await
    }

    async fn shorten_url(&self, request: &ShortenRequest) -> Result<ShortenReply, ApiError> {
        let path = "/api/urls";
        let builder = self.authorize(self.http.post(self.url(path)).json(request));
        self.send("POST", path, builder).await
    }

    async fn check_alias(&self, alias: &str) -> Result<AliasCheck, ApiError> {
        let url = self.alias_url("/api/urls/check", alias)?;
        let builder = self.http.get(url.clone());
        self.send("GET", url.path(), builder).await
    }

    async fn get_user_urls(&self, limit: u64, offset: u64) -> Result<UrlPage, ApiError> {
        let path = list_path(limit, offset);
        let builder = self.authorize(self.http.get(self.url(&path)));
        self.send("GET", &path, builder).await
    }

    async fn delete_url(&self, alias: &str) -> Result<StatusReply, ApiError> {
        let url = self.alias_url("/api/urls", alias)?;
        let builder = self.authorize(self.http.delete(url.clone()));
        self.send("DELETE", url.path(), builder).await
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// `Basic base64(username:password)`.
#[must_use]
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

fn list_path(limit: u64, offset: u64) -> String {
    format!("/api/urls?limit={limit}&offset={offset}")
}

fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
