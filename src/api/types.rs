//! Wire types for the shortener REST API.
//!
//! Replies are decoded leniently: every field the client reads has a default,
//! so a reply with missing fields still decodes and simply reports "not OK".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Status value carried by every successful reply.
pub const STATUS_OK: &str = "OK";

const STATUS_ERROR: &str = "Error";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a readable response.
    #[error("API request failed: {0}")]
    Request(String),

    /// The response body was not the JSON shape expected.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Username/password pair, used verbatim as Basic-auth material.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `POST /api/urls`. An empty alias is left out so the server picks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ShortenRequest {
    #[must_use]
    pub fn new(url: impl Into<String>, alias: Option<&str>) -> Self {
        let alias = alias.map(str::trim).filter(|a| !a.is_empty()).map(str::to_owned);
        Self { url: url.into(), alias }
    }
}

// =============================================================================
// REPLIES
// =============================================================================

/// Generic `{status, error?}` reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusReply {
    #[must_use]
    pub fn ok() -> Self {
        Self { status: STATUS_OK.to_owned(), error: None }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: STATUS_ERROR.to_owned(), error: Some(message.into()) }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Reply to a create-link request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenReply {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortenReply {
    #[must_use]
    pub fn created(alias: impl Into<String>) -> Self {
        Self { status: STATUS_OK.to_owned(), alias: Some(alias.into()), error: None }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Reply to `GET /api/urls/check/{alias}`. A missing `exists` reads as unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCheck {
    #[serde(default)]
    pub exists: bool,
}

/// One link owned by the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub url: String,
    pub alias: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl ShortLink {
    /// Creation date as `dd.mm.yyyy` in the timestamp's own offset, `-` when unknown.
    #[must_use]
    pub fn created_display(&self) -> String {
        self.created_at
            .map_or_else(|| "-".to_owned(), |at| at.format("%d.%m.%Y").to_string())
    }
}

/// One page of the user's links plus the server-reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<ShortLink>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub status: String,
}

/// Server build information from `GET /api/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub date: String,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok()))
}

/// Click count arrives as a number or a numeric string; anything else is zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> de::Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a click count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            Ok(if v.is_finite() && v > 0.0 { v as u64 } else { 0 })
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            Ok(v.trim().parse().unwrap_or(0))
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<u64, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(0)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<u64, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
