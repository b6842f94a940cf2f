//! Test doubles shared by the unit tests.
//!
//! `MockApi` behaves like a tiny in-memory backend unless a reply is scripted
//! for an endpoint, in which case scripted replies are consumed first.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use crate::api::{
    AliasCheck, ApiError, Credentials, ServerInfo, ShortLink, ShortenReply, ShortenRequest,
    ShortenerApi, StatusReply, UrlPage,
};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::session::{AuthState, AuthView};

pub const BASE: &str = "https://sho.rt";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Health,
    Info,
    Register(String),
    Login(String),
    Shorten(ShortenRequest),
    CheckAlias(String),
    ListUrls { limit: u64, offset: u64 },
    Delete(String),
}

type Scripted<T> = RefCell<VecDeque<Result<T, ApiError>>>;

#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    links: RefCell<Vec<ShortLink>>,
    taken: RefCell<HashSet<String>>,
    generated: Cell<u32>,
    pub registers: Scripted<StatusReply>,
    pub logins: Scripted<StatusReply>,
    pub shortens: Scripted<ShortenReply>,
    pub checks: Scripted<AliasCheck>,
    pub lists: Scripted<UrlPage>,
    pub deletes: Scripted<StatusReply>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with `count` links aliased `l0`, `l1`, ...
    pub fn with_links(count: usize) -> Self {
        let api = Self::new();
        for i in 0..count {
            api.add_link(&format!("l{i}"), &format!("https://example.com/{i}"));
        }
        api
    }

    pub fn add_link(&self, alias: &str, url: &str) {
        self.taken.borrow_mut().insert(alias.to_owned());
        self.links.borrow_mut().push(ShortLink {
            url: url.to_owned(),
            alias: alias.to_owned(),
            created_at: chrono::DateTime::parse_from_rfc3339("2024-01-02T10:00:00Z").ok(),
            count: 3,
        });
    }

    pub fn take_alias(&self, alias: &str) {
        self.taken.borrow_mut().insert(alias.to_owned());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait::async_trait(?Send)]
impl ShortenerApi for MockApi {
    fn base_url(&self) -> &str {
        BASE
    }

    async fn health_check(&self) -> Result<StatusReply, ApiError> {
        self.record(Call::Health);
        Ok(StatusReply::ok())
    }

    async fn info(&self) -> Result<ServerInfo, ApiError> {
        self.record(Call::Info);
        Ok(ServerInfo { tag: "v1.2.0".into(), hash: "abc123".into(), date: "2024-05-01".into() })
    }

    async fn register(&self, credentials: &Credentials) -> Result<StatusReply, ApiError> {
        self.record(Call::Register(credentials.username.clone()));
        self.registers.borrow_mut().pop_front().unwrap_or_else(|| Ok(StatusReply::ok()))
    }

    async fn login(&self, credentials: &Credentials) -> Result<StatusReply, ApiError> {
        self.record(Call::Login(credentials.username.clone()));
        self.logins.borrow_mut().pop_front().unwrap_or_else(|| Ok(StatusReply::ok()))
    }

    async fn shorten_url(&self, request: &ShortenRequest) -> Result<ShortenReply, ApiError> {
        self.record(Call::Shorten(request.clone()));
        if let Some(reply) = self.shortens.borrow_mut().pop_front() {
            return reply;
        }
        let alias = request.alias.clone().unwrap_or_else(|| {
            self.generated.set(self.generated.get() + 1);
            format!("gen{}", self.generated.get())
        });
        if self.taken.borrow().contains(&alias) {
            return Ok(ShortenReply {
                status: "Error".into(),
                alias: None,
                error: Some("alias already exists".into()),
            });
        }
        self.add_link(&alias, &request.url);
        Ok(ShortenReply::created(alias))
    }

    async fn check_alias(&self, alias: &str) -> Result<AliasCheck, ApiError> {
        self.record(Call::CheckAlias(alias.to_owned()));
        if let Some(reply) = self.checks.borrow_mut().pop_front() {
            return reply;
        }
        Ok(AliasCheck { exists: self.taken.borrow().contains(alias) })
    }

    async fn get_user_urls(&self, limit: u64, offset: u64) -> Result<UrlPage, ApiError> {
        self.record(Call::ListUrls { limit, offset });
        if let Some(reply) = self.lists.borrow_mut().pop_front() {
            return reply;
        }
        let links = self.links.borrow();
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(UrlPage {
            urls: links.iter().skip(skip).take(take).cloned().collect(),
            total: links.len() as u64,
            status: "OK".into(),
        })
    }

    async fn delete_url(&self, alias: &str) -> Result<StatusReply, ApiError> {
        self.record(Call::Delete(alias.to_owned()));
        if let Some(reply) = self.deletes.borrow_mut().pop_front() {
            return reply;
        }
        let mut links = self.links.borrow_mut();
        let before = links.len();
        links.retain(|l| l.alias != alias);
        if links.len() == before {
            return Ok(StatusReply::error("not found"));
        }
        self.taken.borrow_mut().remove(alias);
        Ok(StatusReply::ok())
    }
}

pub fn network_down() -> ApiError {
    ApiError::Request("connection refused".into())
}

// =============================================================================
// VIEW / CLIPBOARD
// =============================================================================

#[derive(Default)]
pub struct RecordingAuthView {
    pub shown: RefCell<Vec<AuthState>>,
}

impl RecordingAuthView {
    pub fn last(&self) -> Option<AuthState> {
        self.shown.borrow().last().copied()
    }
}

impl AuthView for RecordingAuthView {
    fn show(&self, state: AuthState) {
        self.shown.borrow_mut().push(state);
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    pub written: RefCell<Vec<String>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn broken() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

#[async_trait::async_trait(?Send)]
impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("denied".into()));
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}
