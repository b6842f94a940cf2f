//! Landing-page view-model: the create-link form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The alias field is checked on every edit: empty clears the status, a bad
//! character set is rejected locally, anything else is probed remotely. Each
//! probe carries a sequence number so a slow reply for an older value never
//! overwrites the status of the current one. Focusing an empty alias field
//! fills it with a generated suggestion. Submitting requires a stored session.

#[cfg(test)]
#[path = "shorten_test.rs"]
mod shorten_test;

use rand::Rng;

use crate::alias::{AliasGenerator, GeneratedAlias, is_valid_alias};
use crate::api::{AliasCheck, ApiError, ShortenReply, ShortenRequest, ShortenerApi, short_url};
use crate::clipboard::Clipboard;
use crate::config::{DEFAULT_ALIAS_ATTEMPTS, DEFAULT_ALIAS_LENGTH};
use crate::messages;
use crate::session::SessionManager;

use super::feedback::{Toast, Tone, copy_with_feedback};

/// Feedback line under the alias field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AliasStatus {
    Idle,
    Invalid,
    Taken,
    Available,
    CheckFailed,
    Generating,
    Generated,
    /// Generated but never confirmed unused.
    Unverified,
}

impl AliasStatus {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Invalid => Some(messages::ALIAS_INVALID),
            Self::Taken => Some(messages::ALIAS_TAKEN),
            Self::Available => Some(messages::ALIAS_AVAILABLE),
            Self::CheckFailed => Some(messages::ALIAS_CHECK_FAILED),
            Self::Generating => Some(messages::ALIAS_GENERATING),
            Self::Generated => Some(messages::ALIAS_GENERATED),
            Self::Unverified => Some(messages::ALIAS_UNVERIFIED),
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Invalid | Self::Taken => Tone::Danger,
            Self::Available | Self::Generated => Tone::Success,
            Self::CheckFailed | Self::Unverified => Tone::Warning,
            Self::Idle | Self::Generating => Tone::Info,
        }
    }
}

/// Result area above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    LoginRequired,
    UrlRequired,
    /// `short_url` is `None` when the server picked the alias and did not echo it.
    Created { short_url: Option<String> },
    CreateFailed,
    NetworkError,
}

impl Banner {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::LoginRequired => messages::LOGIN_REQUIRED,
            Self::UrlRequired => messages::URL_REQUIRED,
            Self::Created { .. } => messages::LINK_CREATED,
            Self::CreateFailed => messages::CREATE_FAILED,
            Self::NetworkError => messages::NETWORK_ERROR,
        }
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            Self::LoginRequired | Self::UrlRequired => Tone::Warning,
            Self::Created { .. } => Tone::Success,
            Self::CreateFailed | Self::NetworkError => Tone::Danger,
        }
    }
}

/// A remote alias check to run; pass `seq` back to [`ShortenForm::finish_alias_check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasProbe {
    pub seq: u64,
    pub alias: String,
}

#[derive(Clone, Debug)]
pub struct ShortenForm {
    base_url: String,
    url: String,
    alias: String,
    alias_status: AliasStatus,
    alias_seq: u64,
    generating: bool,
    submitting: bool,
    banner: Option<Banner>,
    toast: Option<Toast>,
}

impl ShortenForm {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            url: String::new(),
            alias: String::new(),
            alias_status: AliasStatus::Idle,
            alias_seq: 0,
            generating: false,
            submitting: false,
            banner: None,
            toast: None,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn alias_status(&self) -> AliasStatus {
        self.alias_status
    }

    /// Alias field is disabled while a suggestion is generated.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn set_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Short URL of the last created link, if shown.
    #[must_use]
    pub fn created_url(&self) -> Option<&str> {
        match &self.banner {
            Some(Banner::Created { short_url }) => short_url.as_deref(),
            _ => None,
        }
    }

    pub fn set_url(&mut self, value: &str) {
        self.url = value.to_owned();
    }

    // =========================================================================
    // ALIAS CHECK
    // =========================================================================

    /// Record an edit of the alias field. Returns the probe to run remotely,
    /// or `None` when the value is empty or rejected locally.
    pub fn begin_alias_input(&mut self, value: &str) -> Option<AliasProbe> {
        self.alias = value.to_owned();
        self.alias_seq += 1;
        let alias = value.trim();
        if alias.is_empty() {
            self.alias_status = AliasStatus::Idle;
            return None;
        }
        if !is_valid_alias(alias) {
            self.alias_status = AliasStatus::Invalid;
            return None;
        }
        Some(AliasProbe { seq: self.alias_seq, alias: alias.to_owned() })
    }

    /// Apply a probe result unless a newer edit superseded it.
    pub fn finish_alias_check(&mut self, seq: u64, result: Result<AliasCheck, ApiError>) {
        if seq != self.alias_seq {
            tracing::debug!(seq, current = self.alias_seq, "dropping stale alias check");
            return;
        }
        self.alias_status = match result {
            Ok(check) if check.exists => AliasStatus::Taken,
            Ok(_) => AliasStatus::Available,
            Err(e) => {
                tracing::warn!(error = %e, "alias check failed");
                AliasStatus::CheckFailed
            }
        };
    }

    pub async fn alias_input<A: ShortenerApi + ?Sized>(&mut self, value: &str, api: &A) {
        if let Some(probe) = self.begin_alias_input(value) {
            let result = api.check_alias(&probe.alias).await;
            self.finish_alias_check(probe.seq, result);
        }
    }

    // =========================================================================
    // ALIAS SUGGESTION
    // =========================================================================

    /// Start generating when the alias field is empty. Pending checks are
    /// invalidated. Returns the sequence number to pass back to
    /// [`Self::finish_generate`].
    pub fn begin_generate(&mut self) -> Option<u64> {
        if self.generating || !self.alias.trim().is_empty() {
            return None;
        }
        self.generating = true;
        self.alias_seq += 1;
        self.alias_status = AliasStatus::Generating;
        Some(self.alias_seq)
    }

    /// Fill in the suggestion unless the form moved on (reset after a submit).
    pub fn finish_generate(&mut self, seq: u64, generated: GeneratedAlias) {
        self.generating = false;
        if seq != self.alias_seq {
            tracing::debug!(seq, current = self.alias_seq, "dropping stale alias suggestion");
            return;
        }
        self.alias_status =
            if generated.verified { AliasStatus::Generated } else { AliasStatus::Unverified };
        self.alias = generated.value;
    }

    pub async fn alias_focus<A: ShortenerApi + ?Sized, R: Rng>(
        &mut self,
        api: &A,
        generator: &mut AliasGenerator<R>,
    ) {
        if let Some(seq) = self.begin_generate() {
            let generated =
                generator.generate_unique(api, DEFAULT_ALIAS_LENGTH, DEFAULT_ALIAS_ATTEMPTS).await;
            self.finish_generate(seq, generated);
        }
    }

    // =========================================================================
    // SUBMIT
    // =========================================================================

    /// Guard and build the create request. `None` means nothing is sent.
    pub fn begin_submit<A: ShortenerApi + ?Sized>(
        &mut self,
        session: &SessionManager<A>,
    ) -> Option<ShortenRequest> {
        if self.submitting {
            return None;
        }
        if !session.check_auth_status() {
            self.banner = Some(Banner::LoginRequired);
            return None;
        }
        let url = self.url.trim();
        if url.is_empty() {
            self.banner = Some(Banner::UrlRequired);
            return None;
        }
        self.submitting = true;
        self.banner = None;
        Some(ShortenRequest::new(url, Some(&self.alias)))
    }

    pub fn finish_submit(&mut self, request: &ShortenRequest, result: Result<ShortenReply, ApiError>) {
        self.submitting = false;
        self.banner = Some(match result {
            Ok(reply) if reply.is_ok() => {
                let alias = reply.alias.filter(|a| !a.is_empty()).or_else(|| request.alias.clone());
                tracing::info!(alias = ?alias, "link created");
                self.reset();
                Banner::Created { short_url: alias.map(|a| short_url(&self.base_url, &a)) }
            }
            Ok(reply) => {
                tracing::info!(error = ?reply.error, "create rejected");
                Banner::CreateFailed
            }
            Err(e) => {
                tracing::warn!(error = %e, "create request failed");
                Banner::NetworkError
            }
        });
    }

    pub async fn submit<A: ShortenerApi + ?Sized>(&mut self, session: &SessionManager<A>) {
        if let Some(request) = self.begin_submit(session) {
            let result = session.api().shorten_url(&request).await;
            self.finish_submit(&request, result);
        }
    }

    /// Clear both fields and the alias status.
    pub fn reset(&mut self) {
        self.url.clear();
        self.alias.clear();
        self.alias_seq += 1;
        self.alias_status = AliasStatus::Idle;
    }

    pub async fn copy_result<C: Clipboard + ?Sized>(&mut self, clipboard: &C) {
        if let Some(url) = self.created_url().map(str::to_owned) {
            self.toast = Some(copy_with_feedback(clipboard, &url).await);
        }
    }
}
