//! Dashboard view-model: the logged-in user's links, one page at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created per page load. Guards on the session (anonymous users are sent to
//! the login route before anything is fetched), then lists links through the
//! pagination cursor it owns. Delete goes through an explicit confirmation
//! step; copy reports through a transient toast.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::api::{ApiError, ShortLink, ShortenerApi, StatusReply, UrlPage, short_url};
use crate::clipboard::Clipboard;
use crate::config::ITEMS_PER_PAGE;
use crate::messages;
use crate::pagination::{Pagination, PaginationControls};
use crate::routes::Route;
use crate::session::SessionManager;

use super::feedback::{Toast, copy_with_feedback};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// Fetch succeeded with no links on this page.
    Empty,
    Failed(String),
}

/// Limit/offset for the next list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub limit: u64,
    pub offset: u64,
}

/// One rendered row of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkCard {
    /// 1-based position across all pages.
    pub index: u64,
    pub target: String,
    pub alias: String,
    pub short_url: String,
    /// `dd.mm.yyyy` or `-`.
    pub created: String,
    pub clicks: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: u64,
    pub shown: usize,
}

#[derive(Clone, Debug)]
pub struct DashboardPage {
    base_url: String,
    username: Option<String>,
    pagination: Pagination,
    links: Vec<ShortLink>,
    state: LoadState,
    pending_delete: Option<String>,
    deleting: bool,
    alert: Option<String>,
    toast: Option<Toast>,
}

impl DashboardPage {
    /// Empty page building short URLs from `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            username: None,
            pagination: Pagination::new(ITEMS_PER_PAGE),
            links: Vec::new(),
            state: LoadState::Idle,
            pending_delete: None,
            deleting: false,
            alert: None,
            toast: None,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn current_page(&self) -> u64 {
        self.pagination.current_page()
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

    #[must_use]
    pub fn cards(&self) -> Vec<LinkCard> {
        self.links
            .iter()
            .enumerate()
            .map(|(i, link)| LinkCard {
                index: self.pagination.display_index(i),
                target: link.url.clone(),
                alias: link.alias.clone(),
                short_url: short_url(&self.base_url, &link.alias),
                created: link.created_display(),
                clicks: link.count,
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats { total: self.pagination.total_items(), shown: self.links.len() }
    }

    /// Controls to render; `None` while loading or when one page suffices.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationControls> {
        if self.state == LoadState::Loaded { self.pagination.controls() } else { None }
    }

    // =========================================================================
    // GUARD & LOAD
    // =========================================================================

    /// Session guard. Returns the redirect for anonymous users; otherwise
    /// records the username and returns `None`.
    pub fn guard<A: ShortenerApi + ?Sized>(&mut self, session: &SessionManager<A>) -> Option<Route> {
        if !session.check_auth_status() {
            return Some(Route::Login);
        }
        self.username = session.current_user();
        None
    }

    /// Guard, then fetch the first page.
    pub async fn open<A: ShortenerApi + ?Sized>(
        &mut self,
        session: &SessionManager<A>,
    ) -> Option<Route> {
        if let Some(redirect) = self.guard(session) {
            return Some(redirect);
        }
        self.load(session.api()).await;
        None
    }

    pub fn begin_load(&mut self) -> ListRequest {
        self.state = LoadState::Loading;
        ListRequest { limit: self.pagination.items_per_page(), offset: self.pagination.offset() }
    }

    pub fn finish_load(&mut self, result: Result<UrlPage, ApiError>) {
        match result {
            Ok(page) => {
                self.pagination.set_total(page.total);
                self.links = page.urls;
                self.state =
                    if self.links.is_empty() { LoadState::Empty } else { LoadState::Loaded };
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load links");
                self.links.clear();
                self.state = LoadState::Failed(messages::LOAD_FAILED.to_owned());
            }
        }
    }

    pub async fn load<A: ShortenerApi + ?Sized>(&mut self, api: &A) {
        let request = self.begin_load();
        let result = api.get_user_urls(request.limit, request.offset).await;
        self.finish_load(result);
    }

    /// Move to page `page` (clamped to 1) without fetching.
    pub fn go_to(&mut self, page: u64) {
        self.pagination.go_to(page);
    }

    /// Advance the cursor; `false` on the last page (nothing to reload).
    pub fn step_next(&mut self) -> bool {
        self.pagination.next()
    }

    /// Step back; `false` on page 1.
    pub fn step_prev(&mut self) -> bool {
        self.pagination.prev()
    }

    pub async fn next_page<A: ShortenerApi + ?Sized>(&mut self, api: &A) {
        if self.step_next() {
            self.load(api).await;
        }
    }

    pub async fn prev_page<A: ShortenerApi + ?Sized>(&mut self, api: &A) {
        if self.step_prev() {
            self.load(api).await;
        }
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    pub fn request_delete(&mut self, alias: &str) {
        self.pending_delete = Some(alias.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed alias and mark the delete in flight.
    pub fn begin_delete(&mut self) -> Option<String> {
        let alias = self.pending_delete.take()?;
        self.deleting = true;
        self.alert = None;
        Some(alias)
    }

    /// Apply the delete outcome. Returns `true` when the list must be reloaded.
    pub fn finish_delete(&mut self, alias: &str, result: Result<StatusReply, ApiError>) -> bool {
        self.deleting = false;
        match result {
            Ok(reply) if reply.is_ok() => {
                tracing::info!(%alias, "link deleted");
                self.pagination.after_delete(self.links.len());
                true
            }
            Ok(reply) => {
                tracing::info!(%alias, error = ?reply.error, "delete rejected");
                self.alert = Some(messages::DELETE_FAILED.to_owned());
                false
            }
            Err(e) => {
                tracing::warn!(%alias, error = %e, "delete request failed");
                self.alert = Some(messages::NETWORK_ERROR.to_owned());
                false
            }
        }
    }

    /// Delete the alias awaiting confirmation, then reload on success.
    pub async fn confirm_delete<A: ShortenerApi + ?Sized>(&mut self, api: &A) {
        let Some(alias) = self.begin_delete() else {
            return;
        };
        let result = api.delete_url(&alias).await;
        if self.finish_delete(&alias, result) {
            self.load(api).await;
        }
    }

    // =========================================================================
    // COPY
    // =========================================================================

    pub async fn copy_link<C: Clipboard + ?Sized>(&mut self, url: &str, clipboard: &C) {
        self.toast = Some(copy_with_feedback(clipboard, url).await);
    }
}
