use super::*;
use crate::api::Credentials;
use crate::session::NoopAuthView;
use crate::store::{MemoryStore, SharedStore, save_credentials};
use crate::testing::{BASE, Call, FakeClipboard, MockApi, network_down};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::rc::Rc;

fn session(api: &Rc<MockApi>, logged_in: bool) -> SessionManager<MockApi> {
    let store: SharedStore = MemoryStore::shared();
    if logged_in {
        save_credentials(store.as_ref(), &Credentials::new("ann", "pw")).unwrap();
    }
    SessionManager::new(Rc::clone(api), store, Rc::new(NoopAuthView))
}

#[tokio::test]
async fn empty_alias_clears_status_without_request() {
    let api = MockApi::new();
    let mut form = ShortenForm::new(BASE);
    form.alias_input("   ", &api).await;
    assert_eq!(form.alias_status(), AliasStatus::Idle);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn invalid_alias_is_rejected_locally() {
    let api = MockApi::new();
    let mut form = ShortenForm::new(BASE);
    form.alias_input("my link", &api).await;
    assert_eq!(form.alias_status(), AliasStatus::Invalid);
    assert_eq!(form.alias_status().message(), Some(messages::ALIAS_INVALID));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn valid_alias_is_checked_remotely() {
    let api = MockApi::new();
    api.take_alias("taken");
    let mut form = ShortenForm::new(BASE);

    form.alias_input(" taken ", &api).await;
    assert_eq!(form.alias_status(), AliasStatus::Taken);

    form.alias_input("free_1", &api).await;
    assert_eq!(form.alias_status(), AliasStatus::Available);

    assert_eq!(api.calls(), vec![Call::CheckAlias("taken".into()), Call::CheckAlias("free_1".into())]);
}

#[tokio::test]
async fn check_failure_shows_warning() {
    let api = MockApi::new();
    api.checks.borrow_mut().push_back(Err(network_down()));
    let mut form = ShortenForm::new(BASE);
    form.alias_input("abc", &api).await;
    assert_eq!(form.alias_status(), AliasStatus::CheckFailed);
    assert_eq!(form.alias_status().tone(), Tone::Warning);
}

#[test]
fn stale_check_result_is_dropped() {
    let mut form = ShortenForm::new(BASE);
    let first = form.begin_alias_input("abc").unwrap();
    let second = form.begin_alias_input("abcd").unwrap();

    form.finish_alias_check(second.seq, Ok(AliasCheck { exists: false }));
    form.finish_alias_check(first.seq, Ok(AliasCheck { exists: true }));
    assert_eq!(form.alias_status(), AliasStatus::Available);
}

#[tokio::test]
async fn focus_on_empty_alias_generates_once() {
    let api = MockApi::new();
    let mut generator = AliasGenerator::with_rng(StdRng::seed_from_u64(1));
    let mut form = ShortenForm::new(BASE);

    form.alias_focus(&api, &mut generator).await;
    assert_eq!(form.alias_status(), AliasStatus::Generated);
    assert_eq!(form.alias().len(), DEFAULT_ALIAS_LENGTH);
    assert!(!form.is_generating());

    form.alias_focus(&api, &mut generator).await;
    assert_eq!(api.calls().len(), 1);
}

#[tokio::test]
async fn suggestion_arriving_after_submit_is_dropped() {
    let api = Rc::new(MockApi::new());
    let mut form = ShortenForm::new(BASE);
    form.set_url("https://example.com");

    let seq = form.begin_generate().unwrap();
    assert!(form.is_generating());
    form.submit(&session(&api, true)).await;
    assert!(matches!(form.banner(), Some(Banner::Created { .. })));

    form.finish_generate(seq, GeneratedAlias { value: "late01".into(), verified: true });
    assert_eq!(form.alias(), "");
    assert_eq!(form.alias_status(), AliasStatus::Idle);
    assert!(!form.is_generating());
}

#[tokio::test]
async fn focus_with_all_attempts_taken_is_unverified() {
    let api = MockApi::new();
    api.checks
        .borrow_mut()
        .extend((0..DEFAULT_ALIAS_ATTEMPTS).map(|_| Ok(AliasCheck { exists: true })));
    let mut form = ShortenForm::new(BASE);

    form.alias_focus(&api, &mut AliasGenerator::new()).await;
    assert_eq!(form.alias_status(), AliasStatus::Unverified);
    assert_eq!(form.alias().len(), DEFAULT_ALIAS_LENGTH + 2);
}

#[tokio::test]
async fn anonymous_submit_never_calls_create() {
    let api = Rc::new(MockApi::new());
    let mut form = ShortenForm::new(BASE);
    form.set_url("https://example.com");

    form.submit(&session(&api, false)).await;
    assert_eq!(form.banner(), Some(&Banner::LoginRequired));
    assert_eq!(api.count_calls(|c| matches!(c, Call::Shorten(_))), 0);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn submit_creates_link_and_resets_form() {
    let api = Rc::new(MockApi::new());
    let mut form = ShortenForm::new(BASE);
    form.set_url(" https://example.com ");
    form.alias_input("docs", api.as_ref()).await;

    form.submit(&session(&api, true)).await;

    assert_eq!(
        api.calls().last(),
        Some(&Call::Shorten(ShortenRequest::new("https://example.com", Some("docs"))))
    );
    assert_eq!(form.banner(), Some(&Banner::Created { short_url: Some("https://sho.rt/docs".into()) }));
    assert_eq!(form.url(), "");
    assert_eq!(form.alias(), "");
    assert_eq!(form.alias_status(), AliasStatus::Idle);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn submit_without_alias_uses_server_alias() {
    let api = Rc::new(MockApi::new());
    let mut form = ShortenForm::new(BASE);
    form.set_url("https://example.com");

    form.submit(&session(&api, true)).await;
    assert_eq!(form.created_url(), Some("https://sho.rt/gen1"));
}

#[tokio::test]
async fn submit_rejected_keeps_fields() {
    let api = Rc::new(MockApi::new());
    api.shortens.borrow_mut().push_back(Ok(ShortenReply {
        status: "Error".into(),
        alias: None,
        error: Some("bad url".into()),
    }));
    let mut form = ShortenForm::new(BASE);
    form.set_url("nope");

    form.submit(&session(&api, true)).await;
    assert_eq!(form.banner(), Some(&Banner::CreateFailed));
    assert_eq!(form.url(), "nope");
}

#[tokio::test]
async fn submit_transport_failure_is_network_error() {
    let api = Rc::new(MockApi::new());
    api.shortens.borrow_mut().push_back(Err(network_down()));
    let mut form = ShortenForm::new(BASE);
    form.set_url("https://example.com");

    form.submit(&session(&api, true)).await;
    assert_eq!(form.banner(), Some(&Banner::NetworkError));
    assert_eq!(form.banner().map(Banner::message), Some(messages::NETWORK_ERROR));
}

#[tokio::test]
async fn blank_url_is_not_sent() {
    let api = Rc::new(MockApi::new());
    let mut form = ShortenForm::new(BASE);
    form.submit(&session(&api, true)).await;
    assert_eq!(form.banner(), Some(&Banner::UrlRequired));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn copy_result_copies_created_url() {
    let api = Rc::new(MockApi::new());
    let clipboard = FakeClipboard::default();
    let mut form = ShortenForm::new(BASE);

    form.copy_result(&clipboard).await;
    assert_eq!(form.toast(), None);

    form.set_url("https://example.com");
    form.alias_input("x", api.as_ref()).await;
    form.submit(&session(&api, true)).await;
    form.copy_result(&clipboard).await;

    assert_eq!(*clipboard.written.borrow(), vec!["https://sho.rt/x".to_owned()]);
    assert_eq!(form.toast().map(|t| t.tone), Some(Tone::Success));
}
