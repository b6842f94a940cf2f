use super::*;
use crate::api::Credentials;
use crate::session::NoopAuthView;
use crate::store::{MemoryStore, SharedStore, save_credentials};
use crate::testing::{BASE, Call, FakeClipboard, MockApi, network_down};
use crate::pages::Tone;
use std::rc::Rc;

fn session(api: &Rc<MockApi>, logged_in: bool) -> SessionManager<MockApi> {
    let store: SharedStore = MemoryStore::shared();
    if logged_in {
        save_credentials(store.as_ref(), &Credentials::new("ann", "pw")).unwrap();
    }
    SessionManager::new(Rc::clone(api), store, Rc::new(NoopAuthView))
}

async fn opened(api: &Rc<MockApi>) -> DashboardPage {
    let mut page = DashboardPage::new(BASE);
    assert_eq!(page.open(&session(api, true)).await, None);
    page
}

#[tokio::test]
async fn anonymous_open_redirects_without_fetching() {
    let api = Rc::new(MockApi::with_links(3));
    let mut page = DashboardPage::new(BASE);
    assert_eq!(page.open(&session(&api, false)).await, Some(Route::Login));
    assert!(api.calls().is_empty());
    assert_eq!(page.state(), &LoadState::Idle);
}

#[tokio::test]
async fn open_loads_first_page() {
    let api = Rc::new(MockApi::with_links(25));
    let page = opened(&api).await;

    assert_eq!(page.username(), Some("ann"));
    assert_eq!(api.calls(), vec![Call::ListUrls { limit: 10, offset: 0 }]);
    assert_eq!(page.state(), &LoadState::Loaded);
    assert_eq!(page.stats(), DashboardStats { total: 25, shown: 10 });

    let controls = page.pagination().unwrap();
    assert_eq!(controls.total_pages, 3);
    assert!(controls.prev_disabled);
    assert!(!controls.next_disabled);
}

#[tokio::test]
async fn cards_render_index_short_url_and_date() {
    let api = Rc::new(MockApi::with_links(12));
    let mut page = opened(&api).await;
    page.next_page(api.as_ref()).await;

    let cards = page.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[0],
        LinkCard {
            index: 11,
            target: "https://example.com/10".into(),
            alias: "l10".into(),
            short_url: "https://sho.rt/l10".into(),
            created: "02.01.2024".into(),
            clicks: 3,
        }
    );
    assert!(page.pagination().unwrap().next_disabled);
}

#[tokio::test]
async fn navigation_stays_in_bounds() {
    let api = Rc::new(MockApi::with_links(15));
    let mut page = opened(&api).await;

    page.prev_page(api.as_ref()).await;
    page.next_page(api.as_ref()).await;
    page.next_page(api.as_ref()).await;

    assert_eq!(
        api.calls(),
        vec![Call::ListUrls { limit: 10, offset: 0 }, Call::ListUrls { limit: 10, offset: 10 }]
    );
    assert_eq!(page.current_page(), 2);
}

#[tokio::test]
async fn empty_and_failed_states() {
    let api = Rc::new(MockApi::new());
    let page = opened(&api).await;
    assert_eq!(page.state(), &LoadState::Empty);
    assert_eq!(page.pagination(), None);

    api.lists.borrow_mut().push_back(Err(network_down()));
    let mut page = DashboardPage::new(BASE);
    page.load(api.as_ref()).await;
    assert_eq!(page.state(), &LoadState::Failed(messages::LOAD_FAILED.into()));
}

#[tokio::test]
async fn deleting_last_item_on_page_two_steps_back() {
    let api = Rc::new(MockApi::with_links(11));
    let mut page = opened(&api).await;
    page.next_page(api.as_ref()).await;
    assert_eq!(page.stats().shown, 1);

    page.request_delete("l10");
    page.confirm_delete(api.as_ref()).await;

    assert_eq!(page.current_page(), 1);
    assert_eq!(api.calls().last(), Some(&Call::ListUrls { limit: 10, offset: 0 }));
    assert_eq!(page.stats(), DashboardStats { total: 10, shown: 10 });
    assert_eq!(page.pending_delete(), None);
}

#[tokio::test]
async fn cancel_delete_issues_nothing() {
    let api = Rc::new(MockApi::with_links(2));
    let mut page = opened(&api).await;

    page.request_delete("l0");
    assert_eq!(page.pending_delete(), Some("l0"));
    page.cancel_delete();
    page.confirm_delete(api.as_ref()).await;

    assert_eq!(api.count_calls(|c| matches!(c, Call::Delete(_))), 0);
}

#[tokio::test]
async fn rejected_delete_alerts_without_reload() {
    let api = Rc::new(MockApi::with_links(2));
    let mut page = opened(&api).await;
    api.deletes.borrow_mut().push_back(Ok(StatusReply::error("forbidden")));

    page.request_delete("l0");
    page.confirm_delete(api.as_ref()).await;

    assert_eq!(page.alert(), Some(messages::DELETE_FAILED));
    assert!(!page.is_deleting());
    assert_eq!(api.count_calls(|c| matches!(c, Call::ListUrls { .. })), 1);
}

#[tokio::test]
async fn delete_transport_failure_alerts_network_error() {
    let api = Rc::new(MockApi::with_links(2));
    let mut page = opened(&api).await;
    api.deletes.borrow_mut().push_back(Err(network_down()));

    page.request_delete("l1");
    page.confirm_delete(api.as_ref()).await;
    assert_eq!(page.alert(), Some(messages::NETWORK_ERROR));
}

#[tokio::test]
async fn copy_link_sets_toast() {
    let api = Rc::new(MockApi::with_links(1));
    let mut page = opened(&api).await;

    page.copy_link("https://sho.rt/l0", &FakeClipboard::default()).await;
    assert_eq!(page.toast().map(|t| t.tone), Some(Tone::Success));

    page.copy_link("https://sho.rt/l0", &FakeClipboard::broken()).await;
    assert_eq!(page.toast().map(|t| t.message.as_str()), Some(messages::COPY_FAILED));

    page.dismiss_toast();
    assert_eq!(page.toast(), None);
}
