//! Explicitly constructed collaborators shared by every page.

use std::rc::Rc;

use crate::api::{HttpApi, ShortenerApi};
use crate::session::{AuthView, SessionManager};
use crate::store::SharedStore;

/// API client plus the session wrapping it. Cheap to clone.
pub struct Services<A: ?Sized> {
    pub api: Rc<A>,
    pub session: SessionManager<A>,
}

impl<A: ?Sized> Clone for Services<A> {
    fn clone(&self) -> Self {
        Self { api: Rc::clone(&self.api), session: self.session.clone() }
    }
}

impl<A: ShortenerApi + ?Sized> Services<A> {
    #[must_use]
    pub fn new(api: Rc<A>, store: SharedStore, view: Rc<dyn AuthView>) -> Self {
        let session = SessionManager::new(Rc::clone(&api), store, view);
        Self { api, session }
    }
}

impl Services<HttpApi> {
    /// Wire a reqwest client for `base_url` to `store`.
    #[must_use]
    pub fn connect(base_url: &str, store: SharedStore, view: Rc<dyn AuthView>) -> Self {
        let api = Rc::new(HttpApi::new(base_url, Rc::clone(&store)));
        Self::new(api, store, view)
    }
}
