use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use payloads::{Collectable, requests};

use crate::client::CollectionClient;
use crate::state::{CollectionState, FetchStatus};

/// Result of a page fetch, from the caller's point of view.
///
/// There is no explicit end-of-list flag in the protocol; callers
/// infer exhaustion from `fetched < limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was fetched and merged. `fetched` is the raw batch
    /// size before de-duplication.
    Merged { fetched: usize },
    /// A fetch for the same scope and offset was already in flight;
    /// no request was issued.
    Coalesced,
    /// The fetch failed. The reason is recorded in the store's error
    /// selector; previously merged items are untouched.
    Failed,
}

/// The repository for one entity type: owns the collection state and
/// folds transport results into it.
///
/// Remote failures are converted to `Rejected` status plus an error
/// message; they are never returned as `Err` to the caller (screens
/// read [`last_error`]). A failed page fetch neither discards
/// previously merged pages nor blocks future fetches.
///
/// Shared across screens as `Rc<PagedCollection<E>>`; all mutation
/// goes through these operations, on a single-threaded event loop.
///
/// [`last_error`]: PagedCollection::last_error
pub struct PagedCollection<E: Collectable> {
    client: Rc<dyn CollectionClient<E>>,
    state: RefCell<CollectionState<E>>,
    in_flight: RefCell<HashSet<(Option<E::Scope>, i64)>>,
}

impl<E: Collectable> PagedCollection<E> {
    pub fn new(client: Rc<dyn CollectionClient<E>>) -> Self {
        Self {
            client,
            state: RefCell::new(CollectionState::new()),
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// Fetch one page and merge it by id (incoming first).
    ///
    /// A second call for a scope and offset already in flight
    /// coalesces: it returns [`PageOutcome::Coalesced`] without
    /// issuing a request. The key includes the scope, so switching
    /// user or organisation mid-fetch still dispatches the new
    /// scope's page. Fetches at different keys are not serialized;
    /// when their pages overlap, the last to resolve wins.
    pub async fn fetch_page(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> PageOutcome {
        debug_assert!(offset >= 0);
        debug_assert!(limit > 0);

        let Some(_guard) =
            InFlightGuard::acquire(&self.in_flight, (scope, offset))
        else {
            tracing::debug!(
                endpoint = E::ENDPOINT,
                offset,
                "page fetch already in flight, coalescing"
            );
            return PageOutcome::Coalesced;
        };

        self.state.borrow_mut().begin();
        tracing::debug!(endpoint = E::ENDPOINT, offset, limit, "fetching page");

        match self.client.list(scope, offset, limit).await {
            Ok(batch) => {
                let fetched = batch.len();
                let mut state = self.state.borrow_mut();
                state.merge_page(batch);
                state.fulfil();
                PageOutcome::Merged { fetched }
            }
            Err(e) => self.fail_page(offset, e),
        }
    }

    /// Fetch one page of search results and merge it.
    ///
    /// Resolves through the same merge as [`fetch_page`]: results union
    /// into whatever the store already holds. Callers switching filter
    /// context should [`clear`] first, or stale unfiltered rows remain
    /// visible. Rapid-fire search input is debounced upstream, so this
    /// path carries no in-flight guard.
    ///
    /// [`fetch_page`]: PagedCollection::fetch_page
    /// [`clear`]: PagedCollection::clear
    pub async fn search_page(
        &self,
        scope: Option<E::Scope>,
        filter: Option<&str>,
        search: &requests::Search,
        offset: i64,
        limit: i64,
    ) -> PageOutcome {
        debug_assert!(offset >= 0);
        debug_assert!(limit > 0);

        self.state.borrow_mut().begin();
        tracing::debug!(
            endpoint = E::ENDPOINT,
            offset,
            limit,
            "searching page"
        );

        match self
            .client
            .search(scope, filter, search, offset, limit)
            .await
        {
            Ok(batch) => {
                let fetched = batch.len();
                let mut state = self.state.borrow_mut();
                state.merge_page(batch);
                state.fulfil();
                PageOutcome::Merged { fetched }
            }
            Err(e) => self.fail_page(offset, e),
        }
    }

    /// Fetch a single entity and upsert it (replace in place if held,
    /// append otherwise). Returns `None` on failure.
    pub async fn fetch_one(&self, id: E::Id) -> Option<E> {
        self.state.borrow_mut().begin();

        match self.client.fetch_one(id).await {
            Ok(entity) => {
                let mut state = self.state.borrow_mut();
                state.upsert(entity.clone());
                state.fulfil();
                Some(entity)
            }
            Err(e) => {
                self.fail_item(id.to_string(), e);
                None
            }
        }
    }

    /// Submit a new entity; the returned, server-assigned record is
    /// unioned into the items. Returns `None` on failure.
    pub async fn create(&self, draft: &E::Draft) -> Option<E> {
        self.state.borrow_mut().begin();

        match self.client.create_one(draft).await {
            Ok(entity) => {
                let mut state = self.state.borrow_mut();
                state.upsert(entity.clone());
                state.fulfil();
                Some(entity)
            }
            Err(e) => {
                self.fail_item("create".to_string(), e);
                None
            }
        }
    }

    /// Submit a patch; the refreshed record replaces the held one in
    /// place. Returns `None` on failure.
    pub async fn update(&self, patch: &E::Patch) -> Option<E> {
        self.state.borrow_mut().begin();

        match self.client.update_one(patch).await {
            Ok(entity) => {
                let mut state = self.state.borrow_mut();
                state.upsert(entity.clone());
                state.fulfil();
                Some(entity)
            }
            Err(e) => {
                self.fail_item("update".to_string(), e);
                None
            }
        }
    }

    /// Delete an entity and drop it from the items. Returns whether
    /// the delete was applied.
    pub async fn delete(&self, id: E::Id) -> bool {
        self.state.borrow_mut().begin();

        match self.client.delete_one(id).await {
            Ok(()) => {
                let mut state = self.state.borrow_mut();
                state.remove(id);
                state.fulfil();
                true
            }
            Err(e) => {
                self.fail_item(id.to_string(), e);
                false
            }
        }
    }

    /// Reset items, status and error. Issue this when the filter or
    /// scope context changes, to avoid showing stale cross-scope rows.
    pub fn clear(&self) {
        self.state.borrow_mut().clear();
    }

    /// Clear the error only, leaving items intact.
    pub fn clear_error(&self) {
        self.state.borrow_mut().clear_error();
    }

    fn fail_page(
        &self,
        offset: i64,
        error: payloads::ClientError,
    ) -> PageOutcome {
        let message = error.to_string();
        tracing::warn!(
            endpoint = E::ENDPOINT,
            offset,
            error = %message,
            "page fetch failed"
        );
        self.state.borrow_mut().reject(message);
        PageOutcome::Failed
    }

    fn fail_item(&self, context: String, error: payloads::ClientError) {
        let message = error.to_string();
        tracing::warn!(
            endpoint = E::ENDPOINT,
            item = %context,
            error = %message,
            "item operation failed"
        );
        self.state.borrow_mut().reject(message);
    }
}

/// Selectors. These return clones so no `RefCell` borrow outlives the
/// call.
impl<E: Collectable> PagedCollection<E> {
    pub fn get(&self, id: E::Id) -> Option<E> {
        self.state.borrow().get(id).cloned()
    }

    /// See [`CollectionState::by_scope`]: `None` scope means "no scope
    /// selected yet", distinct from zero matches.
    pub fn by_scope(&self, scope: Option<E::Scope>) -> Option<Vec<E>> {
        self.state.borrow().by_scope(scope)
    }

    pub fn items(&self) -> Vec<E> {
        self.state.borrow().items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.borrow().status()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error().map(str::to_string)
    }
}

/// Removes its key from the in-flight set when the fetch completes,
/// success or failure.
struct InFlightGuard<'a, K: Copy + Eq + std::hash::Hash> {
    keys: &'a RefCell<HashSet<K>>,
    key: K,
}

impl<'a, K: Copy + Eq + std::hash::Hash> InFlightGuard<'a, K> {
    fn acquire(keys: &'a RefCell<HashSet<K>>, key: K) -> Option<Self> {
        if keys.borrow_mut().insert(key) {
            Some(Self { keys, key })
        } else {
            None
        }
    }
}

impl<K: Copy + Eq + std::hash::Hash> Drop for InFlightGuard<'_, K> {
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}
