use std::cell::Cell;
use std::rc::Rc;

use payloads::Collectable;

use crate::store::{PageOutcome, PagedCollection};

/// Per-screen pagination cursor over a shared [`PagedCollection`].
///
/// Holds no authoritative data: offsets are derived from the store's
/// current length, plus one local "initialised" flag. Lifecycle:
/// uninitialised until a scope is supplied, then loading/loaded; a
/// scope change drops back to uninitialised and triggers a fresh
/// initial fetch. There is no separate error state; errors surface
/// through the store's selectors.
pub struct Paginator<E: Collectable> {
    store: Rc<PagedCollection<E>>,
    page_size: i64,
    scope: Cell<Option<E::Scope>>,
    initialised: Cell<bool>,
}

impl<E: Collectable> Paginator<E> {
    pub fn new(store: Rc<PagedCollection<E>>, page_size: i64) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            store,
            page_size,
            scope: Cell::new(None),
            initialised: Cell::new(false),
        }
    }

    /// Call on every render with the screen's current scope.
    ///
    /// Does nothing while `scope` is `None`. The first call with a
    /// scope fetches `offset = 0`; a *changed* scope resets the cursor
    /// and refetches. The store is not cleared here: rows from the
    /// previous scope remain held (and filtered out by [`results`])
    /// until the caller decides to [`PagedCollection::clear`].
    ///
    /// Returns `None` when no fetch was dispatched.
    ///
    /// [`results`]: Paginator::results
    pub async fn ensure_initialised(
        &self,
        scope: Option<E::Scope>,
    ) -> Option<PageOutcome> {
        if scope != self.scope.get() {
            self.scope.set(scope);
            self.initialised.set(false);
        }

        let scope = scope?;
        if self.initialised.get() {
            return None;
        }

        // Marked before the await so a re-render during the fetch does
        // not dispatch a second initial page.
        self.initialised.set(true);
        Some(
            self.store
                .fetch_page(Some(scope), 0, self.page_size)
                .await,
        )
    }

    /// Fetch the next page at `offset = store.len()`.
    ///
    /// Offsets across successive calls are strictly increasing as long
    /// as pages keep arriving and nothing clears the store. Exhaustion
    /// is inferred by the caller from `fetched < page_size`.
    pub async fn load_more(&self) -> PageOutcome {
        let offset = self.store.len() as i64;
        self.store
            .fetch_page(self.scope.get(), offset, self.page_size)
            .await
    }

    /// Re-fetch the last window of `page_size` items ending at the
    /// current length, picking up server-side changes to already-loaded
    /// rows without refetching everything.
    pub async fn refresh(&self) -> PageOutcome {
        let len = self.store.len() as i64;
        let offset = (len - self.page_size).max(0);
        self.store
            .fetch_page(self.scope.get(), offset, self.page_size)
            .await
    }

    /// Scope-filtered view of the store; `None` before a scope is
    /// chosen.
    pub fn results(&self) -> Option<Vec<E>> {
        self.store.by_scope(self.scope.get())
    }

    pub fn initialised(&self) -> bool {
        self.initialised.get()
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}
