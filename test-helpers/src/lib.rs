pub mod mock;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use collection::{CollectionClient, PagedCollection, Paginator};
use payloads::{ClientError, Collectable, requests};
use reqwest::StatusCode;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Initialize logging for tests. Safe to call repeatedly.
pub fn init_test_logging() {
    let env_filter = EnvFilter::new("info,collection=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_test_writer();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

type FromDraft<E> = Box<dyn Fn(i64, &<E as Collectable>::Draft) -> E>;
type FromPatch<E> = Box<dyn Fn(&<E as Collectable>::Patch) -> E>;

/// An in-memory stand-in for the backend, implementing the collection
/// transport over a plain row vector.
///
/// Pages are served by scope/offset/limit in row order, like the real
/// list endpoints. Every call yields once before doing any work, so
/// two fetches started together genuinely overlap under a
/// current-thread runtime.
pub struct InMemoryApi<E: Collectable> {
    rows: RefCell<Vec<E>>,
    list_calls: RefCell<Vec<(i64, i64)>>,
    fail_next: RefCell<Option<String>>,
    next_id: Cell<i64>,
    from_draft: FromDraft<E>,
    from_patch: FromPatch<E>,
}

impl<E: Collectable> InMemoryApi<E> {
    /// `from_draft` materializes a created row from a draft and the
    /// server-assigned numeric id; `from_patch` materializes the
    /// refreshed row an update returns.
    pub fn new(
        from_draft: impl Fn(i64, &E::Draft) -> E + 'static,
        from_patch: impl Fn(&E::Patch) -> E + 'static,
    ) -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            list_calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
            // Assigned ids start high so seeded rows never collide.
            next_id: Cell::new(1000),
            from_draft: Box::new(from_draft),
            from_patch: Box::new(from_patch),
        }
    }

    pub fn with_rows(self, rows: Vec<E>) -> Self {
        *self.rows.borrow_mut() = rows;
        self
    }

    pub fn set_rows(&self, rows: Vec<E>) {
        *self.rows.borrow_mut() = rows;
    }

    pub fn push_row(&self, row: E) {
        self.rows.borrow_mut().push(row);
    }

    /// Replace a row by id, simulating a server-side edit.
    pub fn replace_row(&self, row: E) {
        let mut rows = self.rows.borrow_mut();
        if let Some(slot) = rows.iter_mut().find(|r| r.id() == row.id()) {
            *slot = row;
        }
    }

    pub fn rows(&self) -> Vec<E> {
        self.rows.borrow().clone()
    }

    /// Make the next call fail with the given message.
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.borrow_mut() = Some(message.into());
    }

    /// Every `(offset, limit)` pair the list endpoint has served.
    pub fn list_calls(&self) -> Vec<(i64, i64)> {
        self.list_calls.borrow().clone()
    }

    fn take_failure(&self) -> Option<ClientError> {
        self.fail_next.borrow_mut().take().map(|message| {
            ClientError::APIError(
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
            )
        })
    }

    fn not_found() -> ClientError {
        ClientError::APIError(
            StatusCode::NOT_FOUND,
            format!("{} not found", E::ENDPOINT),
        )
    }

    fn page(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> Vec<E> {
        self.rows
            .borrow()
            .iter()
            .filter(|row| scope.is_none_or(|scope| row.scope() == scope))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl<E: Collectable> CollectionClient<E> for InMemoryApi<E> {
    async fn list(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        self.list_calls.borrow_mut().push((offset, limit));
        Ok(self.page(scope, offset, limit))
    }

    async fn search(
        &self,
        scope: Option<E::Scope>,
        filter: Option<&str>,
        search: &requests::Search,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }

        // Test shorthand for the server's matching: a row matches when
        // its serialized form contains the filter text and every search
        // field value.
        let matching: Vec<E> = self
            .rows
            .borrow()
            .iter()
            .filter(|row| scope.is_none_or(|scope| row.scope() == scope))
            .filter(|row| {
                let serialized =
                    serde_json::to_string(row).unwrap_or_default();
                filter.is_none_or(|text| serialized.contains(text))
                    && search
                        .search
                        .values()
                        .all(|value| serialized.contains(value.as_str()))
            })
            .cloned()
            .collect();

        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn fetch_one(&self, id: E::Id) -> Result<E, ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        self.rows
            .borrow()
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_one(&self, draft: &E::Draft) -> Result<E, ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let row = (self.from_draft)(id, draft);
        self.rows.borrow_mut().push(row.clone());
        Ok(row)
    }

    async fn update_one(&self, patch: &E::Patch) -> Result<E, ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let row = (self.from_patch)(patch);
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => Err(Self::not_found()),
        }
    }

    async fn delete_one(&self, id: E::Id) -> Result<(), ClientError> {
        tokio::task::yield_now().await;
        if let Some(error) = self.take_failure() {
            return Err(error);
        }
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() < before {
            Ok(())
        } else {
            Err(Self::not_found())
        }
    }
}

/// A store wired to an in-memory backend, for integration tests.
pub struct StoreFixture<E: Collectable> {
    pub api: Rc<InMemoryApi<E>>,
    pub store: Rc<PagedCollection<E>>,
}

impl<E: Collectable> StoreFixture<E> {
    pub fn new(api: InMemoryApi<E>) -> Self {
        init_test_logging();
        let api = Rc::new(api);
        let client: Rc<dyn CollectionClient<E>> = api.clone();
        Self {
            api,
            store: Rc::new(PagedCollection::new(client)),
        }
    }

    pub fn paginator(&self, page_size: i64) -> Paginator<E> {
        Paginator::new(self.store.clone(), page_size)
    }
}
