use std::collections::HashSet;

use payloads::Collectable;

/// Outcome of the most recent operation on a collection, not of any
/// individual request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// The accumulated page list for one entity type.
///
/// `items` holds the union of every page merged so far, unique by id.
/// `error` carries the last rejection reason; it is cleared by the
/// next successful operation or by [`clear_error`].
///
/// [`clear_error`]: CollectionState::clear_error
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<E: Collectable> {
    items: Vec<E>,
    status: FetchStatus,
    error: Option<String>,
}

impl<E: Collectable> Default for CollectionState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::default(),
            error: None,
        }
    }
}

impl<E: Collectable> CollectionState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn get(&self, id: E::Id) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items whose owner scope matches `scope`.
    ///
    /// `None` input returns `None` ("no scope selected yet"), distinct
    /// from `Some(vec![])` ("scope selected, zero results").
    pub fn by_scope(&self, scope: Option<E::Scope>) -> Option<Vec<E>> {
        let scope = scope?;
        Some(
            self.items
                .iter()
                .filter(|item| item.scope() == scope)
                .cloned()
                .collect(),
        )
    }

    /// Merge a fetched page into the held items: union by id, incoming
    /// first.
    ///
    /// The result is the batch (first occurrence of an id within the
    /// batch wins), followed by previously-held items whose id does not
    /// appear in the batch. For an id present in both, the incoming
    /// element's fields win. Merge order is therefore not insertion
    /// order once pages overlap; see DESIGN.md for the ordering
    /// decision.
    pub fn merge_page(&mut self, batch: Vec<E>) {
        let mut merged: Vec<E> =
            Vec::with_capacity(batch.len() + self.items.len());
        let mut incoming_ids: HashSet<E::Id> =
            HashSet::with_capacity(batch.len());

        for incoming in batch {
            if incoming_ids.insert(incoming.id()) {
                merged.push(incoming);
            }
        }
        for held in self.items.drain(..) {
            if !incoming_ids.contains(&held.id()) {
                merged.push(held);
            }
        }

        self.items = merged;
    }

    /// Replace the item with a matching id in place, or append it.
    pub fn upsert(&mut self, entity: E) {
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => *slot = entity,
            None => self.items.push(entity),
        }
    }

    /// Remove the item with the given id. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: E::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() < before
    }

    /// Reset items, status and error to initial values. Used when the
    /// filter context changes, so stale cross-scope rows are not shown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clear the error only, leaving items and status intact. Used
    /// before a retry or when dismissing an error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn begin(&mut self) {
        self.status = FetchStatus::Pending;
    }

    pub(crate) fn fulfil(&mut self) {
        self.status = FetchStatus::Fulfilled;
        self.error = None;
    }

    pub(crate) fn reject(&mut self, message: String) {
        self.status = FetchStatus::Rejected;
        self.error = Some(message);
    }
}
