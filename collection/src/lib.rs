//! Paged, de-duplicating collection stores for the Everwell client.
//!
//! Every domain entity (habits, workouts, journals, meals, the
//! operator exercise catalog) is read through the same three-layer
//! pattern:
//!
//! 1. [`CollectionState`]: the accumulated page list for one entity
//!    type, unique by id, with a fetch status and the last error.
//! 2. [`PagedCollection`]: the repository owning that state, folding
//!    transport results into it. Remote failures are recorded in the
//!    state (never re-thrown); callers observe them through the
//!    selectors.
//! 3. [`Paginator`]: a per-screen cursor computing offsets for
//!    initial load, load-more and refresh.
//!
//! Stores are constructed with an injected [`CollectionClient`], so a
//! screen, a service, and a test can each hold their own instance; no
//! global singletons.

pub mod client;
pub mod paginator;
pub mod state;
pub mod store;

pub use client::CollectionClient;
pub use paginator::Paginator;
pub use state::{CollectionState, FetchStatus};
pub use store::{PageOutcome, PagedCollection};
