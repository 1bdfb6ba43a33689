use async_trait::async_trait;
use payloads::{APIClient, ClientError, Collectable, requests};

/// Transport seam between a [`PagedCollection`] and the backend.
///
/// [`APIClient`] is the production implementation; tests inject an
/// in-memory fake. Futures are `?Send`: the client runs on the app's
/// single-threaded event loop.
///
/// [`PagedCollection`]: crate::PagedCollection
#[async_trait(?Send)]
pub trait CollectionClient<E: Collectable> {
    async fn list(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError>;

    async fn search(
        &self,
        scope: Option<E::Scope>,
        filter: Option<&str>,
        search: &requests::Search,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError>;

    async fn fetch_one(&self, id: E::Id) -> Result<E, ClientError>;

    async fn create_one(&self, draft: &E::Draft) -> Result<E, ClientError>;

    async fn update_one(&self, patch: &E::Patch) -> Result<E, ClientError>;

    async fn delete_one(&self, id: E::Id) -> Result<(), ClientError>;
}

#[async_trait(?Send)]
impl<E: Collectable> CollectionClient<E> for APIClient {
    async fn list(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        APIClient::list::<E>(self, scope, offset, limit).await
    }

    async fn search(
        &self,
        scope: Option<E::Scope>,
        filter: Option<&str>,
        search: &requests::Search,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        APIClient::search::<E>(self, scope, filter, search, offset, limit)
            .await
    }

    async fn fetch_one(&self, id: E::Id) -> Result<E, ClientError> {
        APIClient::fetch_one::<E>(self, id).await
    }

    async fn create_one(&self, draft: &E::Draft) -> Result<E, ClientError> {
        APIClient::create_one::<E>(self, draft).await
    }

    async fn update_one(&self, patch: &E::Patch) -> Result<E, ClientError> {
        APIClient::update_one::<E>(self, patch).await
    }

    async fn delete_one(&self, id: E::Id) -> Result<(), ClientError> {
        APIClient::delete_one::<E>(self, id).await
    }
}
