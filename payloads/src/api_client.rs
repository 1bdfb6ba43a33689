use reqwest::StatusCode;
use serde::Serialize;

use crate::{Collectable, requests};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ReqwestResult {
        let request =
            self.inner_client.get(self.format_url(path)).query(query);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(path))
            .query(query)
            .json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Generic collection operations on the backend API.
///
/// Every `Collectable` entity is served through the same six REST
/// conventions, so one generic method each replaces the per-entity
/// client methods the app would otherwise accumulate.
impl APIClient {
    /// Fetch one page of a collection, optionally filtered to an owner
    /// scope: `GET {endpoint}?{scope_param}={v}&offset={n}&limit={n}`.
    pub async fn list<E: Collectable>(
        &self,
        scope: Option<E::Scope>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        let mut query = Vec::with_capacity(3);
        if let Some(scope) = scope {
            query.push((E::SCOPE_PARAM, scope.to_string()));
        }
        query.push(("offset", offset.to_string()));
        query.push(("limit", limit.to_string()));

        let response = self.get(E::ENDPOINT, &query).await?;
        ok_body(response).await
    }

    /// Fetch one page of filtered search results:
    /// `POST {endpoint}-search?...&filter={text}` with a structured
    /// `{ search }` body.
    pub async fn search<E: Collectable>(
        &self,
        scope: Option<E::Scope>,
        filter: Option<&str>,
        search: &requests::Search,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<E>, ClientError> {
        let mut query = Vec::with_capacity(4);
        if let Some(scope) = scope {
            query.push((E::SCOPE_PARAM, scope.to_string()));
        }
        query.push(("offset", offset.to_string()));
        query.push(("limit", limit.to_string()));
        if let Some(filter) = filter {
            query.push(("filter", filter.to_string()));
        }

        let path = format!("{}-search", E::ENDPOINT);
        let response = self.post(&path, &query, search).await?;
        ok_body(response).await
    }

    /// Fetch a single entity: `GET {endpoint}/{id}`.
    pub async fn fetch_one<E: Collectable>(
        &self,
        id: E::Id,
    ) -> Result<E, ClientError> {
        let response =
            self.get(&format!("{}/{id}", E::ENDPOINT), &[]).await?;
        ok_body(response).await
    }

    /// Create an entity; the server assigns the id and returns the
    /// full record: `POST {endpoint}`.
    pub async fn create_one<E: Collectable>(
        &self,
        draft: &E::Draft,
    ) -> Result<E, ClientError> {
        let response = self.post(E::ENDPOINT, &[], draft).await?;
        ok_body(response).await
    }

    /// Update an entity and return the refreshed record:
    /// `PUT {endpoint}`.
    pub async fn update_one<E: Collectable>(
        &self,
        patch: &E::Patch,
    ) -> Result<E, ClientError> {
        let response = self.put(E::ENDPOINT, patch).await?;
        ok_body(response).await
    }

    /// Delete an entity: `DELETE {endpoint}/{id}`.
    pub async fn delete_one<E: Collectable>(
        &self,
        id: E::Id,
    ) -> Result<(), ClientError> {
        let response = self.delete(&format!("{}/{id}", E::ENDPOINT)).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
