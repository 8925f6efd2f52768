/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Handle on a REST resource such as `registries` or `users/3/memberships`
///
/// Building a handle performs no I/O. Handles share their client's session, so a
/// token set later is used by handles obtained earlier.
#[derive(Clone)]
pub struct ResourcePath {
    http: Arc<HttpClient>,
    path: String,
}

impl ResourcePath {
    /// Creates a handle on `path`, relative to the API base URL
    pub fn new(http: Arc<HttpClient>, path: impl Into<String>) -> Self {
        Self {
            http,
            path: path.into(),
        }
    }

    /// Resource path relative to the API base URL
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL of the resource
    #[must_use]
    pub fn url(&self) -> String {
        self.http.url(&self.path)
    }

    /// Handle on a sub-resource, e.g. `users/3` then `memberships`
    pub fn child(&self, segment: impl Display) -> ResourcePath {
        ResourcePath::new(self.http.clone(), self.item_path(segment))
    }

    fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), id)
    }

    /// Lists the collection
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        self.http.get(&self.path).await
    }

    /// Lists the collection with query parameters
    pub async fn list_with_query<Q, T>(&self, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http.get_with_query(&self.path, query).await
    }

    /// Reads one item
    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, AppError> {
        self.http.get(&self.item_path(id)).await
    }

    /// Creates an item
    pub async fn create<B, T>(&self, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http.post(&self.path, body).await
    }

    /// Replaces an item
    pub async fn update<B, T>(&self, id: impl Display, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.http.put(&self.item_path(id), body).await
    }

    /// Deletes an item
    pub async fn delete<T: DeserializeOwned>(&self, id: impl Display) -> Result<T, AppError> {
        self.http.delete(&self.item_path(id)).await
    }
}

impl fmt::Debug for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourcePath")
            .field("path", &self.path)
            .finish()
    }
}
