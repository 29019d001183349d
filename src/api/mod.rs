//! Client for the hosted mock REST API that stores every collection.
//!
//! [`Backend`] is the untyped seam (JSON in, JSON out); [`MockApi`] layers the
//! serde mapping on top so services work with the models directly.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub mod error;
pub mod http;
pub mod memory;

pub use error::{ApiError, ApiResult};
pub use http::HttpBackend;
pub use memory::MemoryBackend;

/// Collections exposed by the mock API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Products,
    Categories,
    Users,
    Cart,
    Favourites,
    Orders,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Categories => "categories",
            Resource::Users => "users",
            Resource::Cart => "cart",
            Resource::Favourites => "favourites",
            Resource::Orders => "orders",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[async_trait]
pub trait Backend: Send + Sync {
    async fn list(&self, resource: Resource) -> ApiResult<Vec<Value>>;
    async fn get(&self, resource: Resource, id: &str) -> ApiResult<Value>;
    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value>;
    async fn update(&self, resource: Resource, id: &str, body: Value) -> ApiResult<Value>;
    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<Value>;
}

/// Typed view over a [`Backend`].
#[derive(Clone)]
pub struct MockApi {
    backend: Arc<dyn Backend>,
}

impl MockApi {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> ApiResult<Vec<T>> {
        let rows = self.backend.list(resource).await?;
        let items = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        tracing::debug!(%resource, count = items.len(), "fetched collection");
        Ok(items)
    }

    pub async fn get<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> ApiResult<T> {
        let row = self.backend.get(resource, id).await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn create<T, B>(&self, resource: Resource, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let row = self
            .backend
            .create(resource, serde_json::to_value(body)?)
            .await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn update<T, B>(&self, resource: Resource, id: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let row = self
            .backend
            .update(resource, id, serde_json::to_value(body)?)
            .await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn delete(&self, resource: Resource, id: &str) -> ApiResult<()> {
        self.backend.delete(resource, id).await?;
        Ok(())
    }
}
