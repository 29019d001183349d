use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::{ApiError, ApiResult, Backend, Resource};

#[derive(Debug, Default)]
struct Collection {
    next_id: u64,
    rows: Vec<Value>,
}

impl Collection {
    fn position(&self, id: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.get("id").and_then(Value::as_str) == Some(id))
    }
}

/// In-process stand-in for the mock API.
///
/// Ids are assigned as increasing decimal strings per collection, the way
/// mockapi.io does. PUT merges the body into the stored object.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<Resource, Collection>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_object(resource: Resource, body: Value) -> ApiResult<Map<String, Value>> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Status {
            status: 400,
            body: format!("{resource} expects a JSON object, got {other}"),
        }),
    }
}

fn not_found(resource: Resource, id: &str) -> ApiError {
    ApiError::NotFound(format!("{resource}/{id}"))
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn list(&self, resource: Resource) -> ApiResult<Vec<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&resource)
            .map(|c| c.rows.clone())
            .unwrap_or_default())
    }

    async fn get(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        let collections = self.collections.read().await;
        collections
            .get(&resource)
            .and_then(|c| c.position(id).map(|idx| c.rows[idx].clone()))
            .ok_or_else(|| not_found(resource, id))
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        let mut map = into_object(resource, body)?;
        let mut collections = self.collections.write().await;
        let collection = collections.entry(resource).or_default();
        collection.next_id += 1;
        map.insert("id".into(), Value::String(collection.next_id.to_string()));
        let row = Value::Object(map);
        collection.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, resource: Resource, id: &str, body: Value) -> ApiResult<Value> {
        let patch = into_object(resource, body)?;
        let mut collections = self.collections.write().await;
        let collection = collections
            .get_mut(&resource)
            .ok_or_else(|| not_found(resource, id))?;
        let idx = collection
            .position(id)
            .ok_or_else(|| not_found(resource, id))?;
        if let Value::Object(stored) = &mut collection.rows[idx] {
            for (key, value) in patch {
                if key != "id" {
                    stored.insert(key, value);
                }
            }
        }
        Ok(collection.rows[idx].clone())
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        let mut collections = self.collections.write().await;
        let collection = collections
            .get_mut(&resource)
            .ok_or_else(|| not_found(resource, id))?;
        let idx = collection
            .position(id)
            .ok_or_else(|| not_found(resource, id))?;
        Ok(collection.rows.remove(idx))
    }
}
