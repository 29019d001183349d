use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{ApiError, ApiResult, Backend, Resource};

/// Network backend talking to the hosted mock API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    fn item_url(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, resource.path(), id)
    }

    async fn handle_response(&self, response: reqwest::Response) -> ApiResult<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ApiError::NotFound(body)),
                _ => Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                }),
            };
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list(&self, resource: Resource) -> ApiResult<Vec<Value>> {
        let response = self.client.get(self.collection_url(resource)).send().await?;
        let body = self.handle_response(response).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn get(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        let response = self.client.get(self.item_url(resource, id)).send().await?;
        self.handle_response(response).await
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        let response = self
            .client
            .post(self.collection_url(resource))
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn update(&self, resource: Resource, id: &str, body: Value) -> ApiResult<Value> {
        let response = self
            .client
            .put(self.item_url(resource, id))
            .json(&body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        let response = self.client.delete(self.item_url(resource, id)).send().await?;
        self.handle_response(response).await
    }
}
