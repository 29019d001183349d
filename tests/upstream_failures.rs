use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use lungo_storefront::{
    api::{ApiError, ApiResult, Backend, MemoryBackend, MockApi, Resource},
    dto::{cart::AddToCartRequest, products::ProductPayload},
    error::AppError,
    middleware::auth::AuthUser,
    models::{CartEntry, Order, Price, Role},
    routes::params::CatalogQuery,
    seed::seed_demo,
    services::{admin_service, cart_service, catalog_service},
    state::AppState,
};

/// Memory backend whose `fail_cart_delete_at`-th cart delete (1-based) fails.
#[derive(Default)]
struct FlakyCartBackend {
    inner: MemoryBackend,
    cart_deletes: AtomicUsize,
    fail_cart_delete_at: usize,
}

#[async_trait]
impl Backend for FlakyCartBackend {
    async fn list(&self, resource: Resource) -> ApiResult<Vec<Value>> {
        self.inner.list(resource).await
    }

    async fn get(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        self.inner.get(resource, id).await
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        self.inner.create(resource, body).await
    }

    async fn update(&self, resource: Resource, id: &str, body: Value) -> ApiResult<Value> {
        self.inner.update(resource, id, body).await
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        if resource == Resource::Cart {
            let attempt = self.cart_deletes.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt == self.fail_cart_delete_at {
                return Err(ApiError::Status {
                    status: 503,
                    body: "Service Unavailable".into(),
                });
            }
        }
        self.inner.delete(resource, id).await
    }
}

/// Memory backend that, once armed, holds the next product listing until
/// released. The rows are read before the pause, so the caller receives the
/// collection as it was when the load began.
#[derive(Default)]
struct PausingBackend {
    inner: MemoryBackend,
    armed: AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl Backend for PausingBackend {
    async fn list(&self, resource: Resource) -> ApiResult<Vec<Value>> {
        let rows = self.inner.list(resource).await?;
        if resource == Resource::Products && self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(rows)
    }

    async fn get(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        self.inner.get(resource, id).await
    }

    async fn create(&self, resource: Resource, body: Value) -> ApiResult<Value> {
        self.inner.create(resource, body).await
    }

    async fn update(&self, resource: Resource, id: &str, body: Value) -> ApiResult<Value> {
        self.inner.update(resource, id, body).await
    }

    async fn delete(&self, resource: Resource, id: &str) -> ApiResult<Value> {
        self.inner.delete(resource, id).await
    }
}

fn add(product_id: &str) -> AddToCartRequest {
    AddToCartRequest {
        product_id: product_id.into(),
        size: None,
    }
}

#[tokio::test]
async fn failed_cart_delete_leaves_order_and_remaining_entries() -> anyhow::Result<()> {
    let backend = Arc::new(FlakyCartBackend {
        fail_cart_delete_at: 2,
        ..Default::default()
    });
    let state = AppState::new(MockApi::new(backend.clone()), Duration::ZERO, "test-secret");
    seed_demo(&state.api).await?;

    for product_id in ["1", "3", "6"] {
        cart_service::add_to_cart(&state, add(product_id)).await?;
    }
    let before: Vec<CartEntry> = state.api.list(Resource::Cart).await?;
    assert_eq!(before.len(), 3);

    let result = cart_service::checkout(&state).await;
    assert!(matches!(result, Err(AppError::Network(_))));

    let orders: Vec<Order> = state.api.list(Resource::Orders).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items.len(), 3);

    let remaining: Vec<CartEntry> = state.api.list(Resource::Cart).await?;
    let remaining_ids: Vec<&str> = remaining.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(remaining_ids, vec![before[1].id.as_str(), before[2].id.as_str()]);
    Ok(())
}

#[tokio::test]
async fn load_overtaken_by_admin_change_is_not_cached() -> anyhow::Result<()> {
    let backend = Arc::new(PausingBackend::default());
    let state = AppState::new(
        MockApi::new(backend.clone()),
        Duration::from_secs(300),
        "test-secret",
    );
    seed_demo(&state.api).await?;
    let admin = AuthUser {
        user_id: "1".into(),
        role: Role::ADMIN,
    };

    backend.armed.store(true, Ordering::SeqCst);
    let loader = {
        let state = state.clone();
        tokio::spawn(async move { state.catalog.snapshot(&state.api).await })
    };
    backend.entered.notified().await;

    admin_service::create_product(
        &state,
        &admin,
        ProductPayload {
            name: "Flat White".into(),
            description: String::new(),
            price: Price::Amount(4.8),
            image: String::new(),
            rating: 0.0,
            category_id: "1".into(),
            size: "M".into(),
        },
    )
    .await?;
    backend.release.notify_one();

    let stale = loader.await??;
    assert_eq!(stale.products.len(), 6);

    let listed = catalog_service::list_products(&state, CatalogQuery::default()).await?;
    let items = listed.data.expect("products").items;
    assert_eq!(items.len(), 7);
    assert!(items.iter().any(|p| p.name == "Flat White"));
    Ok(())
}
