//! Shared in-process state: the catalog snapshot every screen reads from and
//! the write gates that serialise read-then-write sequences.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use tokio::sync::{Mutex, RwLock};

use crate::{
    aggregation::ProductLookup,
    api::{ApiResult, MockApi, Resource},
    models::{Category, Product},
};

#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id.clone(), pos))
            .collect();
        Self {
            products,
            categories,
            index,
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }
}

impl ProductLookup for CatalogSnapshot {
    fn find_product(&self, id: &str) -> Option<&Product> {
        self.product(id)
    }
}

/// Catalog shared by every service, reloaded once it is older than `ttl`.
///
/// Every `invalidate` bumps `generation`; a load that started under an older
/// generation is returned to its caller but never cached.
#[derive(Debug)]
pub struct CatalogStore {
    ttl: Duration,
    generation: AtomicU64,
    cached: RwLock<Option<CachedSnapshot>>,
}

#[derive(Debug)]
struct CachedSnapshot {
    loaded_at: Instant,
    generation: u64,
    snapshot: Arc<CatalogSnapshot>,
}

impl CatalogStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            generation: AtomicU64::new(0),
            cached: RwLock::new(None),
        }
    }

    pub async fn snapshot(&self, api: &MockApi) -> ApiResult<Arc<CatalogSnapshot>> {
        let generation = self.generation.load(Ordering::Acquire);
        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.generation == generation && cached.loaded_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.snapshot));
            }
        }

        let (products, categories) = tokio::try_join!(
            api.list::<Product>(Resource::Products),
            api.list::<Category>(Resource::Categories),
        )?;
        let snapshot = Arc::new(CatalogSnapshot::new(products, categories));
        self.install(generation, Arc::clone(&snapshot)).await;
        tracing::debug!(
            products = snapshot.products.len(),
            categories = snapshot.categories.len(),
            generation,
            "catalog snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Caches `snapshot` unless an invalidation happened since its load began.
    async fn install(&self, generation: u64, snapshot: Arc<CatalogSnapshot>) {
        let mut cached = self.cached.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            tracing::debug!(generation, "discarding catalog loaded before invalidation");
            return;
        }
        *cached = Some(CachedSnapshot {
            loaded_at: Instant::now(),
            generation,
            snapshot,
        });
    }

    pub async fn invalidate(&self) {
        let mut cached = self.cached.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        *cached = None;
    }
}

/// One gate per collection whose writes depend on a prior read.
#[derive(Debug, Default)]
pub struct WriteGates {
    pub cart: Mutex<()>,
    pub favourites: Mutex<()>,
    pub users: Mutex<()>,
}
