use std::{sync::Arc, time::Duration};

use crate::{
    api::{HttpBackend, MemoryBackend, MockApi},
    config::AppConfig,
    navigation::RouteTable,
    store::{CatalogStore, WriteGates},
};

#[derive(Clone)]
pub struct AppState {
    pub api: MockApi,
    pub catalog: Arc<CatalogStore>,
    pub gates: Arc<WriteGates>,
    pub routes: Arc<RouteTable>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(api: MockApi, catalog_ttl: Duration, jwt_secret: &str) -> Self {
        Self {
            api,
            catalog: Arc::new(CatalogStore::new(catalog_ttl)),
            gates: Arc::new(WriteGates::default()),
            routes: Arc::new(RouteTable::default()),
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let api = if config.uses_memory_backend() {
            MockApi::new(Arc::new(MemoryBackend::new()))
        } else {
            let backend = HttpBackend::new(
                &config.mock_api_url,
                Duration::from_secs(config.upstream_timeout_secs),
            )?;
            MockApi::new(Arc::new(backend))
        };
        Ok(Self::new(
            api,
            Duration::from_secs(config.catalog_ttl_secs),
            &config.jwt_secret,
        ))
    }
}
