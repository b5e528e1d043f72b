use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;

use crate::{
    error::CacheResult,
    traits::{Cache, CacheStorage},
    types::{CacheName, StoredResponse},
};

/// One named cache held in memory.
#[derive(Default)]
struct MemCache {
    entries: Mutex<HashMap<Url, StoredResponse>>,
}

#[async_trait]
impl Cache for MemCache {
    async fn put(&self, response: StoredResponse) -> CacheResult<()> {
        self.entries.lock().insert(response.url.clone(), response);
        Ok(())
    }

    async fn matching(&self, url: &Url) -> CacheResult<Option<StoredResponse>> {
        Ok(self.entries.lock().get(url).cloned())
    }
}

/// In-memory cache registry.
///
/// Backs native hosting and tests; a browser embedder binds the
/// platform's persistent store instead. Not persisted across processes.
#[derive(Clone, Default)]
pub struct MemCacheStorage {
    caches: Arc<Mutex<HashMap<CacheName, Arc<MemCache>>>>,
}

impl MemCacheStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemCacheStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemCacheStorage")
            .field("caches", &self.caches.lock().len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheStorage for MemCacheStorage {
    async fn open(&self, name: &CacheName) -> CacheResult<Arc<dyn Cache>> {
        let cache = self
            .caches
            .lock()
            .entry(name.clone())
            .or_default()
            .clone();
        Ok(cache)
    }

    async fn keys(&self) -> CacheResult<Vec<CacheName>> {
        let mut names: Vec<CacheName> = self.caches.lock().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn delete(&self, name: &CacheName) -> CacheResult<bool> {
        Ok(self.caches.lock().remove(name).is_some())
    }
}
