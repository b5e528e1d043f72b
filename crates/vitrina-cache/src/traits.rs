use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::{
    error::{CacheResult, FetchError},
    types::{CacheName, FetchRequest, StoredResponse},
};

/// A single named cache: URL → stored response.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Store a response under its request URL, replacing any prior entry.
    async fn put(&self, response: StoredResponse) -> CacheResult<()>;

    /// Exact-match lookup for the requested URL.
    async fn matching(&self, url: &Url) -> CacheResult<Option<StoredResponse>>;
}

/// The platform's named cache registry.
///
/// This is the worker's only persisted external dependency; mutation is
/// serialized by the platform's own install/activate lifecycle.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Open the cache with this name, creating it when absent.
    async fn open(&self, name: &CacheName) -> CacheResult<Arc<dyn Cache>>;

    /// Enumerate every stored cache name.
    async fn keys(&self) -> CacheResult<Vec<CacheName>>;

    /// Delete a named cache. Returns whether it existed.
    async fn delete(&self, name: &CacheName) -> CacheResult<bool>;
}

/// The live network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// # Errors
    ///
    /// Returns [`FetchError`] when the network is unreachable or the
    /// origin answers with a failure status.
    async fn fetch(&self, request: &FetchRequest) -> Result<StoredResponse, FetchError>;
}
