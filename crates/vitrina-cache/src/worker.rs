use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::{
    error::CacheResult,
    events::WorkerEvent,
    traits::{CacheStorage, Fetch},
    types::{CacheName, FetchRequest, StoredResponse, WorkerConfig},
};

const EVENT_CAPACITY: usize = 32;

/// How the worker answered one intercepted fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Live network answered; the cache was not consulted.
    Network(StoredResponse),
    /// Network down, exact match served from the cache.
    Cached(StoredResponse),
    /// Network down, no exact match; the designated offline document.
    Offline(StoredResponse),
    /// Non-GET request; proceeds exactly as if no worker were installed.
    Passthrough,
    /// Network down and nothing cached, not even the offline document.
    Unavailable,
}

/// The offline cache worker.
///
/// Three externally triggered phases: [`install`](Self::install) fills
/// the versioned cache, [`activate`](Self::activate) garbage-collects
/// stale versions, [`handle_fetch`](Self::handle_fetch) intercepts GETs
/// network-first. Both install and activate take effect immediately —
/// there is no waiting on existing sessions; the platform serializes
/// the lifecycle.
pub struct OfflineWorker<S, F> {
    storage: S,
    net: F,
    config: WorkerConfig,
    events: broadcast::Sender<WorkerEvent>,
}

impl<S: CacheStorage, F: Fetch> OfflineWorker<S, F> {
    pub fn new(storage: S, net: F, config: WorkerConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            storage,
            net,
            config,
            events,
        }
    }

    #[must_use]
    pub fn cache_name(&self) -> &CacheName {
        &self.config.cache_name
    }

    /// Subscribe to worker events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WorkerEvent> {
        self.events.subscribe()
    }

    /// Install phase: create the versioned cache and populate it from
    /// the precache manifest.
    ///
    /// A single asset failing to fetch or store is logged and skipped;
    /// a partial cache is acceptable. Returns the number of assets
    /// actually cached.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`](crate::CacheError) only when the cache
    /// itself cannot be opened.
    pub async fn install(&self) -> CacheResult<usize> {
        let cache = self.storage.open(&self.config.cache_name).await?;

        let mut cached = 0usize;
        let mut failed = 0usize;
        for url in &self.config.precache {
            let request = FetchRequest::get(url.clone());
            match self.net.fetch(&request).await {
                Ok(response) if response.is_success() => match cache.put(response).await {
                    Ok(()) => cached += 1,
                    Err(err) => {
                        warn!(%url, %err, "precache store failed");
                        failed += 1;
                    }
                },
                Ok(response) => {
                    warn!(%url, status = response.status, "precache asset answered with error status");
                    failed += 1;
                }
                Err(err) => {
                    warn!(%url, %err, "precache fetch failed");
                    failed += 1;
                }
            }
        }

        debug!(
            cache = %self.config.cache_name,
            cached, failed, "install complete"
        );
        let _ = self.events.send(WorkerEvent::Installed { cached, failed });
        Ok(cached)
    }

    /// Activate phase: delete every cache whose name is not the current
    /// one. Returns the garbage-collected names.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`](crate::CacheError) when the registry
    /// cannot be enumerated or a stale cache cannot be deleted.
    pub async fn activate(&self) -> CacheResult<Vec<CacheName>> {
        let mut removed = Vec::new();
        for name in self.storage.keys().await? {
            if name != self.config.cache_name && self.storage.delete(&name).await? {
                debug!(stale = %name, "removed stale cache");
                removed.push(name);
            }
        }

        let _ = self.events.send(WorkerEvent::Activated {
            removed: removed.clone(),
        });
        Ok(removed)
    }

    /// Fetch interception: network-first for GET, cache on transport
    /// failure, offline document as last resort. Non-GET is never
    /// touched.
    ///
    /// Any answer the origin gives — error statuses included — is
    /// served to the page as-is; a reachable origin saying 404 is not
    /// an offline condition.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`](crate::CacheError) only on storage
    /// failure during fallback; a dead network alone never errors.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> CacheResult<FetchOutcome> {
        if !request.method.is_get() {
            return Ok(FetchOutcome::Passthrough);
        }

        match self.net.fetch(request).await {
            Ok(response) => {
                let _ = self.events.send(WorkerEvent::NetworkServed {
                    url: request.url.clone(),
                });
                return Ok(FetchOutcome::Network(response));
            }
            Err(err) => {
                debug!(url = %request.url, %err, "network unreachable, trying cache");
            }
        }

        let cache = self.storage.open(&self.config.cache_name).await?;

        if let Some(hit) = cache.matching(&request.url).await? {
            let _ = self.events.send(WorkerEvent::CacheServed {
                url: request.url.clone(),
            });
            return Ok(FetchOutcome::Cached(hit));
        }

        if let Some(offline) = cache.matching(&self.config.offline_url).await? {
            let _ = self.events.send(WorkerEvent::OfflineFallback {
                url: request.url.clone(),
            });
            return Ok(FetchOutcome::Offline(offline));
        }

        warn!(url = %request.url, "offline with empty cache, nothing to serve");
        Ok(FetchOutcome::Unavailable)
    }
}
