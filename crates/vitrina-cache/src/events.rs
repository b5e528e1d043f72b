use url::Url;

use crate::types::CacheName;

/// Progress and serving notifications from the offline worker.
///
/// Published best-effort over a broadcast channel; with no subscribers
/// events are silently dropped.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum WorkerEvent {
    Installed {
        cached: usize,
        failed: usize,
    },
    Activated {
        removed: Vec<CacheName>,
    },
    NetworkServed {
        url: Url,
    },
    CacheServed {
        url: Url,
    },
    OfflineFallback {
        url: Url,
    },
}
