#![forbid(unsafe_code)]

//! # vitrina-cache
//!
//! Offline cache worker for the site shell.
//!
//! ## Policy (normative)
//!
//! - **Install** populates the cache named by the configured [`CacheName`]
//!   with a fixed asset manifest. A single asset failing to fetch is
//!   logged and skipped; install still completes with a partial cache.
//! - **Activate** garbage-collects every stored cache whose name differs
//!   from the configured one. Bumping the name is the only invalidation
//!   mechanism; there is no per-asset expiry.
//! - **Fetch interception** is network-first for GET: live fetch, then
//!   exact cache match, then the designated offline document. Non-GET
//!   requests are never intercepted and never cached.
//!
//! The cache storage itself is a contract ([`CacheStorage`]); the
//! in-memory [`MemCacheStorage`] backs native hosting and tests, and
//! embedders bind the platform's named request/response store.

mod error;
mod events;
mod mem;
mod traits;
mod types;
mod worker;

pub use error::{CacheError, CacheResult, FetchError};
pub use events::WorkerEvent;
pub use mem::MemCacheStorage;
pub use traits::{Cache, CacheStorage, Fetch};
pub use types::{CacheName, FetchRequest, Method, StoredResponse, WorkerConfig};
pub use worker::{FetchOutcome, OfflineWorker};
