#![forbid(unsafe_code)]

//! # vitrina
//!
//! Facade crate for the association site's client runtime: the offline
//! cache worker and the fullscreen slideshow controller, plus the
//! deployment defaults tying them to the site.
//!
//! ## Quick start
//!
//! ```ignore
//! use vitrina::prelude::*;
//!
//! let resolver = BaseUrlResolver::new(base_url)?;
//! let worker = OfflineWorker::new(storage, net, defaults::worker_config(&resolver)?);
//! worker.install().await?;
//! worker.activate().await?;
//! ```

pub mod defaults;

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod cache {
    pub use vitrina_cache::*;
}

pub mod core {
    pub use vitrina_core::*;
}

pub mod platform {
    pub use vitrina_platform::*;
}

pub mod slideshow {
    pub use vitrina_slideshow::*;
}

pub mod prelude {
    pub use vitrina_cache::{
        CacheName, CacheStorage, Fetch, FetchOutcome, FetchRequest, MemCacheStorage, Method,
        OfflineWorker, StoredResponse, WorkerConfig, WorkerEvent,
    };
    pub use vitrina_core::{AssetResolver, BaseUrlResolver, ImageRef, ImageSource, StaticImages};
    pub use vitrina_platform::{
        DeviceClass, FullscreenDriver, FullscreenHost, PointerTraits, ScrollHost, ScrollLock,
        Vendor,
    };
    pub use vitrina_slideshow::{Phase, Slideshow, SlideshowConfig, SlideshowEvent};

    pub use crate::defaults;
}
