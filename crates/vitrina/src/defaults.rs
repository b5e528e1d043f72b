//! Deployment defaults for the association site.
//!
//! The cache name is the invalidation mechanism: bump the version
//! suffix whenever a precached asset changes.

use std::time::Duration;

use vitrina_cache::{CacheName, WorkerConfig};
use vitrina_core::{AssetResolver, CoreResult};

/// Current cache version. Bump when assets change.
pub const CACHE_NAME: &str = "vitrina-cache-v1";

/// The designated offline fallback document.
pub const OFFLINE_PATH: &str = "/offline.html";

/// Assets populated at install time: root document, manifest, icon set,
/// offline page.
pub const PRECACHE_PATHS: &[&str] = &[
    "/",
    "/index.html",
    "/manifest.json",
    "/images/favicon-32x32.png",
    "/images/android-chrome-192x192.png",
    "/images/android-chrome-512x512.png",
    OFFLINE_PATH,
];

/// Advance period of the gallery slideshow.
pub const ADVANCE_INTERVAL: Duration = Duration::from_secs(5);

/// Build the offline worker configuration for this deployment, running
/// the precache manifest through the site's asset resolver.
///
/// # Errors
///
/// Returns [`CoreError`](vitrina_core::CoreError) if a manifest path
/// cannot be resolved under the deployed base.
pub fn worker_config(resolver: &dyn AssetResolver) -> CoreResult<WorkerConfig> {
    Ok(WorkerConfig {
        cache_name: CacheName::new(CACHE_NAME),
        offline_url: resolver.resolve(OFFLINE_PATH)?,
        precache: PRECACHE_PATHS
            .iter()
            .map(|path| resolver.resolve(path))
            .collect::<CoreResult<Vec<_>>>()?,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use url::Url;
    use vitrina_core::BaseUrlResolver;

    use super::*;

    #[rstest]
    fn config_resolves_under_deployed_base() {
        let resolver =
            BaseUrlResolver::new(Url::parse("https://assoc.example/site").unwrap()).unwrap();
        let config = worker_config(&resolver).unwrap();

        assert_eq!(config.cache_name, CacheName::new(CACHE_NAME));
        assert_eq!(
            config.offline_url.as_str(),
            "https://assoc.example/site/offline.html"
        );
        assert_eq!(config.precache.len(), PRECACHE_PATHS.len());
        assert!(config.precache.contains(&config.offline_url));
        assert_eq!(
            config.precache[0].as_str(),
            "https://assoc.example/site/"
        );
    }

    #[rstest]
    fn offline_page_is_always_precached() {
        assert!(PRECACHE_PATHS.contains(&OFFLINE_PATH));
    }
}
