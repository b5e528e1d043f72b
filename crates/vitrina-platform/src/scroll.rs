use std::sync::Arc;

use tracing::trace;

/// Access to the page's background scroll style.
pub trait ScrollHost: Send + Sync {
    /// Current overflow value of the scrolling element.
    fn overflow(&self) -> String;

    fn set_overflow(&self, value: &str);
}

/// RAII suspension of background scrolling.
///
/// Saves the prior overflow value on acquisition and restores it on
/// `Drop`, so restoration holds on every exit path — forced closes and
/// panics included. Single-use; acquire a fresh lock per overlay.
#[must_use = "dropping the lock immediately restores scrolling"]
pub struct ScrollLock {
    host: Arc<dyn ScrollHost>,
    saved: String,
}

impl ScrollLock {
    pub fn acquire(host: Arc<dyn ScrollHost>) -> Self {
        let saved = host.overflow();
        host.set_overflow("hidden");
        trace!(prior = %saved, "scroll locked");
        Self { host, saved }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.host.set_overflow(&self.saved);
        trace!(restored = %self.saved, "scroll unlocked");
    }
}

impl std::fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLock")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}
