use thiserror::Error;

/// Centralized error type for vitrina-cache.
#[derive(Debug, Error, Clone)]
pub enum CacheError {
    #[error("cache storage failure: {0}")]
    Storage(String),
}

impl CacheError {
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Transport-level failure: the origin never answered.
///
/// HTTP answers with error statuses are not errors here — a 404 is a
/// resolved response and reaches the page as-is. Only this, the
/// network actually failing, triggers the cache fallback.
#[derive(Debug, Error, Clone)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out")]
    Timeout,
}
