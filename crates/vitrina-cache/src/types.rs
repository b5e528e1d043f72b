use std::fmt;

use bytes::Bytes;
use url::Url;

/// Versioned cache identifier, e.g. `vitrina-cache-v1`.
///
/// Bumping the version token invalidates every previously stored cache
/// at the next activation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheName(String);

impl CacheName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Request method as far as interception cares: GET is intercepted,
/// everything else passes through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl Method {
    #[must_use]
    pub fn is_get(self) -> bool {
        matches!(self, Method::Get)
    }
}

/// A fetch observed by the worker.
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub url: Url,
    pub method: Method,
}

impl FetchRequest {
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self {
            url,
            method: Method::Get,
        }
    }

    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self { url, method }
    }
}

/// A response as the cache stores it: the body plus enough metadata to
/// replay it.
///
/// Every HTTP answer is a response, error statuses included — a 404 is
/// something the origin said, not a network failure.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredResponse {
    pub url: Url,
    pub status: u16,
    pub body: Bytes,
    pub content_type: Option<String>,
}

impl StoredResponse {
    #[must_use]
    pub fn new(url: Url, body: Bytes) -> Self {
        Self {
            url,
            status: 200,
            body,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Static configuration of the offline worker.
#[derive(Clone, Debug)]
pub struct WorkerConfig {
    /// Current cache version; everything stored under another name is
    /// garbage on activation.
    pub cache_name: CacheName,
    /// The designated offline document, served when neither network nor
    /// an exact cache match can satisfy a GET. Must be part of
    /// `precache` to ever be servable.
    pub offline_url: Url,
    /// Assets populated once at install time.
    pub precache: Vec<Url>,
}
