use url::Url;

use crate::error::{CoreError, CoreResult};

/// Maps a site-relative path to a fully qualified URL under the deployed
/// base path.
///
/// The cache worker resolves its precache manifest through this, and the
/// slideshow resolves image references through it. Neither implements it;
/// the hosting shell supplies the deployment base.
pub trait AssetResolver: Send + Sync {
    /// # Errors
    ///
    /// Returns [`CoreError`] if the path cannot be expressed as a URL
    /// under the deployed base.
    fn resolve(&self, path: &str) -> CoreResult<Url>;
}

/// Resolver that joins paths under a fixed base URL.
///
/// Inputs that are already absolute (`http`/`https`) or already live under
/// the base pass through untouched. Everything else has leading slashes
/// stripped and is joined under the base.
#[derive(Clone, Debug)]
pub struct BaseUrlResolver {
    base: Url,
}

impl BaseUrlResolver {
    /// # Errors
    ///
    /// Returns [`CoreError`] if the base cannot serve as a join root
    /// (e.g. a `data:` URL).
    pub fn new(base: Url) -> CoreResult<Self> {
        if base.cannot_be_a_base() {
            return Err(CoreError::InvalidPath {
                path: base.to_string(),
                reason: "base URL cannot be a join root".into(),
            });
        }
        // Joining treats the last segment as a file unless the path ends
        // with a slash, so normalize once here.
        let mut base = base;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl AssetResolver for BaseUrlResolver {
    fn resolve(&self, path: &str) -> CoreResult<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        if path.starts_with(self.base.as_str()) {
            return Ok(Url::parse(path)?);
        }

        let cleaned = path.trim_start_matches('/');
        Ok(self.base.join(cleaned)?)
    }
}
