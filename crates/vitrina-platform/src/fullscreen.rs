use thiserror::Error;
use tracing::debug;

/// Fullscreen API variant exposed by the rendering engine.
///
/// Probed in the order of [`Vendor::PROBE_ORDER`]; the standard API wins
/// when present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vendor {
    Standard,
    Webkit,
    Ms,
}

impl Vendor {
    pub const PROBE_ORDER: [Vendor; 3] = [Vendor::Standard, Vendor::Webkit, Vendor::Ms];
}

/// The engine refused a fullscreen request or exit.
///
/// Never surfaced to users; callers downgrade to in-page presentation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("fullscreen denied: {reason}")]
pub struct FullscreenDenied {
    pub reason: String,
}

impl FullscreenDenied {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// What the embedder binds to the real engine.
///
/// One method set per vendor variant; `supports` says which variants
/// exist on this host at all.
pub trait FullscreenHost: Send + Sync {
    fn supports(&self, vendor: Vendor) -> bool;

    /// # Errors
    ///
    /// Returns [`FullscreenDenied`] when the engine rejects the request
    /// (e.g. no user gesture, permission policy).
    fn request(&self, vendor: Vendor) -> Result<(), FullscreenDenied>;

    /// # Errors
    ///
    /// Returns [`FullscreenDenied`] when the engine rejects the exit call.
    fn exit(&self, vendor: Vendor) -> Result<(), FullscreenDenied>;

    /// Whether this vendor variant currently reports a fullscreen element.
    fn is_active(&self, vendor: Vendor) -> bool;
}

/// Uniform, best-effort front over whatever vendor variant the host has.
///
/// The variant is resolved once at construction. All calls swallow
/// rejection: fullscreen being denied or absent is a degraded mode, not
/// an error.
#[derive(Debug)]
pub struct FullscreenDriver<H> {
    host: H,
    vendor: Option<Vendor>,
}

impl<H: FullscreenHost> FullscreenDriver<H> {
    pub fn new(host: H) -> Self {
        let vendor = Vendor::PROBE_ORDER
            .into_iter()
            .find(|v| host.supports(*v));
        debug!(?vendor, "resolved fullscreen capability");
        Self { host, vendor }
    }

    /// Resolved vendor variant, `None` when the host has no fullscreen
    /// API at all.
    #[must_use]
    pub fn vendor(&self) -> Option<Vendor> {
        self.vendor
    }

    /// Request fullscreen. Returns whether the engine granted it.
    pub fn request(&self) -> bool {
        match self.vendor {
            Some(vendor) => match self.host.request(vendor) {
                Ok(()) => true,
                Err(denied) => {
                    debug!(?vendor, reason = %denied.reason, "fullscreen request rejected");
                    false
                }
            },
            None => false,
        }
    }

    /// Exit fullscreen. Rejection is swallowed; the authoritative exit
    /// signal is the host's change notification, not this call.
    pub fn exit(&self) {
        if let Some(vendor) = self.vendor {
            if let Err(denied) = self.host.exit(vendor) {
                debug!(?vendor, reason = %denied.reason, "fullscreen exit rejected");
            }
        }
    }

    /// True if any vendor variant reports an active fullscreen element.
    ///
    /// Deliberately wider than the resolved variant: some engines report
    /// the element only through a prefixed property.
    #[must_use]
    pub fn is_active(&self) -> bool {
        Vendor::PROBE_ORDER
            .into_iter()
            .any(|v| self.host.supports(v) && self.host.is_active(v))
    }
}
