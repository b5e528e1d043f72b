#![forbid(unsafe_code)]

//! # vitrina-platform
//!
//! Capability contracts for the hosting rendering engine.
//!
//! The fullscreen API is modeled as a capability lookup, not browser
//! sniffing: an ordered list of vendor variants is probed once and the
//! first present one is used for request/exit/query uniformly. A host
//! with no variant at all degrades to no-ops — callers treat fullscreen
//! as best-effort everywhere.
//!
//! Also here: the pointer/touch device classification that picks the
//! slideshow interaction model, and the RAII scroll lock that suspends
//! background scrolling while an overlay is up.

mod device;
mod fullscreen;
mod scroll;

pub use device::{DeviceClass, PointerTraits};
pub use fullscreen::{FullscreenDenied, FullscreenDriver, FullscreenHost, Vendor};
pub use scroll::{ScrollHost, ScrollLock};
