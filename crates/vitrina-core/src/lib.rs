#![forbid(unsafe_code)]

//! # vitrina-core
//!
//! Shared contracts for the vitrina site runtime.
//!
//! Higher layers depend on two collaborators they do not implement:
//! an [`AssetResolver`] that maps site-relative paths to fully qualified
//! URLs under the deployed base, and an [`ImageSource`] that supplies the
//! gallery image list. Both are trait seams so the hosting shell decides
//! where paths and images actually come from.

mod error;
mod images;
mod resolver;

pub use error::{CoreError, CoreResult};
pub use images::{ImageRef, ImageSource, StaticImages};
pub use resolver::{AssetResolver, BaseUrlResolver};
