use thiserror::Error;

/// Centralized error type for vitrina-core.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    #[error("invalid asset path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type CoreResult<T> = Result<T, CoreError>;
