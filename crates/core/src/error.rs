//! Error types for pdfsections.

use thiserror::Error;

/// Primary error type for page loading, extraction setup and storage.
///
/// The extraction core itself never fails once pages are loaded: a document
/// without a recognisable start heading yields an empty section list.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed page {page}: {msg}")]
    MalformedPage { page: usize, msg: String },

    #[error("unknown publisher layout: {0}")]
    UnknownPublisher(String),

    #[error("{publisher} layout does not support {columns} column(s)")]
    InvalidColumns {
        publisher: &'static str,
        columns: usize,
    },

    #[error("store error: {0}")]
    Store(String),

    #[error("could not start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
