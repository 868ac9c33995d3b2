//! Error types for content acquisition.

use thiserror::Error;

/// Errors raised while acquiring a content prefix.
///
/// These never escape [`resolve_mime_type`](crate::resolve_mime_type): an
/// acquisition failure only switches resolution over to the extension
/// fallback. The type exists so the collaborators report failure explicitly
/// instead of relying on a catch-all.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// An I/O error occurred while reading a local file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP error occurred while fetching a remote resource.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Results using AcquireError.
pub type Result<T> = std::result::Result<T, AcquireError>;
