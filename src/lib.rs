//! Best-effort MIME type detection for Rust.
//!
//! Classifies a local file or remote `http(s)` resource by sniffing its
//! leading bytes against a table of known magic-byte signatures, falling
//! back to extension lookup when no signature matches or the content cannot
//! be read, and finally to `application/octet-stream`.
//!
//! # Overview
//!
//! - [`resolve_mime_type`] runs the full policy over a path or URL and
//!   always returns a type.
//! - [`sniff_mime_type`] is the pure signature matcher over a byte buffer.
//! - [`mime_from_extension`] / [`extension_from_mime`] expose the extension
//!   tables directly.
//! - [`is_document`], [`is_image`], [`is_audio`], [`is_video`] classify the
//!   resolved type by its top-level prefix.
//!
//! Detection is best-effort over a 12-byte prefix; this crate does not parse
//! full file structures or validate integrity.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() {
//! let mime = mime_sniff::resolve_mime_type("photo.jpg").await;
//! assert_eq!(mime, "image/jpeg");
//!
//! assert_eq!(
//!     mime_sniff::extension_from_mime("image/jpeg").as_deref(),
//!     Some(".jpg")
//! );
//! # }
//! ```

pub mod acquire;
pub mod error;
pub mod extension;
pub mod resolver;
pub mod signature;

// Re-export the public surface at the crate root for convenience.
pub use crate::error::AcquireError;
pub use crate::extension::{extension_from_mime, mime_from_extension};
pub use crate::resolver::{
    is_audio, is_document, is_image, is_video, media_category, resolve_detection,
    resolve_mime_type, Detection, DetectionMethod, MediaCategory, DEFAULT_MIME,
};
pub use crate::signature::{sniff_mime_type, Signature, SignatureGroup, SIGNATURES};

/// The crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
