//! End-to-end MIME type resolution.
//!
//! Resolution policy, in priority order:
//! 1. Sniff the content prefix against the signature table; a match is
//!    final and the extension is never consulted.
//! 2. On no match, or when the content cannot be acquired at all, fall back
//!    to the descriptor's extension.
//! 3. Fall back to [`DEFAULT_MIME`].
//!
//! Acquisition failures are recovered here and never surface to callers:
//! [`resolve_mime_type`] always returns a value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::acquire::{fetch_url_prefix, read_file_prefix};
use crate::extension::mime_from_extension;
use crate::signature::sniff_mime_type;

/// Returned when neither content sniffing nor extension lookup produces a
/// type.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// How a MIME type was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    /// A magic-byte signature matched the content prefix.
    Signature,
    /// The descriptor's extension was found in the extension table.
    Extension,
    /// Neither stage produced a type; [`DEFAULT_MIME`] was used.
    Default,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionMethod::Signature => write!(f, "Signature"),
            DetectionMethod::Extension => write!(f, "Extension"),
            DetectionMethod::Default => write!(f, "Default"),
        }
    }
}

/// A resolved MIME type together with how it was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// The resolved MIME type, never empty.
    pub mime_type: String,
    /// Which resolution stage produced it.
    pub method: DetectionMethod,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

/// Coarse media category of a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaCategory {
    /// `application/*` or exactly `text/plain`.
    Document,
    /// `image/*`.
    Image,
    /// `audio/*`.
    Audio,
    /// `video/*`.
    Video,
    /// Anything else, e.g. `text/html`.
    Other,
}

impl MediaCategory {
    /// Classify a MIME type string by its top-level type prefix.
    pub fn of_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaCategory::Image
        } else if mime.starts_with("audio/") {
            MediaCategory::Audio
        } else if mime.starts_with("video/") {
            MediaCategory::Video
        } else if mime.starts_with("application/") || mime == "text/plain" {
            MediaCategory::Document
        } else {
            MediaCategory::Other
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaCategory::Document => write!(f, "Document"),
            MediaCategory::Image => write!(f, "Image"),
            MediaCategory::Audio => write!(f, "Audio"),
            MediaCategory::Video => write!(f, "Video"),
            MediaCategory::Other => write!(f, "Other"),
        }
    }
}

/// Outcome of the content-sniffing stage.
enum Sniff {
    /// A signature matched; the result is final.
    Matched(&'static str),
    /// Content was readable but matched no signature.
    NoMatch,
    /// Content could not be acquired at all.
    Unavailable,
}

/// Resolve the MIME type of a local path or `http(s)` URL.
///
/// Never fails: acquisition errors fall back to extension lookup, and an
/// unknown or absent extension falls back to [`DEFAULT_MIME`].
pub async fn resolve_mime_type(descriptor: &str) -> String {
    resolve_detection(descriptor).await.mime_type
}

/// Resolve a MIME type together with its provenance.
pub async fn resolve_detection(descriptor: &str) -> Detection {
    let detection = match sniff_source(descriptor).await {
        Sniff::Matched(mime) => Detection {
            mime_type: mime.to_string(),
            method: DetectionMethod::Signature,
        },
        Sniff::NoMatch | Sniff::Unavailable => {
            match extension_of(descriptor).and_then(|ext| mime_from_extension(&ext)) {
                Some(mime) => Detection {
                    mime_type: mime.to_string(),
                    method: DetectionMethod::Extension,
                },
                None => Detection {
                    mime_type: DEFAULT_MIME.to_string(),
                    method: DetectionMethod::Default,
                },
            }
        }
    };

    tracing::debug!(%descriptor, mime_type = %detection.mime_type, method = %detection.method, "resolved MIME type");

    detection
}

/// Whether the descriptor resolves to a document type.
///
/// True for any `application/*` type or exactly `text/plain`. The check is
/// prefix-only, so `text/html` does not count while the
/// `application/octet-stream` default does.
pub async fn is_document(descriptor: &str) -> bool {
    let mime = resolve_mime_type(descriptor).await;
    mime.starts_with("application/") || mime == "text/plain"
}

/// Whether the descriptor resolves to an `image/*` type.
pub async fn is_image(descriptor: &str) -> bool {
    resolve_mime_type(descriptor).await.starts_with("image/")
}

/// Whether the descriptor resolves to an `audio/*` type.
pub async fn is_audio(descriptor: &str) -> bool {
    resolve_mime_type(descriptor).await.starts_with("audio/")
}

/// Whether the descriptor resolves to a `video/*` type.
pub async fn is_video(descriptor: &str) -> bool {
    resolve_mime_type(descriptor).await.starts_with("video/")
}

/// Resolve the descriptor and classify the result.
pub async fn media_category(descriptor: &str) -> MediaCategory {
    MediaCategory::of_mime(&resolve_mime_type(descriptor).await)
}

/// Acquire the content prefix and run the signature matcher over it.
async fn sniff_source(descriptor: &str) -> Sniff {
    let acquired = if is_remote(descriptor) {
        fetch_url_prefix(descriptor).await
    } else {
        read_file_prefix(descriptor).await
    };

    match acquired {
        Ok(prefix) => match sniff_mime_type(&prefix) {
            Some(mime) => Sniff::Matched(mime),
            None => Sniff::NoMatch,
        },
        Err(err) => {
            tracing::debug!(%descriptor, error = %err, "content unavailable, falling back to extension");
            Sniff::Unavailable
        }
    }
}

fn is_remote(descriptor: &str) -> bool {
    descriptor.starts_with("http://") || descriptor.starts_with("https://")
}

/// Derive the lowercase extension from a path or URL: the substring after
/// the last `.`, without the dot.
///
/// For remote descriptors the URL query and fragment are dropped first, so
/// `https://x.com/file.jpg?x=1` derives `jpg`. Local paths are taken as-is.
fn extension_of(descriptor: &str) -> Option<String> {
    let path;
    let candidate: &str = if is_remote(descriptor) {
        match url::Url::parse(descriptor) {
            Ok(parsed) => {
                path = parsed.path().to_string();
                path.as_str()
            }
            Err(_) => descriptor,
        }
    } else {
        descriptor
    };

    let (_, ext) = candidate.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://example.com/a.png"));
        assert!(is_remote("https://example.com/a.png"));
        assert!(!is_remote("/var/data/a.png"));
        assert!(!is_remote("httpfile.txt"));
    }

    #[test]
    fn test_extension_of_local_paths() {
        assert_eq!(extension_of("photo.jpg").as_deref(), Some("jpg"));
        assert_eq!(extension_of("/tmp/archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("REPORT.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension_of("noextension"), None);
        assert_eq!(extension_of("trailing.").as_deref(), Some(""));
    }

    #[test]
    fn test_extension_of_urls_strips_query_and_fragment() {
        assert_eq!(
            extension_of("https://x.com/file.jpg?x=1").as_deref(),
            Some("jpg")
        );
        assert_eq!(
            extension_of("https://x.com/file.mp4#t=30").as_deref(),
            Some("mp4")
        );
        assert_eq!(extension_of("https://x.com/download"), None);
    }

    #[test]
    fn test_legacy_derivation_would_miss_the_table() {
        // Without query stripping the derived extension carries the query
        // and the lookup fails; this is the behavior the stripping fixes.
        assert_eq!(mime_from_extension("jpg?x=1"), None);
    }

    #[test]
    fn test_media_category_of_mime() {
        assert_eq!(MediaCategory::of_mime("image/png"), MediaCategory::Image);
        assert_eq!(MediaCategory::of_mime("audio/mpeg"), MediaCategory::Audio);
        assert_eq!(MediaCategory::of_mime("video/webm"), MediaCategory::Video);
        assert_eq!(
            MediaCategory::of_mime("application/pdf"),
            MediaCategory::Document
        );
        assert_eq!(
            MediaCategory::of_mime("application/octet-stream"),
            MediaCategory::Document
        );
        assert_eq!(MediaCategory::of_mime("text/plain"), MediaCategory::Document);
        assert_eq!(MediaCategory::of_mime("text/html"), MediaCategory::Other);
    }

    #[test]
    fn test_detection_method_display() {
        assert_eq!(DetectionMethod::Signature.to_string(), "Signature");
        assert_eq!(DetectionMethod::Extension.to_string(), "Extension");
        assert_eq!(DetectionMethod::Default.to_string(), "Default");
    }

    #[test]
    fn test_detection_method_serde() {
        let json = serde_json::to_string(&DetectionMethod::Signature).unwrap();
        assert_eq!(json, "\"Signature\"");
        let method: DetectionMethod = serde_json::from_str("\"Default\"").unwrap();
        assert_eq!(method, DetectionMethod::Default);
    }

    #[test]
    fn test_detection_display_is_json() {
        let detection = Detection {
            mime_type: "image/png".to_string(),
            method: DetectionMethod::Signature,
        };
        let display = detection.to_string();
        assert!(display.contains("\"mime_type\":\"image/png\""));
        assert!(display.contains("\"method\":\"Signature\""));
    }

    #[tokio::test]
    async fn test_unreadable_path_uses_extension() {
        let detection = resolve_detection("/no/such/dir/missing.mp3").await;
        assert_eq!(detection.mime_type, "audio/mpeg");
        assert_eq!(detection.method, DetectionMethod::Extension);
    }

    #[tokio::test]
    async fn test_unreadable_unknown_extension_uses_default() {
        let detection = resolve_detection("/no/such/dir/missing.xyz").await;
        assert_eq!(detection.mime_type, DEFAULT_MIME);
        assert_eq!(detection.method, DetectionMethod::Default);
    }
}
