//! Extension-to-MIME lookup tables.

/// Extension to canonical MIME type, in declaration order.
///
/// A slice of pairs rather than a map because the reverse lookup is
/// order-dependent: [`extension_from_mime`] returns the first entry whose
/// value matches, so `jpg` wins over `jpeg` for `image/jpeg`. That tie-break
/// is part of the contract.
static EXTENSIONS: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("txt", "text/plain"),
    ("rtf", "application/rtf"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
];

/// Look up the MIME type for a file extension (without leading dot).
///
/// Case-insensitive: `JPG` and `jpg` resolve identically.
pub fn mime_from_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, mime)| *mime)
}

/// Look up the preferred extension for a MIME type, with a leading dot.
///
/// Case-insensitive on the MIME side. Returns the first declaration-order
/// extension mapping to the type, so `image/jpeg` yields `.jpg` rather than
/// `.jpeg`.
pub fn extension_from_mime(mime: &str) -> Option<String> {
    let mime = mime.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(_, value)| *value == mime)
        .map(|(ext, _)| format!(".{ext}"))
}
