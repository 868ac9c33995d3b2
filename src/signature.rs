//! Magic-byte signatures and the content-sniffing matcher.
//!
//! [`sniff_mime_type`] scans [`SIGNATURES`] in declaration order and returns
//! the MIME type of the first group containing a matching pattern. Table
//! order is therefore the tie-break if a buffer could satisfy more than one
//! group, though the built-in patterns are chosen to be distinguishing.

/// One candidate byte pattern for a MIME type.
///
/// `mask` selects the significant bits per position; when absent, every bit
/// must match. `offset` anchors the comparison away from the buffer start,
/// which ISO base media containers need (the identifying tag sits at byte 4
/// or 8, not 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    bytes: &'static [u8],
    mask: Option<&'static [u8]>,
    offset: usize,
}

impl Signature {
    /// A pattern compared exactly against the start of the buffer.
    pub const fn exact(bytes: &'static [u8]) -> Self {
        Self {
            bytes,
            mask: None,
            offset: 0,
        }
    }

    /// A pattern compared exactly, starting at `offset`.
    pub const fn at_offset(bytes: &'static [u8], offset: usize) -> Self {
        Self {
            bytes,
            mask: None,
            offset,
        }
    }

    /// A pattern where only the bits set in `mask` are significant.
    ///
    /// `mask` must have the same length as `bytes`; tables containing a
    /// mismatched pair are rejected at compile time.
    pub const fn masked(bytes: &'static [u8], mask: &'static [u8], offset: usize) -> Self {
        Self {
            bytes,
            mask: Some(mask),
            offset,
        }
    }

    /// Whether the buffer carries this pattern.
    ///
    /// A buffer shorter than `offset + bytes.len()` never matches; there is
    /// not enough data, which is a non-match rather than an error.
    pub fn matches(&self, buffer: &[u8]) -> bool {
        let Some(window) = buffer.get(self.offset..self.offset + self.bytes.len()) else {
            return false;
        };
        self.bytes.iter().enumerate().all(|(i, expected)| {
            let mask = self.mask.map_or(0xFF, |m| m[i]);
            window[i] & mask == expected & mask
        })
    }
}

/// A MIME type together with the alternative patterns that identify it.
///
/// Any one pattern matching is sufficient.
#[derive(Debug, Clone, Copy)]
pub struct SignatureGroup {
    mime_type: &'static str,
    signatures: &'static [Signature],
}

impl SignatureGroup {
    /// The MIME type this group identifies.
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// Whether any of the group's patterns matches the buffer.
    pub fn matches(&self, buffer: &[u8]) -> bool {
        self.signatures.iter().any(|sig| sig.matches(buffer))
    }
}

/// The built-in signature table, scanned in declaration order.
pub static SIGNATURES: &[SignatureGroup] = &[
    SignatureGroup {
        mime_type: "application/pdf",
        signatures: &[Signature::exact(b"%PDF")],
    },
    SignatureGroup {
        mime_type: "image/jpeg",
        signatures: &[
            Signature::exact(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Signature::exact(&[0xFF, 0xD8, 0xFF, 0xE1]),
            Signature::exact(&[0xFF, 0xD8, 0xFF, 0xE8]),
        ],
    },
    SignatureGroup {
        mime_type: "image/png",
        signatures: &[Signature::exact(&[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
        ])],
    },
    SignatureGroup {
        mime_type: "image/gif",
        signatures: &[Signature::exact(b"GIF87a"), Signature::exact(b"GIF89a")],
    },
    SignatureGroup {
        mime_type: "audio/mpeg",
        signatures: &[
            Signature::exact(b"ID3"),
            Signature::exact(&[0xFF, 0xFB]),
        ],
    },
    SignatureGroup {
        mime_type: "video/mp4",
        signatures: &[
            Signature::at_offset(b"ftyp", 4),
            Signature::at_offset(b"mp42", 8),
        ],
    },
    SignatureGroup {
        mime_type: "video/webm",
        signatures: &[Signature::exact(&[0x1A, 0x45, 0xDF, 0xA3])],
    },
];

/// Scan the signature table and return the first matching MIME type.
pub fn sniff_mime_type(buffer: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|group| group.matches(buffer))
        .map(|group| group.mime_type)
}

const fn table_is_well_formed(table: &[SignatureGroup]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let signatures = table[i].signatures;
        if signatures.is_empty() {
            return false;
        }
        let mut j = 0;
        while j < signatures.len() {
            if let Some(mask) = signatures[j].mask {
                if mask.len() != signatures[j].bytes.len() {
                    return false;
                }
            }
            j += 1;
        }
        i += 1;
    }
    true
}

// Mask length mismatches and empty groups are table-authoring defects;
// reject them when the table is built, not when a buffer happens to hit one.
const _: () = assert!(table_is_well_formed(SIGNATURES));
