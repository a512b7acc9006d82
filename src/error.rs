use thiserror::Error;

use crate::exif::FieldType;

/// Errors raised when building or decoding a single tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// Raw value length disagrees with the component count and field type
    #[error(
        "Value length mismatch for tag 0x{tag:04X}: {count} x {field_type:?} needs {expected} bytes, got {actual}"
    )]
    ValueLengthMismatch {
        tag: u16,
        field_type: FieldType,
        count: u32,
        expected: usize,
        actual: usize,
    },

    /// Unknown field type code in an IFD entry
    #[error("Unknown field type: {0}")]
    UnknownFieldType(u16),

    /// Value has more components than a 32-bit count can describe
    #[error("Component count overflow for tag 0x{tag:04X}")]
    CountOverflow { tag: u16 },

    /// ASCII tag built from text containing non-ASCII characters
    #[error("Non-ASCII text for ASCII tag 0x{tag:04X}")]
    NonAsciiText { tag: u16 },

    /// ASCII tag built from text with a NUL before its terminator
    #[error("Interior NUL in text for ASCII tag 0x{tag:04X}")]
    InteriorNul { tag: u16 },

    /// Tag holds a different type than the accessor expects
    #[error("Type mismatch for tag 0x{tag:04X}: expected {expected}, got {actual:?}")]
    TypeMismatch {
        tag: u16,
        expected: &'static str,
        actual: FieldType,
    },
}

/// Errors raised by document and directory operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Strip index past the end of the strip sequence
    #[error("Strip index out of range: index {index}, strip count is {count}")]
    StripIndexOutOfRange { index: usize, count: usize },

    /// IFD index outside the known directory slots
    #[error("Invalid IFD index: {0}")]
    InvalidIfd(usize),

    /// Directory stored in the slot of another IFD
    #[error("IFD slot {slot} holds the directory for IFD {directory}")]
    IfdMismatch { slot: usize, directory: usize },

    /// Tag stored in a directory it does not belong to
    #[error("Tag 0x{tag:04X} in IFD {directory} declares IFD {declared}")]
    TagIfdMismatch {
        tag: u16,
        directory: usize,
        declared: usize,
    },

    /// Directory key differs from the id of the tag stored under it
    #[error("Tag 0x{tag:04X} stored under key 0x{key:04X}")]
    TagKeyMismatch { key: u16, tag: u16 },
}

/// Errors raised while persisting or loading document snapshots
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed snapshot JSON, or a document that breaks its invariants
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err.to_string())
    }
}
