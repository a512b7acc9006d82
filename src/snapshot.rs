//! JSON snapshots of EXIF documents.
//!
//! A snapshot captures everything a document holds, including the reader's
//! derived scalars and section list, so a document can be inspected or
//! edited outside the process that parsed the image. Deserialization re-checks
//! tag lengths and IFD placement, so a loaded document is as sound as one
//! built through the API.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SnapshotError;
use crate::exif::ExifData;

/// Serialize a document to pretty-printed JSON.
pub fn to_json(data: &ExifData) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Deserialize a document.
///
/// # Errors
/// `Json` if the text is not a document snapshot or breaks a tag or IFD
/// invariant.
pub fn from_json(json: &str) -> Result<ExifData, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Write a snapshot file.
pub fn save(data: &ExifData, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let json = to_json(data)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved snapshot");
    Ok(())
}

/// Read a snapshot file.
pub fn load(path: impl AsRef<Path>) -> Result<ExifData, SnapshotError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let data = from_json(&json)?;
    debug!(path = %path.display(), "loaded snapshot");
    Ok(data)
}
