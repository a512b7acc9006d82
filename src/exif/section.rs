//! Parse-section records.
//!
//! Readers note where each JPEG marker segment sat in the source stream.
//! The document only stores the list so writers and diagnostics can see
//! the original layout; it never interprets it.

use serde::{Deserialize, Serialize};

/// JPEG APP1 marker, the segment that carries EXIF.
pub const MARKER_APP1: u8 = 0xE1;

/// Location of one marker segment in the parsed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JpegSection {
    /// Byte offset of the segment start
    pub offset: u64,

    /// Segment length in bytes, marker included
    pub length: u64,

    /// Marker byte identifying the segment kind (e.g. 0xE1 for APP1)
    pub marker: u8,
}

impl JpegSection {
    pub const fn new(offset: u64, length: u64, marker: u8) -> Self {
        Self {
            offset,
            length,
            marker,
        }
    }

    /// Offset one past the last byte of the segment.
    #[inline]
    pub const fn end(&self) -> u64 {
        self.offset.saturating_add(self.length)
    }

    #[inline]
    pub const fn is_app1(&self) -> bool {
        self.marker == MARKER_APP1
    }
}
