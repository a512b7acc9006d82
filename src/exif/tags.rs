//! EXIF field type and tag id definitions.
//!
//! This module defines the vocabulary of the document model:
//! - Field types that determine how a tag's raw bytes are encoded
//! - Well-known tag ids and the IFD each one lives in by default
//!
//! The tag table is deliberately small; tags it does not list are still
//! stored and returned untouched, they simply have no name.

use serde::{Deserialize, Serialize};

use super::ifd::IfdId;

// =============================================================================
// Field Types
// =============================================================================

/// TIFF 6.0 field types that determine how tag values are encoded.
///
/// Each field type has a fixed component size in bytes, which is what ties
/// a tag's component count to the length of its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit ASCII character, NUL-terminated (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Two unsigned 32-bit integers, numerator then denominator (8 bytes)
    Rational = 5,

    /// Signed 8-bit integer (1 byte)
    SignedByte = 6,

    /// Opaque byte data (1 byte per element)
    Undefined = 7,

    /// Signed 16-bit integer (2 bytes)
    SignedShort = 8,

    /// Signed 32-bit integer (4 bytes)
    SignedLong = 9,

    /// Two signed 32-bit integers (8 bytes)
    SignedRational = 10,

    /// IEEE single precision float (4 bytes)
    Float = 11,

    /// IEEE double precision float (8 bytes)
    Double = 12,
}

impl FieldType {
    /// Maximum bytes that can be stored inline in an IFD entry.
    ///
    /// The value/offset field of a classic TIFF entry is 4 bytes.
    pub const INLINE_THRESHOLD: usize = 4;

    /// Size of a single component of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte
            | FieldType::Ascii
            | FieldType::SignedByte
            | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SignedShort => 2,
            FieldType::Long | FieldType::SignedLong | FieldType::Float => 4,
            FieldType::Rational | FieldType::SignedRational | FieldType::Double => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for unknown type values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            6 => Some(FieldType::SignedByte),
            7 => Some(FieldType::Undefined),
            8 => Some(FieldType::SignedShort),
            9 => Some(FieldType::SignedLong),
            10 => Some(FieldType::SignedRational),
            11 => Some(FieldType::Float),
            12 => Some(FieldType::Double),
            _ => None,
        }
    }

    /// Get the numeric type code written into IFD entries.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Byte length of `count` components of this type.
    ///
    /// Returns `None` if the length does not fit in `usize`.
    #[inline]
    pub fn byte_len(self, count: u32) -> Option<usize> {
        self.size_in_bytes().checked_mul(count as usize)
    }

    /// Check if `count` components of this type fit inline in an IFD entry.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        self.byte_len(count)
            .is_some_and(|len| len <= Self::INLINE_THRESHOLD)
    }
}

// =============================================================================
// EXIF Tags
// =============================================================================

/// Well-known EXIF tag ids.
///
/// Only the tags the model itself relies on, plus the common ones shown by
/// the `exifdoc` tool, are named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ExifTag {
    // -------------------------------------------------------------------------
    // Image Structure (IFD0 / IFD1)
    // -------------------------------------------------------------------------
    /// Image width in pixels
    ImageWidth = 0x0100,

    /// Image height (length) in pixels
    ImageLength = 0x0101,

    /// Compression scheme (6 = JPEG thumbnail, 1 = uncompressed strips)
    Compression = 0x0103,

    /// Free-form description
    ImageDescription = 0x010E,

    /// Camera manufacturer
    Make = 0x010F,

    /// Camera model
    Model = 0x0110,

    /// Byte offsets of uncompressed strips
    StripOffsets = 0x0111,

    /// Orientation of the image relative to the camera
    Orientation = 0x0112,

    /// Rows per strip
    RowsPerStrip = 0x0116,

    /// Byte counts of uncompressed strips
    StripByteCounts = 0x0117,

    /// File change date and time
    DateTime = 0x0132,

    /// Offset of the compressed (JPEG) thumbnail
    JpegInterchangeFormat = 0x0201,

    /// Length of the compressed (JPEG) thumbnail
    JpegInterchangeFormatLength = 0x0202,

    // -------------------------------------------------------------------------
    // IFD Pointers
    // -------------------------------------------------------------------------
    /// Offset of the Exif IFD
    ExifIfdPointer = 0x8769,

    /// Offset of the GPS IFD
    GpsIfdPointer = 0x8825,

    /// Offset of the Interoperability IFD
    InteroperabilityIfdPointer = 0xA005,

    // -------------------------------------------------------------------------
    // Exif IFD
    // -------------------------------------------------------------------------
    /// Date and time the original image was taken
    DateTimeOriginal = 0x9003,

    /// User comment, prefixed with an 8-byte character code
    UserComment = 0x9286,

    /// Width of the main image as recorded by the camera
    PixelXDimension = 0xA002,

    /// Height of the main image as recorded by the camera
    PixelYDimension = 0xA003,

    // -------------------------------------------------------------------------
    // GPS IFD
    // -------------------------------------------------------------------------
    /// GPS tag version
    GpsVersionId = 0x0000,

    /// North or south latitude
    GpsLatitudeRef = 0x0001,

    /// Latitude as degrees, minutes, seconds
    GpsLatitude = 0x0002,

    /// East or west longitude
    GpsLongitudeRef = 0x0003,

    /// Longitude as degrees, minutes, seconds
    GpsLongitude = 0x0004,
}

impl ExifTag {
    /// Create an ExifTag from its numeric value.
    ///
    /// Returns `None` for tags not in the table. GPS tag ids overlap with
    /// nothing else in the table, so the lookup is unambiguous.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0100 => Some(ExifTag::ImageWidth),
            0x0101 => Some(ExifTag::ImageLength),
            0x0103 => Some(ExifTag::Compression),
            0x010E => Some(ExifTag::ImageDescription),
            0x010F => Some(ExifTag::Make),
            0x0110 => Some(ExifTag::Model),
            0x0111 => Some(ExifTag::StripOffsets),
            0x0112 => Some(ExifTag::Orientation),
            0x0116 => Some(ExifTag::RowsPerStrip),
            0x0117 => Some(ExifTag::StripByteCounts),
            0x0132 => Some(ExifTag::DateTime),
            0x0201 => Some(ExifTag::JpegInterchangeFormat),
            0x0202 => Some(ExifTag::JpegInterchangeFormatLength),
            0x8769 => Some(ExifTag::ExifIfdPointer),
            0x8825 => Some(ExifTag::GpsIfdPointer),
            0xA005 => Some(ExifTag::InteroperabilityIfdPointer),
            0x9003 => Some(ExifTag::DateTimeOriginal),
            0x9286 => Some(ExifTag::UserComment),
            0xA002 => Some(ExifTag::PixelXDimension),
            0xA003 => Some(ExifTag::PixelYDimension),
            0x0000 => Some(ExifTag::GpsVersionId),
            0x0001 => Some(ExifTag::GpsLatitudeRef),
            0x0002 => Some(ExifTag::GpsLatitude),
            0x0003 => Some(ExifTag::GpsLongitudeRef),
            0x0004 => Some(ExifTag::GpsLongitude),
            _ => None,
        }
    }

    /// Get the numeric tag ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// IFD this tag is declared in by the EXIF standard.
    ///
    /// Structure tags are reported in IFD0; the same ids are legal in IFD1.
    pub const fn default_ifd(self) -> IfdId {
        match self {
            ExifTag::DateTimeOriginal
            | ExifTag::UserComment
            | ExifTag::PixelXDimension
            | ExifTag::PixelYDimension
            | ExifTag::InteroperabilityIfdPointer => IfdId::Exif,
            ExifTag::JpegInterchangeFormat | ExifTag::JpegInterchangeFormatLength => {
                IfdId::Thumbnail
            }
            ExifTag::GpsVersionId
            | ExifTag::GpsLatitudeRef
            | ExifTag::GpsLatitude
            | ExifTag::GpsLongitudeRef
            | ExifTag::GpsLongitude => IfdId::Gps,
            _ => IfdId::Primary,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
