//! Byte order of an EXIF document.
//!
//! An EXIF block declares its endianness once, in the TIFF header that
//! precedes the first IFD:
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! ```
//!
//! Every multi-byte numeric field of every tag in the document is encoded
//! with that single order, so the document stores it once and hands it to
//! tags whenever values are decoded or encoded.

use serde::{Deserialize, Serialize};

use crate::io::{
    read_u16_be, read_u16_le, read_u32_be, read_u32_le, read_u64_be, read_u64_le, write_u16_be,
    write_u16_le, write_u32_be, write_u32_le, write_u64_be, write_u64_le,
};

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: [u8; 2] = [0x49, 0x49];

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: [u8; 2] = [0x4D, 0x4D];

/// Byte order (endianness) of an EXIF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Big-endian ("MM" = Motorola)
    BigEndian,
    /// Little-endian ("II" = Intel)
    LittleEndian,
}

impl ByteOrder {
    /// Identify the byte order from the two marker bytes of a TIFF header.
    ///
    /// Returns `None` if the bytes are neither `II` nor `MM`.
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match marker {
            BYTE_ORDER_LITTLE_ENDIAN => Some(ByteOrder::LittleEndian),
            BYTE_ORDER_BIG_ENDIAN => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// The two marker bytes a writer emits at the start of the TIFF header.
    #[inline]
    pub const fn marker(self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => BYTE_ORDER_LITTLE_ENDIAN,
            ByteOrder::BigEndian => BYTE_ORDER_BIG_ENDIAN,
        }
    }

    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    /// Read a u64 from a byte slice using this byte order.
    #[inline]
    pub fn read_u64(self, bytes: &[u8]) -> u64 {
        match self {
            ByteOrder::LittleEndian => read_u64_le(bytes),
            ByteOrder::BigEndian => read_u64_be(bytes),
        }
    }

    /// Append a u16 using this byte order.
    #[inline]
    pub fn write_u16(self, out: &mut Vec<u8>, value: u16) {
        match self {
            ByteOrder::LittleEndian => write_u16_le(out, value),
            ByteOrder::BigEndian => write_u16_be(out, value),
        }
    }

    /// Append a u32 using this byte order.
    #[inline]
    pub fn write_u32(self, out: &mut Vec<u8>, value: u32) {
        match self {
            ByteOrder::LittleEndian => write_u32_le(out, value),
            ByteOrder::BigEndian => write_u32_be(out, value),
        }
    }

    /// Append a u64 using this byte order.
    #[inline]
    pub fn write_u64(self, out: &mut Vec<u8>, value: u64) {
        match self {
            ByteOrder::LittleEndian => write_u64_le(out, value),
            ByteOrder::BigEndian => write_u64_be(out, value),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
