//! Typed tag values.
//!
//! Tags keep their value as raw bytes in the document's byte order. This
//! module converts between those bytes and typed values:
//!
//! - [`TagValue::decode`] turns raw bytes into one vector per field type
//! - [`TagValue::encode`] produces raw bytes plus the field type and count
//!
//! Lengths are checked by [`Tag`](super::Tag) before decoding, so decoding
//! here only ever sees whole components.

use serde::{Deserialize, Serialize};

use super::byte_order::ByteOrder;
use super::tags::FieldType;

// =============================================================================
// Rationals
// =============================================================================

/// Unsigned rational: two LONGs, numerator first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Value as a float, or `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

/// Signed rational: two SLONGs, numerator first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SignedRational {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Value as a float, or `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

// =============================================================================
// TagValue
// =============================================================================

/// Decoded value of a tag, one variant per field type.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(Vec<u8>),
    /// Text up to the first NUL
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<Rational>),
    SignedByte(Vec<i8>),
    Undefined(Vec<u8>),
    SignedShort(Vec<i16>),
    SignedLong(Vec<i32>),
    SignedRational(Vec<SignedRational>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl TagValue {
    /// Field type this value is encoded as.
    pub fn field_type(&self) -> FieldType {
        match self {
            TagValue::Byte(_) => FieldType::Byte,
            TagValue::Ascii(_) => FieldType::Ascii,
            TagValue::Short(_) => FieldType::Short,
            TagValue::Long(_) => FieldType::Long,
            TagValue::Rational(_) => FieldType::Rational,
            TagValue::SignedByte(_) => FieldType::SignedByte,
            TagValue::Undefined(_) => FieldType::Undefined,
            TagValue::SignedShort(_) => FieldType::SignedShort,
            TagValue::SignedLong(_) => FieldType::SignedLong,
            TagValue::SignedRational(_) => FieldType::SignedRational,
            TagValue::Float(_) => FieldType::Float,
            TagValue::Double(_) => FieldType::Double,
        }
    }

    /// Decode raw bytes of the given type.
    ///
    /// Trailing bytes that do not form a whole component are ignored.
    pub fn decode(field_type: FieldType, bytes: &[u8], order: ByteOrder) -> Self {
        match field_type {
            FieldType::Byte => TagValue::Byte(bytes.to_vec()),
            FieldType::Undefined => TagValue::Undefined(bytes.to_vec()),
            FieldType::SignedByte => TagValue::SignedByte(bytes.iter().map(|&b| b as i8).collect()),
            FieldType::Ascii => {
                // Cut at the NUL terminator
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                TagValue::Ascii(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            FieldType::Short => {
                TagValue::Short(bytes.chunks_exact(2).map(|c| order.read_u16(c)).collect())
            }
            FieldType::SignedShort => TagValue::SignedShort(
                bytes
                    .chunks_exact(2)
                    .map(|c| order.read_u16(c) as i16)
                    .collect(),
            ),
            FieldType::Long => {
                TagValue::Long(bytes.chunks_exact(4).map(|c| order.read_u32(c)).collect())
            }
            FieldType::SignedLong => TagValue::SignedLong(
                bytes
                    .chunks_exact(4)
                    .map(|c| order.read_u32(c) as i32)
                    .collect(),
            ),
            FieldType::Float => TagValue::Float(
                bytes
                    .chunks_exact(4)
                    .map(|c| f32::from_bits(order.read_u32(c)))
                    .collect(),
            ),
            FieldType::Rational => TagValue::Rational(
                bytes
                    .chunks_exact(8)
                    .map(|c| Rational::new(order.read_u32(&c[..4]), order.read_u32(&c[4..])))
                    .collect(),
            ),
            FieldType::SignedRational => TagValue::SignedRational(
                bytes
                    .chunks_exact(8)
                    .map(|c| {
                        SignedRational::new(
                            order.read_u32(&c[..4]) as i32,
                            order.read_u32(&c[4..]) as i32,
                        )
                    })
                    .collect(),
            ),
            FieldType::Double => TagValue::Double(
                bytes
                    .chunks_exact(8)
                    .map(|c| f64::from_bits(order.read_u64(c)))
                    .collect(),
            ),
        }
    }

    /// Encode into raw bytes using `order`.
    ///
    /// Returns the component count alongside the bytes. ASCII values gain
    /// a NUL terminator, which is counted.
    pub fn encode(&self, order: ByteOrder) -> (usize, Vec<u8>) {
        let mut out = Vec::new();
        let count = match self {
            TagValue::Byte(v) | TagValue::Undefined(v) => {
                out.extend_from_slice(v);
                v.len()
            }
            TagValue::SignedByte(v) => {
                out.extend(v.iter().map(|&b| b as u8));
                v.len()
            }
            TagValue::Ascii(s) => {
                out.extend_from_slice(s.as_bytes());
                out.push(0);
                out.len()
            }
            TagValue::Short(v) => {
                v.iter().for_each(|&x| order.write_u16(&mut out, x));
                v.len()
            }
            TagValue::SignedShort(v) => {
                v.iter().for_each(|&x| order.write_u16(&mut out, x as u16));
                v.len()
            }
            TagValue::Long(v) => {
                v.iter().for_each(|&x| order.write_u32(&mut out, x));
                v.len()
            }
            TagValue::SignedLong(v) => {
                v.iter().for_each(|&x| order.write_u32(&mut out, x as u32));
                v.len()
            }
            TagValue::Float(v) => {
                v.iter().for_each(|&x| order.write_u32(&mut out, x.to_bits()));
                v.len()
            }
            TagValue::Rational(v) => {
                for r in v {
                    order.write_u32(&mut out, r.numerator);
                    order.write_u32(&mut out, r.denominator);
                }
                v.len()
            }
            TagValue::SignedRational(v) => {
                for r in v {
                    order.write_u32(&mut out, r.numerator as u32);
                    order.write_u32(&mut out, r.denominator as u32);
                }
                v.len()
            }
            TagValue::Double(v) => {
                v.iter().for_each(|&x| order.write_u64(&mut out, x.to_bits()));
                v.len()
            }
        };
        (count, out)
    }
}

// =============================================================================
// Tests
// =============================================================================
