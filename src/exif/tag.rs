//! A single EXIF tag entry.
//!
//! A [`Tag`] is identified by its 16-bit id and the IFD it belongs to, and
//! carries a field type, a component count, and the raw value bytes exactly
//! as they appear in the EXIF block. Raw bytes are not byte-order decoded;
//! accessors take the document's [`ByteOrder`] when a typed view is needed.
//!
//! Tags are immutable once built. Changing a value means building a new tag
//! and inserting it in place of the old one.

use serde::{Deserialize, Serialize};

use crate::error::TagError;

use super::byte_order::ByteOrder;
use super::ifd::IfdId;
use super::tags::FieldType;
use super::values::{Rational, TagValue};

/// One typed, counted metadata entry.
///
/// Deserialization goes through [`Tag::new`], so a decoded tag always has a
/// value length that matches its type and count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTag")]
pub struct Tag {
    id: u16,
    ifd: IfdId,
    field_type: FieldType,
    count: u32,
    value: Vec<u8>,
}

/// Unchecked serialized form of a [`Tag`].
#[derive(Deserialize)]
struct RawTag {
    id: u16,
    ifd: IfdId,
    field_type: FieldType,
    count: u32,
    value: Vec<u8>,
}

impl TryFrom<RawTag> for Tag {
    type Error = TagError;

    fn try_from(raw: RawTag) -> Result<Self, Self::Error> {
        Tag::new(raw.id, raw.ifd, raw.field_type, raw.count, raw.value)
    }
}

impl Tag {
    /// Build a tag from its raw parts.
    ///
    /// # Errors
    /// `ValueLengthMismatch` if `value` is not exactly `count` components of
    /// `field_type`.
    pub fn new(
        id: u16,
        ifd: IfdId,
        field_type: FieldType,
        count: u32,
        value: Vec<u8>,
    ) -> Result<Self, TagError> {
        let tag = Tag {
            id,
            ifd,
            field_type,
            count,
            value,
        };
        tag.check_length()?;
        Ok(tag)
    }

    /// Build a tag from a raw IFD entry, where the type is still a number.
    ///
    /// # Errors
    /// `UnknownFieldType` for type codes outside TIFF 6.0, otherwise as
    /// [`Tag::new`].
    pub fn from_raw(
        id: u16,
        ifd: IfdId,
        field_type: u16,
        count: u32,
        value: Vec<u8>,
    ) -> Result<Self, TagError> {
        let field_type =
            FieldType::from_u16(field_type).ok_or(TagError::UnknownFieldType(field_type))?;
        Self::new(id, ifd, field_type, count, value)
    }

    /// Build a tag by encoding a typed value with `order`.
    ///
    /// # Errors
    /// - `NonAsciiText` for ASCII values outside 7-bit ASCII
    /// - `InteriorNul` for ASCII values with a NUL before the terminator
    /// - `CountOverflow` if the component count exceeds `u32::MAX`
    pub fn from_value(
        id: u16,
        ifd: IfdId,
        value: &TagValue,
        order: ByteOrder,
    ) -> Result<Self, TagError> {
        if let TagValue::Ascii(text) = value {
            if !text.is_ascii() {
                return Err(TagError::NonAsciiText { tag: id });
            }
            // The terminator is added on encode
            if text.contains('\0') {
                return Err(TagError::InteriorNul { tag: id });
            }
        }

        let (count, bytes) = value.encode(order);
        let count = u32::try_from(count).map_err(|_| TagError::CountOverflow { tag: id })?;
        Self::new(id, ifd, value.field_type(), count, bytes)
    }

    /// Verify the raw value length against the type and count.
    fn check_length(&self) -> Result<(), TagError> {
        let expected = self
            .field_type
            .byte_len(self.count)
            .ok_or(TagError::CountOverflow { tag: self.id })?;

        if expected != self.value.len() {
            return Err(TagError::ValueLengthMismatch {
                tag: self.id,
                field_type: self.field_type,
                count: self.count,
                expected,
                actual: self.value.len(),
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    /// IFD this tag is declared to live in.
    #[inline]
    pub fn ifd(&self) -> IfdId {
        self.ifd
    }

    /// Re-home the tag; directories call this on insertion.
    #[inline]
    pub(crate) fn set_ifd(&mut self, ifd: IfdId) {
        self.ifd = ifd;
    }

    #[inline]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Number of components (not bytes).
    #[inline]
    pub fn component_count(&self) -> u32 {
        self.count
    }

    /// Raw value bytes, in the byte order of the owning document.
    #[inline]
    pub fn raw_value(&self) -> &[u8] {
        &self.value
    }

    /// Size of the raw value in bytes.
    #[inline]
    pub fn data_size(&self) -> usize {
        self.value.len()
    }

    // -------------------------------------------------------------------------
    // Typed views
    // -------------------------------------------------------------------------

    /// Decode the whole value.
    pub fn value(&self, order: ByteOrder) -> TagValue {
        TagValue::decode(self.field_type, &self.value, order)
    }

    /// Read a single SHORT or LONG value.
    ///
    /// # Errors
    /// `TypeMismatch` for other types or a count other than 1.
    pub fn as_u32(&self, order: ByteOrder) -> Result<u32, TagError> {
        match (self.field_type, self.count) {
            (FieldType::Short, 1) => Ok(order.read_u16(&self.value) as u32),
            (FieldType::Long, 1) => Ok(order.read_u32(&self.value)),
            _ => Err(self.type_mismatch("single Short or Long")),
        }
    }

    /// Read every component of a SHORT or LONG value, widened to u32.
    ///
    /// # Errors
    /// `TypeMismatch` for other types.
    pub fn as_u32_array(&self, order: ByteOrder) -> Result<Vec<u32>, TagError> {
        match self.value(order) {
            TagValue::Short(values) => Ok(values.into_iter().map(u32::from).collect()),
            TagValue::Long(values) => Ok(values),
            _ => Err(self.type_mismatch("Short or Long array")),
        }
    }

    /// Read the first RATIONAL component.
    ///
    /// # Errors
    /// `TypeMismatch` if the tag is not a non-empty RATIONAL.
    pub fn as_rational(&self, order: ByteOrder) -> Result<Rational, TagError> {
        match self.value(order) {
            TagValue::Rational(values) if !values.is_empty() => Ok(values[0]),
            _ => Err(self.type_mismatch("Rational")),
        }
    }

    /// Read an ASCII value without its NUL terminator.
    ///
    /// # Errors
    /// `TypeMismatch` for non-ASCII types.
    pub fn as_string(&self) -> Result<String, TagError> {
        match self.field_type {
            FieldType::Ascii => {
                let end = self
                    .value
                    .iter()
                    .position(|&b| b == 0)
                    .unwrap_or(self.value.len());
                Ok(String::from_utf8_lossy(&self.value[..end]).into_owned())
            }
            _ => Err(self.type_mismatch("Ascii")),
        }
    }

    fn type_mismatch(&self, expected: &'static str) -> TagError {
        TagError::TypeMismatch {
            tag: self.id,
            expected,
            actual: self.field_type,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
