//! EXIF document model.
//!
//! This module holds the in-memory form of a JPEG EXIF block, as produced by
//! a reader and consumed by a writer.
//!
//! # Key Concepts
//!
//! - **Byte order**: an EXIF block declares its endianness once (II or MM).
//!   Tags keep raw bytes in that order; the document remembers which one.
//!
//! - **IFD slots**: the primary image, thumbnail, Exif, Interoperability and
//!   GPS directories. Each slot is empty until a tag is inserted for it.
//!
//! - **Tags**: an id, a field type, a component count, and raw bytes whose
//!   length always matches `count * size_of(type)`.
//!
//! - **Thumbnail data**: either one compressed JPEG buffer or a sequence of
//!   uncompressed strips, stored beside the thumbnail IFD that describes it.

mod byte_order;
mod directory;
mod document;
mod ifd;
mod section;
mod tag;
mod tags;
mod user_comment;
mod values;

pub use byte_order::ByteOrder;
pub use directory::Directory;
pub use document::{ExifData, UNKNOWN_DIMENSION};
pub use ifd::{is_valid_ifd, IfdId, IFD_COUNT};
pub use section::{JpegSection, MARKER_APP1};
pub use tag::Tag;
pub use tags::{ExifTag, FieldType};
pub use user_comment::{
    decode_user_comment, encode_user_comment, UserCommentCodec, USER_COMMENT_PREFIX_LEN,
};
pub use values::{Rational, SignedRational, TagValue};
