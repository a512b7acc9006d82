//! # EXIF Document
//!
//! A typed, byte-order-aware in-memory model of the EXIF metadata carried by
//! JPEG files.
//!
//! A reader walks the EXIF block of an image and fills an [`ExifData`]
//! document: one directory per IFD, tags with their raw values, and the
//! thumbnail as either a compressed JPEG buffer or uncompressed strips.
//! Application code then queries and edits the document, and a writer
//! serializes it back. Neither the reader nor the writer lives here.
//!
//! ## Features
//!
//! - **Fixed IFD slots**: primary, thumbnail, Exif, Interoperability and GPS,
//!   addressed by [`IfdId`] with O(1) access
//! - **Checked tags**: a [`Tag`]'s raw length always matches its type and count
//! - **Typed values**: decode and encode [`TagValue`]s with the document's
//!   [`ByteOrder`]
//! - **UserComment decoding**: ASCII, JIS (EUC-JP) and UTF-16 character codes
//! - **Snapshots**: JSON persistence of a whole document
//!
//! ## Architecture
//!
//! - [`exif`] - The document model
//! - [`snapshot`] - JSON snapshots
//! - [`config`] - CLI configuration for the `exifdoc` tool
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust
//! use exif_document::{ByteOrder, ExifData, FieldType, IfdId, Tag};
//!
//! let mut data = ExifData::new(ByteOrder::BigEndian);
//! let orientation = Tag::new(0x0112, IfdId::Primary, FieldType::Short, 1, vec![0x00, 0x06])
//!     .expect("two bytes for one SHORT");
//! data.add_tag(orientation);
//!
//! let tag = data.get_tag(0x0112, IfdId::Primary).unwrap();
//! assert_eq!(tag.as_u32(data.byte_order()).unwrap(), 6);
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod io;
pub mod snapshot;

// Re-export commonly used types
pub use error::{DocumentError, SnapshotError, TagError};
pub use exif::{
    decode_user_comment, encode_user_comment, is_valid_ifd, ByteOrder, Directory, ExifData,
    ExifTag, FieldType, IfdId, JpegSection, Rational, SignedRational, Tag, TagValue,
    UserCommentCodec, IFD_COUNT, MARKER_APP1, UNKNOWN_DIMENSION, USER_COMMENT_PREFIX_LEN,
};
