//! The EXIF document aggregate.
//!
//! [`ExifData`] is what a reader builds from one JPEG EXIF block and what a
//! writer later serializes back. It owns:
//!
//! - One optional [`Directory`] per IFD slot, created on first insertion
//! - The byte order, fixed at construction
//! - The compressed (JPEG) thumbnail, if any
//! - Uncompressed thumbnail strips, addressed by index, with explicit gaps
//! - Scalars the reader derives while parsing (image size, quality guess,
//!   JPEG process marker) and the list of parsed marker sections
//!
//! # Absent versus empty
//!
//! The `all_tags*` queries return `None` when nothing matches rather than an
//! empty vector. Writers use that to decide whether an IFD is emitted at all.
//!
//! # Equality
//!
//! Two documents are equal when byte order, strips, compressed thumbnail and
//! every IFD slot match. The derived scalars and the section list are
//! bookkeeping from the parse and do not take part.

use bytes::Bytes;
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::error::DocumentError;

use super::byte_order::ByteOrder;
use super::directory::Directory;
use super::ifd::{is_valid_ifd, IfdId, IFD_COUNT};
use super::section::JpegSection;
use super::tag::Tag;
use super::tags::ExifTag;
use super::user_comment::{decode_user_comment, USER_COMMENT_PREFIX_LEN};
use super::values::TagValue;

/// Image dimension reported when the reader could not determine it.
pub const UNKNOWN_DIMENSION: i32 = -1;

// =============================================================================
// ExifData
// =============================================================================

/// In-memory EXIF document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExifData {
    byte_order: ByteOrder,
    #[serde(deserialize_with = "deserialize_slots")]
    ifds: [Option<Directory>; IFD_COUNT],
    thumbnail: Option<Bytes>,
    strips: Vec<Option<Bytes>>,
    image_width: i32,
    image_length: i32,
    quality_guess: u32,
    jpeg_process: u16,
    sections: Vec<JpegSection>,
    uncompressed_data_position: u32,
}

impl ExifData {
    /// Create an empty document with a fixed byte order.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ifds: Default::default(),
            thumbnail: None,
            strips: Vec::new(),
            image_width: UNKNOWN_DIMENSION,
            image_length: UNKNOWN_DIMENSION,
            quality_guess: 0,
            jpeg_process: 0,
            sections: Vec::new(),
            uncompressed_data_position: 0,
        }
    }

    /// Byte order of every multi-byte value in the document.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    // -------------------------------------------------------------------------
    // IFD slots
    // -------------------------------------------------------------------------

    /// Directory in the slot with the given index.
    ///
    /// Returns `None` for an empty slot or an index that is not a valid IFD.
    pub fn ifd_data(&self, index: usize) -> Option<&Directory> {
        if is_valid_ifd(index) {
            self.ifds[index].as_ref()
        } else {
            None
        }
    }

    /// Directory for `ifd`, created empty if the slot is vacant.
    pub fn get_or_create_ifd_data(&mut self, ifd: IfdId) -> &mut Directory {
        self.ifds[ifd.index()].get_or_insert_with(|| Directory::new(ifd))
    }

    /// Put a whole directory into its slot, replacing any directory there.
    pub fn add_ifd_data(&mut self, directory: Directory) -> Option<Directory> {
        let slot = directory.id().index();
        self.ifds[slot].replace(directory)
    }

    // -------------------------------------------------------------------------
    // Tags
    // -------------------------------------------------------------------------

    /// Look up a tag by id in one IFD.
    pub fn get_tag(&self, tag_id: u16, ifd: IfdId) -> Option<&Tag> {
        self.ifds[ifd.index()].as_ref()?.get_tag(tag_id)
    }

    /// Decode a tag's value with the document's byte order.
    pub fn tag_value(&self, tag_id: u16, ifd: IfdId) -> Option<TagValue> {
        self.get_tag(tag_id, ifd)
            .map(|tag| tag.value(self.byte_order))
    }

    /// Insert a tag into the IFD it declares.
    ///
    /// Returns the tag previously stored under the same id in that IFD.
    pub fn add_tag(&mut self, tag: Tag) -> Option<Tag> {
        let ifd = tag.ifd();
        self.insert_tag(tag, ifd)
    }

    /// Insert a tag into the IFD with the given index, overriding the IFD
    /// the tag declares.
    ///
    /// An invalid index is ignored: nothing changes and `None` is returned.
    /// Use [`ExifData::try_add_tag_to_ifd`] to have it reported instead.
    pub fn add_tag_to_ifd(&mut self, tag: Tag, ifd_index: usize) -> Option<Tag> {
        match IfdId::from_index(ifd_index) {
            Some(ifd) => self.insert_tag(tag, ifd),
            None => {
                debug!(
                    tag = tag.id(),
                    ifd_index, "ignoring tag routed to an invalid IFD"
                );
                None
            }
        }
    }

    /// Like [`ExifData::add_tag_to_ifd`], but an invalid index is an error.
    ///
    /// # Errors
    /// `InvalidIfd` if `ifd_index` is not a valid IFD slot.
    pub fn try_add_tag_to_ifd(
        &mut self,
        tag: Tag,
        ifd_index: usize,
    ) -> Result<Option<Tag>, DocumentError> {
        let ifd = IfdId::from_index(ifd_index).ok_or(DocumentError::InvalidIfd(ifd_index))?;
        Ok(self.insert_tag(tag, ifd))
    }

    fn insert_tag(&mut self, tag: Tag, ifd: IfdId) -> Option<Tag> {
        trace!(tag = tag.id(), %ifd, "adding tag");
        self.get_or_create_ifd_data(ifd).set_tag(tag)
    }

    /// Remove a tag from one IFD. Vacant slots and missing tags are a no-op.
    pub fn remove_tag(&mut self, tag_id: u16, ifd: IfdId) -> Option<Tag> {
        self.ifds[ifd.index()].as_mut()?.remove_tag(tag_id)
    }

    /// Every tag in the document, IFDs in slot order and tags in id order.
    ///
    /// Returns `None` if the document holds no tags at all.
    pub fn all_tags(&self) -> Option<Vec<&Tag>> {
        let tags: Vec<&Tag> = self
            .ifds
            .iter()
            .flatten()
            .flat_map(Directory::all_tags)
            .collect();
        non_empty(tags)
    }

    /// Every tag in one IFD, in id order.
    ///
    /// Returns `None` if the slot is vacant or its directory is empty.
    pub fn all_tags_for_ifd(&self, ifd: IfdId) -> Option<Vec<&Tag>> {
        non_empty(self.ifds[ifd.index()].as_ref()?.all_tags())
    }

    /// The tag with `tag_id` from each IFD that has one, in slot order.
    ///
    /// Returns `None` if no IFD has such a tag.
    pub fn all_tags_for_tag_id(&self, tag_id: u16) -> Option<Vec<&Tag>> {
        let tags: Vec<&Tag> = self
            .ifds
            .iter()
            .flatten()
            .filter_map(|dir| dir.get_tag(tag_id))
            .collect();
        non_empty(tags)
    }

    // -------------------------------------------------------------------------
    // UserComment
    // -------------------------------------------------------------------------

    /// Decode the UserComment tag of the primary IFD.
    ///
    /// Returns `None` if the tag is missing, has fewer than 8 components,
    /// announces an unknown character code, or does not decode.
    pub fn user_comment(&self) -> Option<String> {
        self.user_comment_in(IfdId::Primary)
    }

    /// Decode the UserComment tag found in `ifd`.
    pub fn user_comment_in(&self, ifd: IfdId) -> Option<String> {
        let tag = self.get_tag(ExifTag::UserComment.as_u16(), ifd)?;
        if (tag.component_count() as usize) < USER_COMMENT_PREFIX_LEN {
            return None;
        }
        decode_user_comment(tag.raw_value(), self.byte_order)
    }

    // -------------------------------------------------------------------------
    // Compressed thumbnail
    // -------------------------------------------------------------------------

    /// JPEG thumbnail bytes, if present.
    pub fn compressed_thumbnail(&self) -> Option<&Bytes> {
        self.thumbnail.as_ref()
    }

    pub fn set_compressed_thumbnail(&mut self, thumbnail: impl Into<Bytes>) {
        self.thumbnail = Some(thumbnail.into());
    }

    /// True if a thumbnail buffer is present, even a zero-length one.
    #[inline]
    pub fn has_compressed_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }

    // -------------------------------------------------------------------------
    // Uncompressed strips
    // -------------------------------------------------------------------------

    /// Store strip `index`, back-filling any missing lower indices with gaps.
    ///
    /// After the call the strip count is at least `index + 1`.
    pub fn set_strip_bytes(&mut self, index: usize, strip: impl Into<Bytes>) {
        if index >= self.strips.len() {
            self.strips.resize(index + 1, None);
        }
        self.strips[index] = Some(strip.into());
    }

    /// Number of strip slots, gaps included.
    #[inline]
    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    /// Strip at `index`; `Ok(None)` for a gap left by back-filling.
    ///
    /// # Errors
    /// `StripIndexOutOfRange` if `index >= strip_count()`.
    pub fn strip(&self, index: usize) -> Result<Option<&Bytes>, DocumentError> {
        self.strips
            .get(index)
            .map(Option::as_ref)
            .ok_or(DocumentError::StripIndexOutOfRange {
                index,
                count: self.strips.len(),
            })
    }

    /// True if any strip slot exists, even if it is a gap.
    #[inline]
    pub fn has_uncompressed_strip(&self) -> bool {
        !self.strips.is_empty()
    }

    // -------------------------------------------------------------------------
    // Thumbnail removal
    // -------------------------------------------------------------------------

    /// Drop the thumbnail entirely: pixel data and the thumbnail IFD.
    pub fn remove_thumbnail_data(&mut self) {
        self.clear_thumbnail_and_strips();
        if let Some(dir) = self.ifds[IfdId::Thumbnail.index()].take() {
            debug!(tags = dir.len(), "removed thumbnail IFD");
        }
    }

    /// Drop the thumbnail pixel data but keep the thumbnail IFD and its tags.
    pub fn clear_thumbnail_and_strips(&mut self) {
        debug!(
            had_thumbnail = self.thumbnail.is_some(),
            strips = self.strips.len(),
            "clearing thumbnail data"
        );
        self.thumbnail = None;
        self.strips.clear();
    }

    // -------------------------------------------------------------------------
    // Reader-derived scalars
    // -------------------------------------------------------------------------

    /// Image `(width, length)`; each is [`UNKNOWN_DIMENSION`] until set.
    #[inline]
    pub fn image_size(&self) -> (i32, i32) {
        (self.image_width, self.image_length)
    }

    pub fn set_image_size(&mut self, width: i32, length: i32) {
        self.image_width = width;
        self.image_length = length;
    }

    /// Estimated JPEG quality of the main image (0 if unknown).
    #[inline]
    pub fn quality_guess(&self) -> u32 {
        self.quality_guess
    }

    pub fn set_quality_guess(&mut self, quality: u32) {
        self.quality_guess = quality;
    }

    /// JPEG start-of-frame marker of the main image (0 if unknown).
    #[inline]
    pub fn jpeg_process(&self) -> u16 {
        self.jpeg_process
    }

    pub fn set_jpeg_process(&mut self, marker: u16) {
        self.jpeg_process = marker;
    }

    /// Marker sections recorded by the reader.
    #[inline]
    pub fn sections(&self) -> &[JpegSection] {
        &self.sections
    }

    pub fn set_sections(&mut self, sections: Vec<JpegSection>) {
        self.sections = sections;
    }

    /// Offset of the uncompressed strip data in the source stream.
    #[inline]
    pub fn uncompressed_data_position(&self) -> u32 {
        self.uncompressed_data_position
    }

    pub fn set_uncompressed_data_position(&mut self, position: u32) {
        self.uncompressed_data_position = position;
    }
}

impl PartialEq for ExifData {
    fn eq(&self, other: &Self) -> bool {
        self.byte_order == other.byte_order
            && self.strips == other.strips
            && self.thumbnail == other.thumbnail
            && self.ifds == other.ifds
    }
}

impl Eq for ExifData {}

/// Every directory must sit in the slot of its own IFD.
fn deserialize_slots<'de, D>(deserializer: D) -> Result<[Option<Directory>; IFD_COUNT], D::Error>
where
    D: Deserializer<'de>,
{
    let ifds = <[Option<Directory>; IFD_COUNT]>::deserialize(deserializer)?;
    for (slot, dir) in ifds.iter().enumerate() {
        if let Some(dir) = dir {
            if dir.id().index() != slot {
                return Err(de::Error::custom(DocumentError::IfdMismatch {
                    slot,
                    directory: dir.id().index(),
                }));
            }
        }
    }
    Ok(ifds)
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

// =============================================================================
// Tests
// =============================================================================
