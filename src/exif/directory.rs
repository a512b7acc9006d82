//! Tag table for one IFD slot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

use super::ifd::IfdId;
use super::tag::Tag;

/// Mapping from tag id to [`Tag`] for one IFD.
///
/// Every stored tag reports the directory's own IFD: insertion re-homes the
/// tag, so a tag routed here explicitly ends up declaring this IFD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDirectory")]
pub struct Directory {
    id: IfdId,
    tags: HashMap<u16, Tag>,
}

/// Unchecked serialized form of a [`Directory`].
#[derive(Deserialize)]
struct RawDirectory {
    id: IfdId,
    tags: HashMap<u16, Tag>,
}

impl TryFrom<RawDirectory> for Directory {
    type Error = DocumentError;

    fn try_from(raw: RawDirectory) -> Result<Self, Self::Error> {
        for (&key, tag) in &raw.tags {
            if key != tag.id() {
                return Err(DocumentError::TagKeyMismatch { key, tag: tag.id() });
            }
            if tag.ifd() != raw.id {
                return Err(DocumentError::TagIfdMismatch {
                    tag: tag.id(),
                    directory: raw.id.index(),
                    declared: tag.ifd().index(),
                });
            }
        }
        Ok(Directory {
            id: raw.id,
            tags: raw.tags,
        })
    }
}

impl Directory {
    /// Create an empty directory for `id`.
    pub fn new(id: IfdId) -> Self {
        Self {
            id,
            tags: HashMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> IfdId {
        self.id
    }

    /// Look up a tag by id.
    pub fn get_tag(&self, tag_id: u16) -> Option<&Tag> {
        self.tags.get(&tag_id)
    }

    /// Insert or replace a tag, returning the tag it displaced.
    pub fn set_tag(&mut self, mut tag: Tag) -> Option<Tag> {
        tag.set_ifd(self.id);
        self.tags.insert(tag.id(), tag)
    }

    /// Remove a tag if present.
    pub fn remove_tag(&mut self, tag_id: u16) -> Option<Tag> {
        self.tags.remove(&tag_id)
    }

    #[inline]
    pub fn contains(&self, tag_id: u16) -> bool {
        self.tags.contains_key(&tag_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Every tag, in ascending id order.
    ///
    /// An empty directory yields an empty vector.
    pub fn all_tags(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.tags.values().collect();
        tags.sort_unstable_by_key(|tag| tag.id());
        tags
    }
}
