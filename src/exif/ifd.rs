//! IFD slot identifiers.
//!
//! A JPEG EXIF block holds a fixed, small set of image file directories.
//! The document keeps one slot per directory, indexed by [`IfdId`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of IFD slots in a document.
pub const IFD_COUNT: usize = 5;

/// Identifier of an IFD slot.
///
/// The discriminant is the slot index inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum IfdId {
    /// IFD0, the primary image
    Primary = 0,

    /// IFD1, the thumbnail image
    Thumbnail = 1,

    /// Exif private tags (pointed to from IFD0)
    Exif = 2,

    /// Interoperability tags (pointed to from the Exif IFD)
    Interoperability = 3,

    /// GPS tags (pointed to from IFD0)
    Gps = 4,
}

impl IfdId {
    /// Every slot in ascending index order.
    pub const ALL: [IfdId; IFD_COUNT] = [
        IfdId::Primary,
        IfdId::Thumbnail,
        IfdId::Exif,
        IfdId::Interoperability,
        IfdId::Gps,
    ];

    /// Slot index of this IFD.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up the IFD for a slot index.
    ///
    /// Returns `None` if the index is not a valid slot.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            IfdId::Primary => "primary",
            IfdId::Thumbnail => "thumbnail",
            IfdId::Exif => "exif",
            IfdId::Interoperability => "interop",
            IfdId::Gps => "gps",
        }
    }

    /// Parse a name produced by [`IfdId::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|ifd| ifd.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for IfdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether `index` names one of the IFD slots.
#[inline]
pub fn is_valid_ifd(index: usize) -> bool {
    index < IFD_COUNT
}
