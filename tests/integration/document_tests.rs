//! Document-level integration tests.
//!
//! Tests verify:
//! - Tags read back byte-identical for many tag sets in both byte orders
//! - Strip sequences back-fill and bound-check
//! - Thumbnail removal versus thumbnail clearing
//! - Structural equality
//! - The enumeration a writer performs

use std::collections::HashMap;

use exif_document::{
    ByteOrder, DocumentError, ExifData, ExifTag, FieldType, IfdId, Tag, TagValue, IFD_COUNT,
};

use super::test_utils::{
    camera_document, camera_tags, empty_value_tags, every_type_tags, short_tag, strip_document,
    tag_sets, BYTE_ORDERS, TINY_JPEG,
};

// =============================================================================
// Tag Round Trip
// =============================================================================

#[test]
fn test_tags_read_back_byte_identical() {
    for order in BYTE_ORDERS {
        let tags = camera_tags(order);
        let data = camera_document(order);

        for tag in &tags {
            let stored = data
                .get_tag(tag.id(), tag.ifd())
                .unwrap_or_else(|| panic!("tag 0x{:04X} missing in {:?}", tag.id(), order));
            assert_eq!(stored.raw_value(), tag.raw_value());
            assert_eq!(stored.field_type(), tag.field_type());
            assert_eq!(stored.component_count(), tag.component_count());
        }
        assert_eq!(data.all_tags().unwrap().len(), tags.len());
    }
}

#[test]
fn test_tag_sets_round_trip() {
    for order in BYTE_ORDERS {
        for (name, tags) in tag_sets(order) {
            let mut data = ExifData::new(order);
            let mut expected: HashMap<(u16, IfdId), Tag> = HashMap::new();
            for tag in tags {
                let previous = data.add_tag(tag.clone());
                assert_eq!(previous, expected.insert((tag.id(), tag.ifd()), tag), "{}", name);
            }

            for ((id, ifd), tag) in &expected {
                let stored = data.get_tag(*id, *ifd).unwrap();
                assert_eq!(stored, tag, "{} {:?}", name, order);
                assert_eq!(stored.raw_value(), tag.raw_value());
                assert_eq!(stored.value(order), tag.value(order));
            }
            assert_eq!(
                data.all_tags().map_or(0, |tags| tags.len()),
                expected.len(),
                "{} {:?}",
                name,
                order
            );
        }
    }
}

#[test]
fn test_every_field_type_covered() {
    let types: Vec<FieldType> = every_type_tags(ByteOrder::BigEndian)
        .iter()
        .map(|tag| tag.field_type())
        .collect();
    for code in 1..=12 {
        let field_type = FieldType::from_u16(code).unwrap();
        assert!(types.contains(&field_type), "{:?} missing", field_type);
    }
}

#[test]
fn test_zero_count_tags_keep_empty_values() {
    for order in BYTE_ORDERS {
        let mut data = ExifData::new(order);
        for tag in empty_value_tags(order) {
            data.add_tag(tag);
        }
        for ifd in IfdId::ALL {
            let tag = data.get_tag(0x0100, ifd).unwrap();
            assert_eq!(tag.component_count(), 0);
            assert!(tag.raw_value().is_empty());
        }
    }
}

#[test]
fn test_byte_order_shapes_raw_values() {
    let be = camera_document(ByteOrder::BigEndian);
    let le = camera_document(ByteOrder::LittleEndian);
    let id = ExifTag::Orientation.as_u16();

    assert_eq!(be.get_tag(id, IfdId::Primary).unwrap().raw_value(), &[0, 6]);
    assert_eq!(le.get_tag(id, IfdId::Primary).unwrap().raw_value(), &[6, 0]);

    // Decoding with each document's own order gives the same value
    assert_eq!(be.tag_value(id, IfdId::Primary), Some(TagValue::Short(vec![6])));
    assert_eq!(le.tag_value(id, IfdId::Primary), Some(TagValue::Short(vec![6])));
}

#[test]
fn test_fresh_document_has_no_tags() {
    let mut data = ExifData::new(ByteOrder::BigEndian);
    assert!(data.all_tags().is_none());

    data.add_tag(short_tag(0x0112, IfdId::Primary, 1, ByteOrder::BigEndian));
    assert_eq!(data.all_tags().unwrap().len(), 1);
}

// =============================================================================
// Strips
// =============================================================================

#[test]
fn test_set_strip_bytes_sets_count() {
    for index in [0usize, 1, 5, 17] {
        let mut data = ExifData::new(ByteOrder::LittleEndian);
        data.set_strip_bytes(index, vec![index as u8]);

        assert_eq!(data.strip_count(), index + 1);
        assert_eq!(data.strip(index).unwrap().map(|s| s.to_vec()), Some(vec![index as u8]));
        for gap in 0..index {
            assert_eq!(data.strip(gap).unwrap(), None);
        }
    }
}

#[test]
fn test_strip_one_past_end_fails() {
    let mut data = ExifData::new(ByteOrder::BigEndian);
    for count in 0..4 {
        assert_eq!(data.strip_count(), count);
        assert!(matches!(
            data.strip(count),
            Err(DocumentError::StripIndexOutOfRange { index, count: c })
                if index == count && c == count
        ));
        data.set_strip_bytes(count, vec![0xAB]);
    }
}

// =============================================================================
// Thumbnail Removal
// =============================================================================

#[test]
fn test_remove_thumbnail_data() {
    let documents = [
        camera_document(ByteOrder::BigEndian),
        strip_document(ByteOrder::LittleEndian),
    ];
    for mut data in documents {
        assert!(data.ifd_data(IfdId::Thumbnail.index()).is_some());

        data.remove_thumbnail_data();
        assert!(data.ifd_data(IfdId::Thumbnail.index()).is_none());
        assert!(!data.has_compressed_thumbnail());
        assert_eq!(data.strip_count(), 0);
        assert!(!data.has_uncompressed_strip());
    }
}

#[test]
fn test_clear_thumbnail_and_strips() {
    let documents = [
        camera_document(ByteOrder::BigEndian),
        strip_document(ByteOrder::LittleEndian),
    ];
    for mut data in documents {
        data.clear_thumbnail_and_strips();
        assert!(data.ifd_data(IfdId::Thumbnail.index()).is_some());
        assert!(data.all_tags_for_ifd(IfdId::Thumbnail).is_some());
        assert!(!data.has_compressed_thumbnail());
        assert_eq!(data.strip_count(), 0);
    }
}

#[test]
fn test_removal_leaves_other_ifds() {
    let mut data = camera_document(ByteOrder::BigEndian);
    let primary_before = data.all_tags_for_ifd(IfdId::Primary).unwrap().len();

    data.remove_thumbnail_data();
    assert_eq!(data.all_tags_for_ifd(IfdId::Primary).unwrap().len(), primary_before);
    assert!(data.all_tags_for_ifd(IfdId::Gps).is_some());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn test_identical_builds_are_equal() {
    for order in BYTE_ORDERS {
        assert_eq!(strip_document(order), strip_document(order));
        assert_eq!(camera_document(order), camera_document(order));
    }
}

#[test]
fn test_single_strip_byte_makes_unequal() {
    let a = strip_document(ByteOrder::BigEndian);
    let mut b = strip_document(ByteOrder::BigEndian);
    b.set_strip_bytes(1, vec![40, 50, 61]);
    assert_ne!(a, b);
}

#[test]
fn test_thumbnail_bytes_make_unequal() {
    let a = camera_document(ByteOrder::BigEndian);
    let mut b = camera_document(ByteOrder::BigEndian);
    b.set_compressed_thumbnail(vec![0xFF, 0xD8, 0xFF, 0xD8]);
    assert_ne!(a, b);
}

#[test]
fn test_replaced_tag_makes_unequal() {
    let a = camera_document(ByteOrder::LittleEndian);
    let mut b = camera_document(ByteOrder::LittleEndian);
    b.add_tag(short_tag(
        ExifTag::Orientation.as_u16(),
        IfdId::Primary,
        1,
        ByteOrder::LittleEndian,
    ));
    assert_ne!(a, b);
}

// =============================================================================
// Writer Enumeration
// =============================================================================

#[test]
fn test_writer_enumeration() {
    let data = camera_document(ByteOrder::BigEndian);

    let mut emitted = Vec::new();
    for index in 0..IFD_COUNT {
        let ifd = IfdId::from_index(index).unwrap();
        if let Some(tags) = data.all_tags_for_ifd(ifd) {
            // Tags come out in ascending id order, as TIFF requires
            let ids: Vec<u16> = tags.iter().map(|t| t.id()).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted);
            emitted.push(ifd);
        }
    }
    assert_eq!(emitted, IfdId::ALL.to_vec());

    assert!(data.has_compressed_thumbnail());
    assert_eq!(&data.compressed_thumbnail().unwrap()[..], &TINY_JPEG);
    assert_eq!(data.strip_count(), 0);
}

#[test]
fn test_derived_scalars_are_stored() {
    let data = camera_document(ByteOrder::LittleEndian);
    assert_eq!(data.image_size(), (4000, 3000));
    assert_eq!(data.quality_guess(), 92);
    assert_eq!(data.jpeg_process(), 0xFFC0);
    assert_eq!(data.sections().len(), 2);
    assert!(data.sections()[1].is_app1());
}
