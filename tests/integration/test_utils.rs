//! Test utilities for integration tests.
//!
//! Builders that play the part of an EXIF reader: they create documents
//! with a fixed byte order and feed them tags, thumbnails and strips.

#![allow(dead_code)]

use exif_document::{
    ByteOrder, ExifData, ExifTag, FieldType, IfdId, JpegSection, Rational, SignedRational, Tag,
    TagValue, MARKER_APP1,
};

/// Both byte orders, for tests that must hold under either.
pub const BYTE_ORDERS: [ByteOrder; 2] = [ByteOrder::BigEndian, ByteOrder::LittleEndian];

/// Smallest well-formed JPEG: SOI followed by EOI.
pub const TINY_JPEG: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xD9];

/// Build a tag by encoding `value` in `order`.
pub fn typed_tag(id: u16, ifd: IfdId, value: TagValue, order: ByteOrder) -> Tag {
    Tag::from_value(id, ifd, &value, order).expect("valid tag value")
}

/// A single SHORT tag.
pub fn short_tag(id: u16, ifd: IfdId, value: u16, order: ByteOrder) -> Tag {
    typed_tag(id, ifd, TagValue::Short(vec![value]), order)
}

/// An ASCII tag.
pub fn ascii_tag(id: u16, ifd: IfdId, text: &str, order: ByteOrder) -> Tag {
    typed_tag(id, ifd, TagValue::Ascii(text.to_string()), order)
}

/// An UNDEFINED tag holding `raw` as is.
pub fn undefined_tag(id: u16, ifd: IfdId, raw: Vec<u8>) -> Tag {
    let count = raw.len() as u32;
    Tag::new(id, ifd, FieldType::Undefined, count, raw).expect("undefined tag")
}

/// The tags a camera typically writes, spread over every IFD.
pub fn camera_tags(order: ByteOrder) -> Vec<Tag> {
    vec![
        ascii_tag(ExifTag::Make.as_u16(), IfdId::Primary, "Canon", order),
        ascii_tag(ExifTag::Model.as_u16(), IfdId::Primary, "EOS 5D", order),
        short_tag(ExifTag::Orientation.as_u16(), IfdId::Primary, 6, order),
        ascii_tag(
            ExifTag::DateTime.as_u16(),
            IfdId::Primary,
            "2024:05:01 12:00:00",
            order,
        ),
        typed_tag(
            ExifTag::PixelXDimension.as_u16(),
            IfdId::Exif,
            TagValue::Long(vec![4000]),
            order,
        ),
        typed_tag(
            0x0001,
            IfdId::Interoperability,
            TagValue::Ascii("R98".to_string()),
            order,
        ),
        ascii_tag(ExifTag::GpsLatitudeRef.as_u16(), IfdId::Gps, "N", order),
        typed_tag(
            ExifTag::GpsLatitude.as_u16(),
            IfdId::Gps,
            TagValue::Rational(vec![
                Rational::new(48, 1),
                Rational::new(51, 1),
                Rational::new(2993, 100),
            ]),
            order,
        ),
        short_tag(ExifTag::Compression.as_u16(), IfdId::Thumbnail, 6, order),
    ]
}

/// One tag of every field type, all in the primary IFD.
pub fn every_type_tags(order: ByteOrder) -> Vec<Tag> {
    let values = vec![
        TagValue::Byte(vec![0, 1, 255]),
        TagValue::Ascii("text".to_string()),
        TagValue::Short(vec![1, 0xFFFF]),
        TagValue::Long(vec![0x0102_0304]),
        TagValue::Rational(vec![Rational::new(1, 3), Rational::new(72, 1)]),
        TagValue::SignedByte(vec![-128, 127]),
        TagValue::Undefined(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x00]),
        TagValue::SignedShort(vec![-2, 2]),
        TagValue::SignedLong(vec![i32::MIN, -1]),
        TagValue::SignedRational(vec![SignedRational::new(-7, 3)]),
        TagValue::Float(vec![0.5, -2.25]),
        TagValue::Double(vec![1.0e-3]),
    ];
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| typed_tag(0xC000 + i as u16, IfdId::Primary, value, order))
        .collect()
}

/// Zero-component tags of each numeric type, spread over the IFDs.
pub fn empty_value_tags(order: ByteOrder) -> Vec<Tag> {
    let values = [
        TagValue::Byte(vec![]),
        TagValue::Short(vec![]),
        TagValue::Long(vec![]),
        TagValue::Rational(vec![]),
        TagValue::Double(vec![]),
    ];
    values
        .into_iter()
        .zip(IfdId::ALL)
        .map(|(value, ifd)| typed_tag(0x0100, ifd, value, order))
        .collect()
}

/// The same tag id in every IFD, each with a different value.
pub fn shared_id_tags(order: ByteOrder) -> Vec<Tag> {
    IfdId::ALL
        .into_iter()
        .map(|ifd| short_tag(0x0001, ifd, ifd.index() as u16 + 10, order))
        .collect()
}

/// Two tags for the same id and IFD; the second replaces the first.
pub fn replaced_tags(order: ByteOrder) -> Vec<Tag> {
    vec![
        short_tag(ExifTag::Orientation.as_u16(), IfdId::Primary, 1, order),
        ascii_tag(ExifTag::Make.as_u16(), IfdId::Primary, "Nikon", order),
        typed_tag(
            ExifTag::Orientation.as_u16(),
            IfdId::Primary,
            TagValue::Long(vec![8]),
            order,
        ),
    ]
}

/// Named tag sets for round-trip tests.
pub fn tag_sets(order: ByteOrder) -> Vec<(&'static str, Vec<Tag>)> {
    vec![
        ("empty", Vec::new()),
        (
            "single",
            vec![short_tag(ExifTag::Orientation.as_u16(), IfdId::Primary, 3, order)],
        ),
        ("camera", camera_tags(order)),
        ("every type", every_type_tags(order)),
        ("empty values", empty_value_tags(order)),
        ("shared id", shared_id_tags(order)),
        ("replaced", replaced_tags(order)),
    ]
}

/// A document as a reader would leave it after parsing a camera JPEG.
pub fn camera_document(order: ByteOrder) -> ExifData {
    let mut data = ExifData::new(order);
    for tag in camera_tags(order) {
        data.add_tag(tag);
    }
    data.set_compressed_thumbnail(TINY_JPEG.to_vec());
    data.set_image_size(4000, 3000);
    data.set_quality_guess(92);
    data.set_jpeg_process(0xFFC0);
    data.set_sections(vec![
        JpegSection::new(0, 2, 0xD8),
        JpegSection::new(2, 2048, MARKER_APP1),
    ]);
    data
}

/// A document whose thumbnail is stored as uncompressed strips.
pub fn strip_document(order: ByteOrder) -> ExifData {
    let mut data = ExifData::new(order);
    data.add_tag(short_tag(ExifTag::Compression.as_u16(), IfdId::Thumbnail, 1, order));
    data.add_tag(typed_tag(
        ExifTag::StripByteCounts.as_u16(),
        IfdId::Thumbnail,
        TagValue::Long(vec![3, 3]),
        order,
    ));
    data.set_strip_bytes(0, vec![10, 20, 30]);
    data.set_strip_bytes(1, vec![40, 50, 60]);
    data
}
