//! UserComment integration tests.
//!
//! Tests verify:
//! - Each character code decodes through the document
//! - Unknown codes and short values decode to nothing
//! - UTF-16 text follows the document byte order

use exif_document::{
    encode_user_comment, ByteOrder, ExifData, ExifTag, IfdId, UserCommentCodec,
};

use super::test_utils::{undefined_tag, BYTE_ORDERS};

fn document_with_comment(order: ByteOrder, raw: Vec<u8>) -> ExifData {
    let mut data = ExifData::new(order);
    data.add_tag(undefined_tag(ExifTag::UserComment.as_u16(), IfdId::Primary, raw));
    data
}

#[test]
fn test_ascii_hello() {
    let mut raw = b"ASCII\0\0\0".to_vec();
    raw.extend_from_slice(b"hello");
    let data = document_with_comment(ByteOrder::BigEndian, raw);
    assert_eq!(data.user_comment().as_deref(), Some("hello"));
}

#[test]
fn test_unknown_prefix_is_absent() {
    let data = document_with_comment(ByteOrder::BigEndian, b"UNDEFINE".to_vec());
    assert_eq!(data.user_comment(), None);
}

#[test]
fn test_seven_bytes_is_absent() {
    // A valid-looking but truncated prefix
    let data = document_with_comment(ByteOrder::BigEndian, b"ASCII\0\0".to_vec());
    assert_eq!(data.user_comment(), None);
}

#[test]
fn test_every_codec_in_both_orders() {
    let cases = [
        (UserCommentCodec::Ascii, "Sunset over the bay"),
        (UserCommentCodec::Jis, "夕焼け"),
        (UserCommentCodec::Unicode, "Crème brûlée 🍮"),
    ];

    for order in BYTE_ORDERS {
        for (codec, text) in cases {
            let raw = encode_user_comment(codec, text, order).unwrap();
            let data = document_with_comment(order, raw);
            assert_eq!(data.user_comment().as_deref(), Some(text), "{:?} {:?}", codec, order);
        }
    }
}

#[test]
fn test_unicode_decoded_with_wrong_order_differs() {
    let raw =
        encode_user_comment(UserCommentCodec::Unicode, "AB", ByteOrder::LittleEndian).unwrap();
    let data = document_with_comment(ByteOrder::BigEndian, raw);
    // 'A' 0x0041 read big-endian from [0x41, 0x00] is U+4100
    assert_eq!(data.user_comment().as_deref(), Some("\u{4100}\u{4200}"));
}

#[test]
fn test_comment_only_looked_up_in_primary() {
    let mut raw = b"ASCII\0\0\0".to_vec();
    raw.extend_from_slice(b"in exif");

    let mut data = ExifData::new(ByteOrder::LittleEndian);
    data.add_tag(undefined_tag(ExifTag::UserComment.as_u16(), IfdId::Exif, raw));
    assert_eq!(data.user_comment(), None);
    assert_eq!(data.user_comment_in(IfdId::Exif).as_deref(), Some("in exif"));
}
