//! UserComment character codes.
//!
//! The EXIF UserComment tag (0x9286) is UNDEFINED data whose first 8 bytes
//! name the text encoding of the rest:
//!
//! ```text
//! Bytes 0-7: Character code ("ASCII\0\0\0", "JIS\0\0\0\0\0" or "UNICODE\0")
//! Bytes 8- : Comment text in that encoding
//! ```
//!
//! Decoding never guesses: an unknown prefix or a byte sequence that is not
//! valid for the announced encoding yields `None`.

use std::borrow::Cow;

use encoding_rs::EUC_JP;
use tracing::debug;

use super::byte_order::ByteOrder;

/// Length of the character code prefix.
pub const USER_COMMENT_PREFIX_LEN: usize = 8;

/// "ASCII\0\0\0"
const USER_COMMENT_ASCII: [u8; USER_COMMENT_PREFIX_LEN] =
    [0x41, 0x53, 0x43, 0x49, 0x49, 0x00, 0x00, 0x00];

/// "JIS\0\0\0\0\0"
const USER_COMMENT_JIS: [u8; USER_COMMENT_PREFIX_LEN] =
    [0x4A, 0x49, 0x53, 0x00, 0x00, 0x00, 0x00, 0x00];

/// "UNICODE\0"
const USER_COMMENT_UNICODE: [u8; USER_COMMENT_PREFIX_LEN] =
    [0x55, 0x4E, 0x49, 0x43, 0x4F, 0x44, 0x45, 0x00];

/// Text encodings a UserComment can announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserCommentCodec {
    /// 7-bit ASCII
    Ascii,
    /// JIS X 0208, stored as EUC-JP
    Jis,
    /// UTF-16 in the document byte order
    Unicode,
}

impl UserCommentCodec {
    /// The 8-byte character code for this codec.
    pub const fn prefix(self) -> &'static [u8; USER_COMMENT_PREFIX_LEN] {
        match self {
            UserCommentCodec::Ascii => &USER_COMMENT_ASCII,
            UserCommentCodec::Jis => &USER_COMMENT_JIS,
            UserCommentCodec::Unicode => &USER_COMMENT_UNICODE,
        }
    }

    /// Identify the codec from the first 8 bytes of a raw value.
    ///
    /// Returns `None` for values shorter than the prefix or an unknown code.
    pub fn detect(raw: &[u8]) -> Option<Self> {
        let code = raw.get(..USER_COMMENT_PREFIX_LEN)?;
        [
            UserCommentCodec::Ascii,
            UserCommentCodec::Jis,
            UserCommentCodec::Unicode,
        ]
        .into_iter()
        .find(|codec| codec.prefix()[..] == *code)
    }

    /// Decode comment text (the bytes after the prefix).
    pub fn decode(self, text: &[u8], order: ByteOrder) -> Option<String> {
        match self {
            UserCommentCodec::Ascii => text
                .is_ascii()
                .then(|| text.iter().map(|&b| b as char).collect()),
            UserCommentCodec::Jis => EUC_JP
                .decode_without_bom_handling_and_without_replacement(text)
                .map(Cow::into_owned),
            UserCommentCodec::Unicode => decode_utf16(text, order),
        }
    }

    /// Encode comment text (without the prefix).
    ///
    /// Returns `None` if the text has characters the codec cannot carry.
    pub fn encode(self, text: &str, order: ByteOrder) -> Option<Vec<u8>> {
        match self {
            UserCommentCodec::Ascii => text.is_ascii().then(|| text.as_bytes().to_vec()),
            UserCommentCodec::Jis => {
                let (bytes, _, had_errors) = EUC_JP.encode(text);
                (!had_errors).then(|| bytes.into_owned())
            }
            UserCommentCodec::Unicode => {
                let mut out = Vec::with_capacity(text.len() * 2);
                text.encode_utf16()
                    .for_each(|unit| order.write_u16(&mut out, unit));
                Some(out)
            }
        }
    }
}

/// Decode a raw UserComment value.
///
/// Returns `None` if the value is shorter than the 8-byte prefix, the prefix
/// is unknown, or the text is malformed for the announced encoding.
pub fn decode_user_comment(raw: &[u8], order: ByteOrder) -> Option<String> {
    let codec = UserCommentCodec::detect(raw)?;
    let decoded = codec.decode(&raw[USER_COMMENT_PREFIX_LEN..], order);
    if decoded.is_none() {
        debug!(?codec, len = raw.len(), "user comment is not valid for its character code");
    }
    decoded
}

/// Build a raw UserComment value: prefix followed by encoded text.
pub fn encode_user_comment(
    codec: UserCommentCodec,
    text: &str,
    order: ByteOrder,
) -> Option<Vec<u8>> {
    let body = codec.encode(text, order)?;
    let mut raw = Vec::with_capacity(USER_COMMENT_PREFIX_LEN + body.len());
    raw.extend_from_slice(codec.prefix());
    raw.extend_from_slice(&body);
    Some(raw)
}

/// Strict UTF-16 decode; a leading BOM overrides `order` and is dropped.
fn decode_utf16(bytes: &[u8], order: ByteOrder) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (order, body) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (ByteOrder::BigEndian, rest),
        [0xFF, 0xFE, rest @ ..] => (ByteOrder::LittleEndian, rest),
        _ => (order, bytes),
    };

    let units = body.chunks_exact(2).map(|c| order.read_u16(c));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

// =============================================================================
// Tests
// =============================================================================
