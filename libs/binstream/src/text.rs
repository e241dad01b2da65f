//! UTF-8 text decoding
//!
//! Invalid sequences are replaced with U+FFFD, one replacement per maximal
//! invalid subpart, so valid characters after a bad byte keep their relative
//! order. Decoding never fails.
//!
//! Framing (NUL termination, fixed span lengths) is the reader's job; this
//! module only turns bytes into text.

use std::borrow::Cow;

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Valid input is borrowed without copying.
pub fn decode_utf8(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Prefix of `bytes` before the first `0x00`, or all of `bytes` if none.
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_is_borrowed() {
        let decoded = decode_utf8("grüße".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed("grüße")));
    }

    #[test]
    fn test_decode_invalid_is_replaced() {
        // 0xFF is never valid UTF-8
        assert_eq!(decode_utf8(&[0x41, 0xFF, 0x42]), "A\u{FFFD}B");
        // Truncated 3-byte sequence collapses into a single replacement
        assert_eq!(decode_utf8(&[0x41, 0xE2, 0x82, 0x42]), "A\u{FFFD}B");
    }

    #[test]
    fn test_decode_keeps_embedded_nul() {
        assert_eq!(decode_utf8(&[0x41, 0x00, 0x42]), "A\0B");
    }

    #[test]
    fn test_until_nul() {
        assert_eq!(until_nul(&[0x41, 0x42, 0x00, 0x43]), &[0x41, 0x42]);
        assert_eq!(until_nul(&[0x00, 0x41]), &[] as &[u8]);
        assert_eq!(until_nul(&[0x41, 0x42]), &[0x41, 0x42]);
        assert_eq!(until_nul(&[]), &[] as &[u8]);
    }
}
