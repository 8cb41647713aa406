//! UTF-16 decoding for scanner exports.
//!
//! Exports are written as UTF-16 with a leading byte order mark. The mark
//! is mandatory and selects the byte order (little-endian in practice).
//! Malformed input is rejected outright rather than patched with
//! replacement characters.

use crate::error::{DxaError, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use tracing::debug;

/// Little-endian byte order mark
pub const BOM_LE: [u8; 2] = [0xFF, 0xFE];
/// Big-endian byte order mark
pub const BOM_BE: [u8; 2] = [0xFE, 0xFF];

/// Decode a complete export into text, consuming the byte order mark
pub fn decode_utf16(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    if bytes.len() % 2 != 0 {
        return Err(DxaError::decode(format!(
            "odd byte length {} is not valid UTF-16",
            bytes.len()
        )));
    }

    let encoding = detect_bom(bytes)
        .ok_or_else(|| DxaError::decode("missing byte order mark at start of file"))?;
    let payload = &bytes[BOM_LE.len()..];

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(payload)
        .ok_or_else(|| {
            DxaError::decode(format!("malformed {} code unit sequence", encoding.name()))
        })?;

    debug!(
        "Decoded {} bytes of {} into {} characters",
        bytes.len(),
        encoding.name(),
        text.chars().count()
    );

    Ok(text.into_owned())
}

fn detect_bom(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.starts_with(&BOM_LE) {
        Some(UTF_16LE)
    } else if bytes.starts_with(&BOM_BE) {
        Some(UTF_16BE)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = BOM_LE.to_vec();
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let bytes = encode_utf16le("ID\tName\r\nµg/cm²");
        assert_eq!(decode_utf16(&bytes).unwrap(), "ID\tName\r\nµg/cm²");
    }

    #[test]
    fn test_bom_is_not_emitted() {
        let bytes = encode_utf16le("");
        assert_eq!(bytes.len(), 2);
        assert_eq!(decode_utf16(&bytes).unwrap(), "");
    }

    #[test]
    fn test_decode_big_endian_bom_override() {
        let mut bytes = BOM_BE.to_vec();
        bytes.extend("Head BMD".encode_utf16().flat_map(u16::to_be_bytes));
        assert_eq!(decode_utf16(&bytes).unwrap(), "Head BMD");
    }

    #[test]
    fn test_empty_input_decodes_to_empty_text() {
        assert_eq!(decode_utf16(&[]).unwrap(), "");
    }

    #[test]
    fn test_missing_bom_is_error() {
        let bytes: Vec<u8> = "ab".encode_utf16().flat_map(u16::to_le_bytes).collect();
        let error = decode_utf16(&bytes).unwrap_err();
        assert!(matches!(error, DxaError::Decode { .. }));
        assert!(error.to_string().contains("byte order mark"));
    }

    #[test]
    fn test_odd_length_is_error() {
        let mut bytes = encode_utf16le("abc");
        bytes.push(0x41);
        let error = decode_utf16(&bytes).unwrap_err();
        assert!(error.to_string().contains("odd byte length"));
    }

    #[test]
    fn test_unpaired_surrogate_is_error() {
        let mut bytes = BOM_LE.to_vec();
        bytes.extend(0xD800u16.to_le_bytes());
        bytes.extend(u16::from(b'a').to_le_bytes());
        assert!(matches!(
            decode_utf16(&bytes),
            Err(DxaError::Decode { .. })
        ));
    }
}
