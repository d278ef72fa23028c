use encoding_rs::{mem::decode_latin1, UTF_8};

/// Decodes input bytes into text restricted to the Latin-1 range.
///
/// Valid UTF-8 (BOM stripped) is taken as UTF-8; anything else is read as
/// ISO-8859-1, byte for byte. Characters above U+00FF are then dropped one
/// by one, so decoding never fails.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.chars().filter(|c| (*c as u32) <= 0xFF).collect(),
        None => {
            tracing::debug!("input is not UTF-8, decoding as ISO-8859-1");
            decode_latin1(bytes).into_owned()
        }
    }
}
