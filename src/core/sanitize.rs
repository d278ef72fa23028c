//! Escaping of code points that XML 1.0 does not allow in documents.

use std::borrow::Cow;
use std::fmt::Write;

/// Inclusive code point ranges forbidden by XML 1.0: control characters,
/// surrogates and the two noncharacters closing every plane.
const ILLEGAL_RANGES: &[(u32, u32)] = &[
    (0x00, 0x08),
    (0x0B, 0x1F),
    (0x7F, 0x84),
    (0x86, 0x9F),
    (0xD800, 0xDFFF),
    (0xFDD0, 0xFDDF),
    (0xFFFE, 0xFFFF),
    (0x1FFFE, 0x1FFFF),
    (0x2FFFE, 0x2FFFF),
    (0x3FFFE, 0x3FFFF),
    (0x4FFFE, 0x4FFFF),
    (0x5FFFE, 0x5FFFF),
    (0x6FFFE, 0x6FFFF),
    (0x7FFFE, 0x7FFFF),
    (0x8FFFE, 0x8FFFF),
    (0x9FFFE, 0x9FFFF),
    (0xAFFFE, 0xAFFFF),
    (0xBFFFE, 0xBFFFF),
    (0xCFFFE, 0xCFFFF),
    (0xDFFFE, 0xDFFFF),
    (0xEFFFE, 0xEFFFF),
    (0xFFFFE, 0xFFFFF),
    (0x10FFFE, 0x10FFFF),
];

pub fn is_illegal_xml_char(c: char) -> bool {
    let cp = c as u32;
    ILLEGAL_RANGES
        .iter()
        .filter(|(low, _)| *low <= char::MAX as u32)
        .any(|&(low, high)| (low..=high).contains(&cp))
}

/// Replaces every illegal code point with its decimal character reference
/// (`&#N;`). Borrows the input when nothing needs replacing.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_illegal_xml_char) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if is_illegal_xml_char(c) {
            // Writing to a String cannot fail.
            let _ = write!(out, "&#{};", c as u32);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
