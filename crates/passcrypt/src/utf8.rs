//! Variable-length UTF-8 codec.
//!
//! Hand-rolled rather than routed through `String::from_utf8` so malformed
//! ciphertext surfaces the same error contract as the rest of the façade,
//! with the offset of the offending byte.

use crate::error::Error;

/// Code points at or above this bound are not encodable.
const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Encodes text to its UTF-8 byte sequence.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        // `char` is always below the limit, so this cannot fail here.
        push_code_point(&mut out, ch as u32).expect("char is a valid code point");
    }
    out
}

/// Encodes a sequence of raw code points, rejecting values beyond U+10FFFF.
pub fn encode_code_points(code_points: &[u32]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(code_points.len());
    for &cp in code_points {
        push_code_point(&mut out, cp)?;
    }
    Ok(out)
}

/// Appends the 1-4 byte encoding of one code point.
fn push_code_point(out: &mut Vec<u8>, cp: u32) -> Result<(), Error> {
    match cp {
        0..=0x7f => out.push(cp as u8),
        0x80..=0x7ff => {
            out.push(0xc0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3f) as u8);
        }
        0x800..=0xffff => {
            out.push(0xe0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
            out.push(0x80 | (cp & 0x3f) as u8);
        }
        0x1_0000..=0x10_ffff => {
            out.push(0xf0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3f) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3f) as u8);
            out.push(0x80 | (cp & 0x3f) as u8);
        }
        _ => return Err(Error::InvalidCharacterCode(cp)),
    }
    debug_assert!(cp < CODE_POINT_LIMIT);
    Ok(())
}

/// Decodes a UTF-8 byte sequence back to text.
///
/// Fails with [`Error::InvalidUtf8Sequence`] on an invalid leading byte, a
/// continuation byte outside 0x80-0xBF, a truncated tail, or a sequence that
/// does not map to a Unicode scalar value.
pub fn decode(bytes: &[u8]) -> Result<String, Error> {
    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        let lead = bytes[pos];
        let (len, mut cp) = match lead {
            0x00..=0x7f => (1, u32::from(lead)),
            0xc0..=0xdf => (2, u32::from(lead & 0x1f)),
            0xe0..=0xef => (3, u32::from(lead & 0x0f)),
            0xf0..=0xf7 => (4, u32::from(lead & 0x07)),
            _ => return Err(Error::InvalidUtf8Sequence { offset: pos }),
        };
        if pos + len > bytes.len() {
            return Err(Error::InvalidUtf8Sequence { offset: pos });
        }
        for offset in pos + 1..pos + len {
            let cont = bytes[offset];
            if !(0x80..=0xbf).contains(&cont) {
                return Err(Error::InvalidUtf8Sequence { offset });
            }
            cp = (cp << 6) | u32::from(cont & 0x3f);
        }
        match char::from_u32(cp) {
            Some(ch) => out.push(ch),
            None => return Err(Error::InvalidUtf8Sequence { offset: pos }),
        }
        pos += len;
    }
    Ok(out)
}
