//! RFC 4648 Base64 codec, standard alphabet with `=` padding.

use crate::error::Error;

static ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encodes bytes to Base64 text.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let group = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        for shift in [18, 12, 6, 0] {
            out.push(ALPHABET[(group >> shift) as usize & 0x3f] as char);
        }
    }
    match chunks.remainder() {
        [] => {}
        [b0] => {
            let group = u32::from(*b0) << 16;
            out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
            out.push_str("==");
        }
        [b0, b1] => {
            let group = (u32::from(*b0) << 16) | (u32::from(*b1) << 8);
            out.push(ALPHABET[(group >> 18) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3f] as char);
            out.push(ALPHABET[(group >> 6) as usize & 0x3f] as char);
            out.push('=');
        }
        _ => unreachable!("remainder of chunks_exact(3) is at most two bytes"),
    }
    out
}

/// Decodes Base64 text back to bytes.
///
/// Input length must be a multiple of four; padding is only accepted in the
/// final group. Errors carry the offset of the offending character.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    let bytes = text.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidBase64 {
            offset: bytes.len(),
        });
    }

    let mut out = Vec::with_capacity(bytes.len() / 4 * 3);
    for (group_idx, group) in bytes.chunks_exact(4).enumerate() {
        let base = group_idx * 4;
        let last = base + 4 == bytes.len();
        let pad = group.iter().rev().take_while(|&&b| b == b'=').count();
        if pad > 2 || (pad > 0 && !last) {
            return Err(Error::InvalidBase64 { offset: base });
        }
        let mut bits = 0u32;
        for (i, &b) in group[..4 - pad].iter().enumerate() {
            let value = sextet(b).ok_or(Error::InvalidBase64 { offset: base + i })?;
            bits = (bits << 6) | u32::from(value);
        }
        bits <<= 6 * pad as u32;
        let emit = 3 - pad;
        out.push((bits >> 16) as u8);
        if emit > 1 {
            out.push((bits >> 8) as u8);
        }
        if emit > 2 {
            out.push(bits as u8);
        }
    }
    Ok(out)
}

/// Maps one alphabet character back to its 6-bit value.
fn sextet(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
