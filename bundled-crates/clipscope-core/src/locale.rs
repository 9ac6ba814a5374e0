//! Locale identifier decoding.
//!
//! The `Locale` clipboard format holds an LCID as a little-endian unsigned
//! integer. Windows always supplies four bytes, but nothing guarantees it,
//! so the value is accumulated over the whole buffer with arbitrary precision:
//! byte `i` contributes `byte << (8 * i)`.

/// Decimal divisor used per limb step (largest power of ten below 2^64)
const CHUNK: u64 = 10_000_000_000_000_000_000;
const CHUNK_DIGITS: usize = 19;

/// Render a little-endian unsigned integer of any length as decimal.
///
/// An empty buffer is zero.
///
/// ```rust
/// use clipscope_core::locale::decode_le_decimal;
///
/// assert_eq!(decode_le_decimal(&[0x09, 0x04]), "1033");
/// assert_eq!(decode_le_decimal(&[]), "0");
/// ```
pub fn decode_le_decimal(buffer: &[u8]) -> String {
    if buffer.len() <= 16 {
        let mut value: u128 = 0;
        for (i, byte) in buffer.iter().enumerate() {
            value |= u128::from(*byte) << (8 * i);
        }
        return value.to_string();
    }

    // u32 limbs, most significant first
    let mut limbs: Vec<u32> = buffer
        .chunks(4)
        .rev()
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte))
        })
        .collect();
    let first = limbs.iter().position(|l| *l != 0).unwrap_or(limbs.len());
    limbs.drain(..first);

    let mut chunks: Vec<u64> = Vec::new();
    while !limbs.is_empty() {
        let mut remainder: u128 = 0;
        for limb in limbs.iter_mut() {
            let current = (remainder << 32) | u128::from(*limb);
            *limb = (current / u128::from(CHUNK)) as u32;
            remainder = current % u128::from(CHUNK);
        }
        chunks.push(remainder as u64);
        let first = limbs.iter().position(|l| *l != 0).unwrap_or(limbs.len());
        limbs.drain(..first);
    }

    let Some((most, rest)) = chunks.split_last() else {
        return "0".to_string();
    };
    let mut out = most.to_string();
    for chunk in rest.iter().rev() {
        out.push_str(&format!("{:0width$}", chunk, width = CHUNK_DIGITS));
    }
    out
}
