//! The polynomial rolling hash that drives pool selection.
//!
//! `hash = hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits on
//! every step. Results are bit-for-bit reproducible across implementations
//! that use two's-complement wraparound.

/// Hash a string with multiplier 31 and 32-bit wraparound.
pub fn rolling_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Truncating remainder of `hash / 1000`. Negative for negative hashes.
pub fn raw_remainder(hash: i32) -> i32 {
    hash % 1000
}

/// Remainder folded into `0..1000`, i.e. `((hash % 1000) + 1000) % 1000`.
pub fn clamped_remainder(hash: i32) -> i32 {
    (raw_remainder(hash) + 1000) % 1000
}

/// Normalized fraction in `[0, 1)`.
pub fn fraction(hash: i32) -> f64 {
    f64::from(clamped_remainder(hash)) / 1000.0
}

/// Index into a pool of `len` entries chosen by hashing `input`.
///
/// `len` must be non-zero; the result is always `< len`.
pub fn pick_index(input: &str, len: usize) -> usize {
    let scaled = (fraction(rolling_hash(input)) * len as f64).floor() as usize;
    scaled.min(len.saturating_sub(1))
}
