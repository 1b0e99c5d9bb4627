//! Constant lookup tables shared by the parsers and formatters.
//!
//! Everything here is process-wide immutable data: fixed-point
//! approximations of `1 / log2(n)` (scaled by `2^16`), the powers of
//! ten representable in a `u64`, and the `log2(10)` constant used by
//! the exponent fast path. Safe for unsynchronized concurrent reads.

/// `round(2^16 / log2(n))` for `n` in `0..=36`. Index 0 and 1 saturate.
/// Multiplying a bit count by entry `n` and shifting right 16 bounds
/// the base-`n` digit count of a value with that many bits.
pub const INV_LOG2_LOOKUP: [u32; 37] = [
    !0, !0, 65536, 41348, 32768, 28224, 25352, 23344, 21845, 20674, 19728, 18944, 18280, 17710,
    17212, 16774, 16384, 16033, 15716, 15427, 15163, 14920, 14696, 14487, 14293, 14112, 13942,
    13782, 13632, 13490, 13355, 13228, 13107, 12991, 12881, 12776, 12676,
];

/// Fixed-point `1 / log2(10)`, scaled by `2^16`. Multiplying a bit count
/// by this and shifting right 16 bounds the decimal digit count.
pub const INV_LOG10_2_MUL: u32 = INV_LOG2_LOOKUP[10];

/// `log2(10)` as a double, for the `value * 2^(log2(10) * exp)` identity.
pub const LOG2_10: f64 = 3.321928094887362;

/// Every power of ten that fits in a `u64`.
pub const POWERS_OF_10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Maximum decimal digit count of a `u64`.
pub const U64_DIGITS: usize = 20;

/// `floor(log10(x))` for `x > 0`, via the bit-width approximation plus a
/// one-step power-of-ten correction.
#[inline]
pub fn log10_u64(x: u64) -> u32 {
    debug_assert!(x > 0);
    let approx = (64 - x.leading_zeros()) * INV_LOG10_2_MUL >> 16;
    approx - u32::from(x < POWERS_OF_10[approx as usize])
}

/// `10.0^e` without going through a general `pow` for the common case.
#[inline]
pub fn exp10i(e: i32) -> f64 {
    if (0..20).contains(&e) {
        POWERS_OF_10[e as usize] as f64
    } else {
        10f64.powi(e)
    }
}
