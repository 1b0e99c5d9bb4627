//! Explicit IEEE-754 bit-reinterpretation helpers.
//!
//! The float formatter converts small non-negative doubles to integers
//! by biasing them into the mantissa: adding `2^52` forces the value's
//! integer part into the low mantissa bits, which `to_bits` then reads
//! out directly. This is exact for integral values in `[0, 2^52)` and
//! rounds to nearest for fractional ones, which is precisely what the
//! fast 3-digit fraction path wants.

const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1u64 << MANTISSA_BITS) - 1;

/// Converts `f` in `[0, 2^52)` to an integer via mantissa biasing.
/// Rounds to nearest for non-integral inputs.
#[inline]
pub fn fast_to_int(f: f64) -> u64 {
    (f + (1u64 << MANTISSA_BITS) as f64).to_bits() & MANTISSA_MASK
}
