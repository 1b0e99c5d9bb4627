//! Float parsing: integer part, fraction, and exponent, each over the
//! 4-digit decimal batch decoder.
//!
//! Like the integer parser this consumes a *prefix* of the input and
//! reports how many characters the numeral used. The accumulation is a
//! fast multiply-and-add pipeline, not a shortest-round-trip algorithm:
//! results are correct to within ordinary floating-point rounding, and
//! the exponent applies through the `10^e = 2^(e*log2(10))` identity.
//!
//! Three early exits keep pathological inputs cheap: an integer digit
//! run longer than the type's decimal range saturates to infinity, a
//! fraction batch that no longer changes the accumulated value stops
//! the fraction scan, and exponents are capped well past the range
//! where the result is already infinite or zero.

use crate::batch::{bytes_all_within_range, parse_digits4};
use crate::options::FloatParseOptions;
use crate::tables::LOG2_10;

mod sealed {
    pub trait Sealed {}
}

/// Binary floating-point types the parser and formatter can target.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + std::ops::Neg<Output = Self>
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::AddAssign
    + std::ops::MulAssign
    + sealed::Sealed
{
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;
    const TEN_K: Self;
    const TENTH: Self;
    const TEN_K_INV: Self;
    const INFINITY: Self;
    const NAN: Self;
    /// Largest power of ten the type can represent; decimal digit runs
    /// longer than this saturate.
    const MAX_EXP10: usize;

    fn from_u32(v: u32) -> Self;

    /// `self * 10^exp` through the base-2 exponential.
    fn mul_pow10(self, exp: i32) -> Self;
}

macro_rules! impl_float {
    ($($t:ty => $max_exp10:expr),*) => {$(
        impl sealed::Sealed for $t {}
        impl Float for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TEN: Self = 10.0;
            const TEN_K: Self = 10_000.0;
            const TENTH: Self = 0.1;
            const TEN_K_INV: Self = 1e-4;
            const INFINITY: Self = <$t>::INFINITY;
            const NAN: Self = <$t>::NAN;
            const MAX_EXP10: usize = $max_exp10;

            fn from_u32(v: u32) -> Self {
                v as $t
            }

            fn mul_pow10(self, exp: i32) -> Self {
                self * ((LOG2_10 * f64::from(exp)).exp2()) as $t
            }
        }
    )*};
}

impl_float!(f32 => 38, f64 => 308);

#[inline]
fn read_u32_be(s: &[u8], i: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&s[i..i + 4]);
    u32::from_be_bytes(b)
}

/// `Infinity`, `Inf` and `NaN` in any case. The sign is the caller's
/// problem.
fn parse_special<F: Float>(s: &[u8]) -> Option<(F, usize)> {
    if s.len() >= 8 && s[..8].eq_ignore_ascii_case(b"infinity") {
        return Some((F::INFINITY, 8));
    }
    if s.len() >= 3 && s[..3].eq_ignore_ascii_case(b"inf") {
        return Some((F::INFINITY, 3));
    }
    if s.len() >= 3 && s[..3].eq_ignore_ascii_case(b"nan") {
        return Some((F::NAN, 3));
    }
    None
}

/// Folds a run of ASCII decimal digits into `num`, 4 per batch.
/// `digits` must contain only digit bytes.
fn accumulate_digits<F: Float>(digits: &[u8], num: &mut F) {
    let mut i = 0;
    while i + 4 <= digits.len() {
        let dig = read_u32_be(digits, i) ^ 0x3030_3030;
        debug_assert!(bytes_all_within_range(u64::from(dig), 0, 10));
        *num = *num * F::TEN_K + F::from_u32(parse_digits4(dig));
        i += 4;
    }
    for &b in &digits[i..] {
        *num = *num * F::TEN + F::from_u32(u32::from(b - b'0'));
    }
}

/// Folds the fractional digit run after the point into `num`. Returns
/// how many digit characters the run had (all are consumed even when
/// accumulation stops early).
fn parse_fraction<F: Float>(s: &[u8], num: &mut F) -> usize {
    let run = s.iter().take_while(|b| b.is_ascii_digit()).count();
    let digits = &s[..run];
    let mut scale = F::ONE;
    let mut i = 0;
    while i + 4 <= digits.len() {
        let dig = read_u32_be(digits, i) ^ 0x3030_3030;
        scale = scale * F::TEN_K_INV;
        let batch = parse_digits4(dig);
        // zero batches still advance the scale, then cost nothing
        if batch != 0 {
            let next = *num + F::from_u32(batch) * scale;
            if next == *num {
                // below the value's precision; nothing further can register
                return run;
            }
            *num = next;
        }
        i += 4;
    }
    let mut unit = scale;
    for &b in &digits[i..] {
        unit = unit * F::TENTH;
        *num += F::from_u32(u32::from(b - b'0')) * unit;
    }
    run
}

/// Parses an exponent suffix (sign plus at least one digit) and applies
/// it to `num`. Returns the characters consumed, or `None` when no
/// digit follows.
fn parse_exponent<F: Float>(s: &[u8], num: &mut F) -> Option<usize> {
    let mut i = 0;
    let mut neg = false;
    match s.first() {
        Some(b'+') => i = 1,
        Some(b'-') => {
            neg = true;
            i = 1;
        }
        _ => {}
    }
    let start = i;
    let mut exp = 0i32;
    // the cap is far beyond both types' ranges; larger runs are already
    // infinity or zero
    while i < s.len() && s[i].is_ascii_digit() && exp < 10_000 {
        exp = exp * 10 + i32::from(s[i] - b'0');
        i += 1;
    }
    if i == start {
        return None;
    }
    *num = num.mul_pow10(if neg { -exp } else { exp });
    Some(i)
}

/// Parses a prefix of `text` as a float of type `F`.
///
/// Returns the value and the characters consumed, or `None` when there
/// is no digit at all, or when the notation the options demand is not
/// present (an exponent marker without digits, or a missing exponent
/// under [`Notation::Scientific`]).
///
/// [`Notation::Scientific`]: crate::options::Notation::Scientific
///
/// # Examples
///
/// ```rust
/// use numtext::{parse_float, FloatParseOptions};
///
/// let (v, n) = parse_float::<f64>("6.25e2", FloatParseOptions::new()).unwrap();
/// assert_eq!(n, 6);
/// assert!((v - 625.0).abs() < 1e-9);
/// ```
pub fn parse_float<F: Float>(text: &str, options: FloatParseOptions) -> Option<(F, usize)> {
    let s = text.as_bytes();
    let mut idx = 0;
    let mut negative = false;
    match s.first() {
        Some(b'+') => idx = 1,
        Some(b'-') => {
            negative = true;
            idx = 1;
        }
        _ => {}
    }
    let rest = &s[idx..];
    if rest.is_empty() {
        return None;
    }

    if let Some((v, n)) = parse_special::<F>(rest) {
        return Some((if negative { -v } else { v }, idx + n));
    }

    let zeros = rest.iter().take_while(|&&b| b == b'0').count();
    let int_digits = rest[zeros..].iter().take_while(|b| b.is_ascii_digit()).count();
    if int_digits > F::MAX_EXP10 {
        let v = if negative { -F::INFINITY } else { F::INFINITY };
        return Some((v, idx + zeros + int_digits));
    }

    let mut num = F::ZERO;
    accumulate_digits(&rest[zeros..zeros + int_digits], &mut num);
    let int_len = zeros + int_digits;

    let mut pos = int_len;
    let mut frac_digits = 0;
    if rest.get(pos) == Some(&b'.') {
        frac_digits = parse_fraction(&rest[pos + 1..], &mut num);
        pos += 1 + frac_digits;
    }
    if int_len == 0 && frac_digits == 0 {
        return None;
    }

    match rest.get(pos) {
        Some(&e) if (e | 0x20) == b'e' => {
            if options.notation.allows_scientific() {
                pos += 1 + parse_exponent(&rest[pos + 1..], &mut num)?;
            } else if !options.notation.allows_fixed() {
                return None;
            }
        }
        _ => {
            if !options.notation.allows_fixed() {
                return None;
            }
        }
    }

    Some((if negative { -num } else { num }, idx + pos))
}
