//! Overflow-safe integer parsing over the digit batch codec.
//!
//! [`parse_int`] consumes a *prefix* of its input: on success it
//! returns the parsed value together with the number of characters that
//! formed the numeral (sign and radix prefix included), so composite
//! grammars can continue parsing from there. Failure — no digits,
//! magnitude overflow, or a value outside the target type's range — is
//! the `None` sentinel.
//!
//! Digits are consumed in word-sized batches wherever a full window of
//! them remains (8 decimal digits, 8 binary digits, 4 hex digits), with
//! a one-character scalar fallback for the trailing partial batch or
//! the first invalid byte. All batch reads are bounds-checked slice
//! reads; the scalar boundary is exactly where a full window no longer
//! fits.

use crate::batch::{add8_bytes, all_hex_digits4, bytes_all_within_range, parse_digits8, parse_hex_digits4};
use crate::options::{IntParseOptions, Radix};
use crate::tables::{INV_LOG2_LOOKUP, INV_LOG10_2_MUL};

mod sealed {
    pub trait Sealed {}
}

/// Machine integer types the parser and formatter can target.
///
/// One generic entry point serves every width/signedness combination;
/// the per-type knowledge lives in these associated items.
pub trait Int: Copy + sealed::Sealed {
    const BITS: u32;
    const SIGNED: bool;

    /// Builds the value from an unsigned magnitude and a sign,
    /// rejecting magnitudes outside the type's range.
    #[doc(hidden)]
    fn from_magnitude(mag: u64, negative: bool) -> Option<Self>;

    /// Splits the value into its unsigned magnitude and sign.
    #[doc(hidden)]
    fn split_magnitude(self) -> (u64, bool);
}

macro_rules! impl_int_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Int for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;

            fn from_magnitude(mag: u64, negative: bool) -> Option<Self> {
                if negative || mag > <$t>::MAX as u64 {
                    None
                } else {
                    Some(mag as $t)
                }
            }

            fn split_magnitude(self) -> (u64, bool) {
                (self as u64, false)
            }
        }
    )*};
}

macro_rules! impl_int_signed {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Int for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;

            fn from_magnitude(mag: u64, negative: bool) -> Option<Self> {
                if negative {
                    if mag > <$t>::MAX as u64 + 1 {
                        None
                    } else {
                        Some((mag as $u).wrapping_neg() as $t)
                    }
                } else if mag > <$t>::MAX as u64 {
                    None
                } else {
                    Some(mag as $t)
                }
            }

            fn split_magnitude(self) -> (u64, bool) {
                (self.unsigned_abs() as u64, self < 0)
            }
        }
    )*};
}

impl_int_unsigned!(u8, u16, u32, u64);
impl_int_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

const ASCII_ZEROS_8: u64 = 0x3030_3030_3030_3030;

#[inline]
fn read_u64_be(s: &[u8], i: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&s[i..i + 8]);
    u64::from_be_bytes(b)
}

#[inline]
fn read_u32_be(s: &[u8], i: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&s[i..i + 4]);
    u32::from_be_bytes(b)
}

#[inline]
fn trim_leading_zeros(s: &[u8]) -> (&[u8], usize) {
    let n = s.iter().take_while(|&&b| b == b'0').count();
    (&s[n..], n)
}

/// Parses an unsigned binary magnitude, 8 digits per batch.
///
/// Returns the magnitude and the count of characters consumed (leading
/// zeros included), or `None` if the numeral has more significant
/// binary digits than `bits`.
pub(crate) fn parse_binary(s: &[u8], bits: u32) -> Option<(u64, usize)> {
    // each ASCII digit byte becomes its bit via one multiply
    const SPREAD: u64 = 0x0102_0408_1020_4080;
    const NOT_BIT: u64 = 0x7E7E_7E7E_7E7E_7E7E;

    let (s, zeros) = trim_leading_zeros(s);
    let bits = bits as usize;
    let mut n = 0u64;
    let mut i = 0;
    while i < bits {
        if i + 8 <= s.len() {
            let digs = add8_bytes(read_u64_be(s, i), 0xD0D0_D0D0_D0D0_D0D0);
            if i + 8 < s.len() && digs & NOT_BIT == 0 {
                n = (n << 8) + (digs.wrapping_mul(SPREAD) >> 56);
                i += 8;
                continue;
            }
        }
        // trailing partial batch, or a non-digit inside the window
        let lim = s.len().min(i + 8);
        let mut j = i;
        while j < lim && matches!(s[j], b'0' | b'1') {
            n = (n << 1) | u64::from(s[j] - b'0');
            j += 1;
        }
        return Some((n, zeros + j));
    }
    if i < s.len() && matches!(s[i], b'0' | b'1') {
        None // more significant digits than the target width holds
    } else {
        Some((n, zeros + i))
    }
}

/// Parses an unsigned decimal magnitude, 8 digits per batch while the
/// accumulated digit count provably cannot overflow, then one checked
/// digit at a time.
pub(crate) fn parse_decimal(s: &[u8], bits: u32) -> Option<(u64, usize)> {
    // digit count that always fits in `bits`, rounded down to whole batches
    let max_batch = ((bits as usize * INV_LOG10_2_MUL as usize) >> 16) & !7;

    let (s, zeros) = trim_leading_zeros(s);
    let mut n = 0u64;
    let mut i = 0;
    while i < max_batch {
        if i + 8 <= s.len() {
            let digs = read_u64_be(s, i) ^ ASCII_ZEROS_8;
            if i + 8 < s.len() && bytes_all_within_range(digs, 0, 10) {
                n = n * 100_000_000 + parse_digits8(digs);
                i += 8;
                continue;
            }
        }
        let lim = s.len().min(i + 8);
        let mut j = i;
        while j < lim && s[j].is_ascii_digit() {
            n = n * 10 + u64::from(s[j] - b'0');
            j += 1;
        }
        return Some((n, zeros + j));
    }
    while i < s.len() {
        let b = s[i];
        if !b.is_ascii_digit() {
            return Some((n, zeros + i));
        }
        n = n.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        i += 1;
    }
    Some((n, zeros + i))
}

/// Parses an unsigned hexadecimal magnitude, 4 digits per batch.
pub(crate) fn parse_hex(s: &[u8], nibbles: u32) -> Option<(u64, usize)> {
    let (s, zeros) = trim_leading_zeros(s);
    let nibbles = nibbles as usize;
    let mut n = 0u64;
    let mut i = 0;
    while i < nibbles {
        if i + 4 <= s.len() {
            let digs = read_u32_be(s, i);
            if i + 4 < s.len() && all_hex_digits4(digs) {
                n = (n << 16) + u64::from(parse_hex_digits4(digs));
                i += 4;
                continue;
            }
        }
        let lim = s.len().min(i + 4);
        let mut j = i;
        while j < lim {
            let Some(d) = (s[j] as char).to_digit(16) else {
                break;
            };
            n = n * 16 + u64::from(d);
            j += 1;
        }
        return Some((n, zeros + j));
    }
    if i < s.len() && s[i].is_ascii_hexdigit() {
        None
    } else {
        Some((n, zeros + i))
    }
}

/// Parses an unsigned magnitude in an arbitrary base (2-36), one
/// checked digit at a time, capped at the digit count any `bits`-wide
/// value can need.
pub(crate) fn parse_radix(s: &[u8], bits: u32, radix: u32) -> Option<(u64, usize)> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    let cap = 1 + ((bits as usize * INV_LOG2_LOOKUP[radix as usize] as usize) >> 16);
    let (s, zeros) = trim_leading_zeros(s);
    let lim = s.len().min(cap);
    let mut n = 0u64;
    let mut i = 0;
    while i < lim {
        let Some(d) = (s[i] as char).to_digit(radix) else {
            break;
        };
        n = n.checked_mul(u64::from(radix))?.checked_add(u64::from(d))?;
        i += 1;
    }
    Some((n, zeros + i))
}

/// Requires at least one digit after a two-character radix prefix, then
/// counts the prefix in the consumed length.
fn prefixed(parsed: Option<(u64, usize)>) -> Option<(u64, usize)> {
    let (mag, len) = parsed?;
    if len == 0 {
        return None;
    }
    Some((mag, len + 2))
}

/// Parses a prefix of `text` as an integer of type `I`.
///
/// Returns the value and the total count of characters consumed (sign
/// and radix prefix included), or `None` when no valid digits are
/// found, the magnitude overflows 64 bits, or the result does not fit
/// in `I`. Overflow never yields a partial result.
///
/// # Examples
///
/// ```rust
/// use numtext::{parse_int, IntParseOptions};
///
/// assert_eq!(parse_int::<u32>("123", IntParseOptions::new()), Some((123, 3)));
/// assert_eq!(parse_int::<i32>("-42", IntParseOptions::new()), Some((-42, 3)));
/// assert_eq!(parse_int::<u32>("0x1f!", IntParseOptions::adaptive()), Some((31, 4)));
/// assert_eq!(parse_int::<u32>("4294967296", IntParseOptions::new()), None);
/// ```
pub fn parse_int<I: Int>(text: &str, options: IntParseOptions) -> Option<(I, usize)> {
    let s = text.as_bytes();
    let mut idx = 0;
    let mut negative = false;
    match s.first() {
        Some(b'+') => idx = 1,
        Some(b'-') if I::SIGNED => {
            negative = true;
            idx = 1;
        }
        _ => {}
    }
    let rest = &s[idx..];
    if rest.is_empty() {
        return None;
    }

    let (mag, len) = match options.radix {
        Radix::Adaptive => {
            if rest[0] == b'0' {
                match rest.get(1) {
                    Some(b'b') => prefixed(parse_binary(&rest[2..], I::BITS))?,
                    Some(b'x') => prefixed(parse_hex(&rest[2..], I::BITS / 4))?,
                    Some(b'o') => prefixed(parse_radix(&rest[2..], I::BITS, 8))?,
                    _ => parse_radix(rest, I::BITS, 8)?,
                }
            } else {
                parse_decimal(rest, I::BITS)?
            }
        }
        Radix::Base(2) => parse_binary(rest, I::BITS)?,
        Radix::Base(10) => parse_decimal(rest, I::BITS)?,
        Radix::Base(16) => parse_hex(rest, I::BITS / 4)?,
        Radix::Base(r) => parse_radix(rest, I::BITS, r)?,
    };
    if len == 0 {
        return None;
    }

    let value = I::from_magnitude(mag, negative)?;
    Some((value, idx + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::IntParseOptions;

    fn dec() -> IntParseOptions {
        IntParseOptions::new()
    }

    #[test]
    fn decimal_basics() {
        assert_eq!(parse_int::<u32>("123", dec()), Some((123, 3)));
        assert_eq!(parse_int::<i32>("-42", dec()), Some((-42, 3)));
        assert_eq!(parse_int::<i32>("+7", dec()), Some((7, 2)));
        assert_eq!(parse_int::<u32>("-42", dec()), None); // sign needs a signed target
        assert_eq!(parse_int::<u32>("", dec()), None);
        assert_eq!(parse_int::<u32>("+", dec()), None);
        assert_eq!(parse_int::<u32>("x", dec()), None);
    }

    #[test]
    fn zero_runs_consume_fully() {
        assert_eq!(parse_int::<u32>("000", dec()), Some((0, 3)));
        assert_eq!(parse_int::<u64>("0000000000000000000000007", dec()), Some((7, 25)));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int::<u32>("123abc", dec()), Some((123, 3)));
        assert_eq!(parse_int::<u32>("99999999x", dec()), Some((99_999_999, 8)));
    }

    #[test]
    fn batches_agree_with_scalar() {
        // crosses the 8-digit batch boundary both ways
        for n in [1u64, 12_345_678, 123_456_789, 18_446_744_073_709_551_615] {
            let s = n.to_string();
            assert_eq!(parse_int::<u64>(&s, dec()), Some((n, s.len())));
        }
    }

    #[test]
    fn overflow_fails_entirely() {
        assert_eq!(parse_int::<u64>("18446744073709551615", dec()), Some((u64::MAX, 20)));
        assert_eq!(parse_int::<u64>("18446744073709551616", dec()), None);
        assert_eq!(parse_int::<u32>("4294967295", dec()), Some((u32::MAX, 10)));
        assert_eq!(parse_int::<u32>("4294967296", dec()), None);
        assert_eq!(parse_int::<i32>("2147483648", dec()), None);
        assert_eq!(parse_int::<i32>("-2147483648", dec()), Some((i32::MIN, 11)));
        assert_eq!(parse_int::<i32>("-2147483649", dec()), None);
    }

    #[test]
    fn fixed_radix() {
        let bin = IntParseOptions::new().with_radix(Radix::BINARY);
        let hex = IntParseOptions::new().with_radix(Radix::HEX);
        let oct = IntParseOptions::new().with_radix(Radix::OCTAL);
        assert_eq!(parse_int::<u8>("10110010", bin), Some((178, 8)));
        assert_eq!(parse_int::<u64>(&"1".repeat(64), bin), Some((u64::MAX, 64)));
        assert_eq!(parse_int::<u32>("deadBEEF", hex), Some((0xDEAD_BEEF, 8)));
        assert_eq!(parse_int::<u32>("ffg", hex), Some((0xFF, 2)));
        assert_eq!(parse_int::<u32>("777", oct), Some((0o777, 3)));
        assert_eq!(parse_int::<u32>("z1", IntParseOptions::new().with_radix(Radix::Base(36))), Some((35 * 36 + 1, 2)));
    }

    #[test]
    fn binary_batch_preserves_digit_order() {
        // 16 digits forces at least one full word batch
        let s = "1011001010110010";
        assert_eq!(
            parse_int::<u32>(s, IntParseOptions::new().with_radix(Radix::BINARY)),
            Some((0b1011_0010_1011_0010, 16))
        );
    }

    #[test]
    fn adaptive_prefixes() {
        let a = IntParseOptions::adaptive();
        assert_eq!(parse_int::<u32>("0x1F", a), Some((31, 4)));
        assert_eq!(parse_int::<u32>("0b101", a), Some((5, 5)));
        assert_eq!(parse_int::<u32>("0o755", a), Some((0o755, 5)));
        assert_eq!(parse_int::<u32>("0755", a), Some((0o755, 4)));
        assert_eq!(parse_int::<u32>("0", a), Some((0, 1)));
        assert_eq!(parse_int::<u32>("755", a), Some((755, 3)));
        assert_eq!(parse_int::<i32>("-0x10", a), Some((-16, 5)));
        // a prefix with no digits after it is not a numeral
        assert_eq!(parse_int::<u32>("0x", a), None);
        assert_eq!(parse_int::<u32>("0b", a), None);
    }

    #[test]
    fn hex_range_check_applies_after_accumulation() {
        let hex = IntParseOptions::new().with_radix(Radix::HEX);
        assert_eq!(parse_int::<u16>("ffff", hex), Some((0xFFFF, 4)));
        assert_eq!(parse_int::<u16>("10000", hex), None);
        assert_eq!(parse_int::<u64>("ffffffffffffffff", hex), Some((u64::MAX, 16)));
        assert_eq!(parse_int::<u64>("10000000000000000", hex), None);
    }
}
