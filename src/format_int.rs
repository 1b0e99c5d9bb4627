//! Integer-to-text emission over the BCD batch encoders.
//!
//! Digits are produced in word-sized groups: decimal numerals are
//! repacked through the BCD encoders (8 digits per multiply cascade),
//! binary/octal/hex numerals spread their bit groups across a word one
//! digit per byte, and a single `| 0x30...` turns the whole group into
//! ASCII at once. Groups are assembled back-to-front in a stack buffer,
//! then the exact digit count is appended to the output in one pass.
//!
//! Field layout is `[pad] [sign] [prefix] [numeral fill] digits [pad]`:
//! `num_len` pads the numeral itself with zeros or spaces, `width` pads
//! the whole field per the alignment.

use crate::batch::u64_to_bcd8;
use crate::options::{IntBase, IntFormatOptions};
use crate::parse_int::Int;
use crate::tables::{log10_u64, U64_DIGITS};
use crate::writer::{split_padding, StringWriter};

const ASCII_ZEROS_4: u32 = 0x3030_3030;
const ASCII_ZEROS_8: u64 = 0x3030_3030_3030_3030;

/// Spreads the 8 bits of `b` across a word, one bit value per byte,
/// least significant bit in the least significant byte.
///
/// The multiplier is `sum(2^(7k))`, which shifts bit `i` to position
/// `8i` among others; masking even and odd source bits separately keeps
/// the stray products from ever colliding.
#[inline]
fn spread_bits(b: u8) -> u64 {
    const MUL: u64 = 0x0002_0408_1020_4081;
    let b = u64::from(b);
    (((b & 0x55) * MUL) | ((b & 0xAA) * MUL)) & 0x0101_0101_0101_0101
}

/// Spreads 4 packed octal digits (`x < 4096`) across a word, one digit
/// per byte, least significant digit in the least significant byte.
#[inline]
fn spread_octal(x: u32) -> u32 {
    (x & 0o7) | ((x & 0o70) << 5) | ((x & 0o700) << 10) | ((x & 0o7000) << 15)
}

/// Spreads 8 nibbles (`x < 2^32`) across a word, one nibble per byte,
/// then maps each to its ASCII hex digit.
#[inline]
fn hex_ascii8(x: u64, upper: bool) -> u64 {
    let x = ((x & 0xFFFF_0000) << 16) | (x & 0x0000_FFFF);
    let x = ((x & 0x0000_FF00_0000_FF00) << 8) | (x & 0x0000_00FF_0000_00FF);
    let x = ((x & 0x00F0_00F0_00F0_00F0) << 4) | (x & 0x000F_000F_000F_000F);
    // bytes 10-15 need the letter offset; +6 exposes them via bit 4
    let letters = ((x + 0x0606_0606_0606_0606) & 0x1010_1010_1010_1010) >> 4;
    x + ASCII_ZEROS_8 + letters * if upper { 7 } else { 39 }
}

/// Emits `digits` decimal digits of `n` (`digits` must equal the count
/// `n` actually has, or be at most 8 more than it for zero-padding via
/// the final BCD group).
pub(crate) fn push_u64_decimal(w: &mut StringWriter<'_>, mut n: u64, digits: usize) {
    let mut buf = [0u8; U64_DIGITS + 4];
    let mut i = buf.len();
    while n >= 100_000_000 {
        let group = (u64_to_bcd8(n % 100_000_000) | ASCII_ZEROS_8).to_be_bytes();
        n /= 100_000_000;
        i -= 8;
        buf[i..i + 8].copy_from_slice(&group);
    }
    let rem = digits - (buf.len() - i);
    let group = (u64_to_bcd8(n) | ASCII_ZEROS_8).to_be_bytes();
    i -= rem;
    buf[i..i + rem].copy_from_slice(&group[8 - rem..]);
    w.write_ascii(&buf[i..]);
}

fn push_u64_binary(w: &mut StringWriter<'_>, mut n: u64, digits: usize) {
    let mut buf = [0u8; 64];
    let mut i = buf.len();
    loop {
        let group = (spread_bits(n as u8) | ASCII_ZEROS_8).to_be_bytes();
        i -= 8;
        buf[i..i + 8].copy_from_slice(&group);
        n >>= 8;
        if buf.len() - i >= digits {
            break;
        }
    }
    w.write_ascii(&buf[buf.len() - digits..]);
}

fn push_u64_octal(w: &mut StringWriter<'_>, mut n: u64, digits: usize) {
    let mut buf = [0u8; 24];
    let mut i = buf.len();
    loop {
        let group = (spread_octal((n & 0xFFF) as u32) | ASCII_ZEROS_4).to_be_bytes();
        i -= 4;
        buf[i..i + 4].copy_from_slice(&group);
        n >>= 12;
        if buf.len() - i >= digits {
            break;
        }
    }
    w.write_ascii(&buf[buf.len() - digits..]);
}

fn push_u64_hex(w: &mut StringWriter<'_>, n: u64, digits: usize, upper: bool) {
    let mut buf = [0u8; 16];
    buf[..8].copy_from_slice(&hex_ascii8(n >> 32, upper).to_be_bytes());
    buf[8..].copy_from_slice(&hex_ascii8(n & 0xFFFF_FFFF, upper).to_be_bytes());
    w.write_ascii(&buf[buf.len() - digits..]);
}

/// Emits an unsigned magnitude with an explicit sign slot. Returns the
/// field width actually written.
pub(crate) fn format_u64(
    w: &mut StringWriter<'_>,
    mag: u64,
    options: &IntFormatOptions,
    sign: Option<char>,
) -> usize {
    let bit_width = (64 - mag.leading_zeros()) as usize;
    let nlen = if mag == 0 {
        1
    } else {
        match options.base {
            IntBase::Decimal => 1 + log10_u64(mag) as usize,
            IntBase::Binary => bit_width,
            IntBase::Octal => (bit_width + 2) / 3,
            IntBase::Hex | IntBase::CapHex => (bit_width + 3) / 4,
        }
    };
    let prefix = if options.show_prefix {
        options.base.prefix()
    } else {
        None
    };

    let target = nlen.max(options.num_len as usize);
    let body = target + usize::from(sign.is_some()) + prefix.map_or(0, str::len);
    let pad_len = (options.width as usize).saturating_sub(body);
    let (before, after) = split_padding(pad_len, options.alignment);

    w.write_repeat(options.pad, before);
    if let Some(c) = sign {
        w.write_char(c);
    }
    if let Some(p) = prefix {
        w.write_str(p);
    }
    w.write_repeat(if options.zero_pad { '0' } else { ' ' }, target - nlen);
    if mag == 0 {
        w.write_char('0');
    } else {
        match options.base {
            IntBase::Decimal => push_u64_decimal(w, mag, nlen),
            IntBase::Binary => push_u64_binary(w, mag, nlen),
            IntBase::Octal => push_u64_octal(w, mag, nlen),
            IntBase::Hex => push_u64_hex(w, mag, nlen, false),
            IntBase::CapHex => push_u64_hex(w, mag, nlen, true),
        }
    }
    w.write_repeat(options.pad, after);

    (options.width as usize).max(body)
}

/// Appends `value` to the writer per `options`. Returns the field width
/// actually written.
///
/// # Examples
///
/// ```rust
/// use numtext::{IntBase, IntFormatOptions};
///
/// let hex = IntFormatOptions::new()
///     .with_base(IntBase::Hex)
///     .with_num_len(4)
///     .with_zero_pad(true);
/// assert_eq!(numtext::format_int(255u32, &hex), "00ff");
/// ```
pub fn write_int<I: Int>(w: &mut StringWriter<'_>, value: I, options: &IntFormatOptions) -> usize {
    let (mag, negative) = value.split_magnitude();
    let sign = if negative {
        Some('-')
    } else if options.show_sign {
        Some('+')
    } else {
        None
    };
    format_u64(w, mag, options, sign)
}
