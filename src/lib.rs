//! # numtext
//!
//! Fast numeric text codec: word-parallel parsing and formatting of
//! integers and floats, plus a compact format-spec mini-language.
//!
//! Digits move through the codec in word-sized batches — 8 decimal or
//! binary digits, or 4 hex digits, validated and decoded with a couple
//! of multiplies instead of a per-character loop — and come back out
//! through BCD repacking, where one `| 0x30` turns a whole group into
//! ASCII. All word reads are bounds-checked slice reads; the crate
//! contains no `unsafe`.
//!
//! ## Parsing
//!
//! The parsers are *prefix* parsers: they return the value together
//! with how many characters the numeral used, so they compose into
//! larger grammars. Overflow is a hard failure, never a partial result.
//!
//! ```rust
//! use numtext::{parse_int, parse_float, FloatParseOptions, IntParseOptions};
//!
//! assert_eq!(parse_int::<u32>("123 apples", IntParseOptions::new()), Some((123, 3)));
//! assert_eq!(parse_int::<i64>("-0x1f", IntParseOptions::adaptive()), Some((-31, 5)));
//! assert_eq!(parse_int::<u32>("4294967296", IntParseOptions::new()), None);
//!
//! let (v, consumed) = parse_float::<f64>("6.25e2", FloatParseOptions::new()).unwrap();
//! assert_eq!(consumed, 6);
//! assert!((v - 625.0).abs() < 1e-9);
//! ```
//!
//! For whole-input parsing there are `FromStr`-shaped conveniences:
//!
//! ```rust
//! let n: u16 = numtext::int_from_str("1337")?;
//! assert_eq!(n, 1337);
//! assert!(numtext::int_from_str::<u16>("1337!").is_err());
//! # Ok::<(), numtext::Error>(())
//! ```
//!
//! ## Formatting
//!
//! Formatting is driven by option values built either with `with_*`
//! chains or from a format-spec string:
//!
//! ```rust
//! use numtext::{IntBase, IntFormatOptions};
//!
//! let hex = IntFormatOptions::new()
//!     .with_base(IntBase::Hex)
//!     .with_num_len(4)
//!     .with_zero_pad(true);
//! assert_eq!(numtext::format_int(255u32, &hex), "00ff");
//!
//! assert_eq!(numtext::format_int_spec(255u32, "04x")?, "00ff");
//! assert_eq!(numtext::format_int_spec(0u32, "05d")?, "00000");
//! assert_eq!(numtext::format_float_spec(3.14159, ".2f")?, "3.14");
//! # Ok::<(), numtext::Error>(())
//! ```
//!
//! The `write_*` forms append to a caller-owned buffer through
//! [`StringWriter`] and return the field width written, for callers
//! that format many values into one string.

pub mod batch;
mod error;
mod float_bits;
mod format_float;
mod format_int;
mod options;
mod parse_float;
mod parse_int;
mod spec;
mod tables;
mod writer;

pub use error::{Error, Result};
pub use format_float::write_float;
pub use format_int::write_int;
pub use options::{
    Alignment, FloatFormatOptions, FloatMode, FloatParseOptions, IntBase, IntFormatOptions,
    IntParseOptions, Notation, Radix,
};
pub use parse_float::{parse_float, Float};
pub use parse_int::{parse_int, Int};
pub use writer::{write_aligned, StringWriter};

/// Parses the whole of `text` as an integer.
///
/// Unlike [`parse_int`] this rejects trailing input: the numeral must
/// account for every character.
pub fn int_from_str<I: Int>(text: &str) -> Result<I> {
    let (value, consumed) =
        parse_int(text, IntParseOptions::new()).ok_or_else(|| Error::invalid_number(text))?;
    if consumed != text.len() {
        return Err(Error::trailing(consumed, text));
    }
    Ok(value)
}

/// Parses the whole of `text` as a float, accepting both fixed and
/// scientific notation.
pub fn float_from_str<F: Float>(text: &str) -> Result<F> {
    let (value, consumed) =
        parse_float(text, FloatParseOptions::new()).ok_or_else(|| Error::invalid_number(text))?;
    if consumed != text.len() {
        return Err(Error::trailing(consumed, text));
    }
    Ok(value)
}

/// Formats `value` into a fresh `String` per `options`.
pub fn format_int<I: Int>(value: I, options: &IntFormatOptions) -> String {
    let mut out = String::new();
    let mut w = StringWriter::new(&mut out);
    write_int(&mut w, value, options);
    out
}

/// Formats `f` into a fresh `String` per `options`.
pub fn format_float(f: f64, options: &FloatFormatOptions) -> String {
    let mut out = String::new();
    let mut w = StringWriter::new(&mut out);
    write_float(&mut w, f, options);
    out
}

/// Formats `value` per a format-spec string, e.g. `"#06x"`.
pub fn format_int_spec<I: Int>(value: I, spec: &str) -> Result<String> {
    Ok(format_int(value, &IntFormatOptions::from_spec(spec)?))
}

/// Formats `f` per a format-spec string, e.g. `">10.3e"`.
pub fn format_float_spec(f: f64, spec: &str) -> Result<String> {
    Ok(format_float(f, &FloatFormatOptions::from_spec(spec)?))
}
