//! Format-spec strings: a compact mini-grammar compiled into option
//! values.
//!
//! The grammar is `[[fill]align][sign]['#']['0'][digits]['.'digits][type]`,
//! walked by one small state machine per numeric family. States only
//! move forward; a directive that belongs to an earlier state after a
//! later one was entered is an [`Error::Spec`], as is an unrecognized
//! character. A terminal type character (`d x X o b` for integers,
//! `e E f F g G` for floats) ends the walk immediately; a spec without
//! one yields the options accumulated so far, so the empty string is
//! the default options.
//!
//! For integers a digit run is context-sensitive: after an alignment
//! token it sets the field width, standalone it sets the minimum digit
//! count — `"04x"` renders `255` as `"00ff"` while `">4x"` renders it
//! as `"  ff"`. Float digit runs always set the field width.

use crate::error::{Error, Result};
use crate::options::{
    Alignment, FloatFormatOptions, FloatMode, IntBase, IntFormatOptions, IntParseOptions,
};
use crate::parse_int::parse_int;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum IntState {
    Begin,
    Align,
    Sign,
    Prefix,
    Zero,
    Width,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum FloatState {
    Begin,
    Align,
    Sign,
    Zero,
    Width,
    Precision,
}

fn advance<S: PartialOrd + Copy>(state: &mut S, next: S, pos: usize) -> Result<()> {
    if next <= *state {
        return Err(Error::spec(pos, "directive out of order"));
    }
    *state = next;
    Ok(())
}

fn alignment_of(c: char) -> Alignment {
    match c {
        '<' => Alignment::Left,
        '^' => Alignment::Center,
        _ => Alignment::Right,
    }
}

/// Reads the decimal digit run starting at `i` with the crate's own
/// parser. The caller saw a digit, so only overflow can fail.
fn digit_run(s: &str, i: usize) -> Result<(u32, usize)> {
    parse_int::<u32>(&s[i..], IntParseOptions::new())
        .ok_or_else(|| Error::spec(i, "digit run out of range"))
}

pub(crate) fn parse_int_spec(spec: &str) -> Result<IntFormatOptions> {
    let mut options = IntFormatOptions::new();
    let mut state = IntState::Begin;
    let mut has_align = false;
    let mut i = 0;
    while i < spec.len() {
        let mut chars = spec[i..].chars();
        let c = match chars.next() {
            Some(c) => c,
            None => break,
        };
        if let Some(a) = chars.next().filter(|a| matches!(a, '<' | '^' | '>')) {
            advance(&mut state, IntState::Align, i)?;
            options.pad = c;
            options.alignment = alignment_of(a);
            has_align = true;
            i += c.len_utf8() + 1;
            continue;
        }
        match c {
            '<' | '^' | '>' => {
                advance(&mut state, IntState::Align, i)?;
                options.alignment = alignment_of(c);
                has_align = true;
                i += 1;
            }
            '+' | '-' | ' ' => {
                advance(&mut state, IntState::Sign, i)?;
                options.show_sign = c == '+';
                i += 1;
            }
            '#' => {
                advance(&mut state, IntState::Prefix, i)?;
                options.show_prefix = true;
                i += 1;
            }
            '0' => {
                advance(&mut state, IntState::Zero, i)?;
                options.zero_pad = true;
                i += 1;
            }
            '1'..='9' => {
                advance(&mut state, IntState::Width, i)?;
                let (n, len) = digit_run(spec, i)?;
                if has_align {
                    options.width = n;
                } else {
                    options.num_len = n;
                }
                i += len;
            }
            'd' => return Ok(options.with_base(IntBase::Decimal)),
            'x' => return Ok(options.with_base(IntBase::Hex)),
            'X' => return Ok(options.with_base(IntBase::CapHex)),
            'o' => return Ok(options.with_base(IntBase::Octal)),
            'b' => return Ok(options.with_base(IntBase::Binary)),
            _ => return Err(Error::spec(i, "unrecognized directive")),
        }
    }
    Ok(options)
}

pub(crate) fn parse_float_spec(spec: &str) -> Result<FloatFormatOptions> {
    let mut options = FloatFormatOptions::new();
    let mut state = FloatState::Begin;
    let mut i = 0;
    while i < spec.len() {
        let mut chars = spec[i..].chars();
        let c = match chars.next() {
            Some(c) => c,
            None => break,
        };
        if let Some(a) = chars.next().filter(|a| matches!(a, '<' | '^' | '>')) {
            advance(&mut state, FloatState::Align, i)?;
            options.pad = c;
            options.alignment = alignment_of(a);
            i += c.len_utf8() + 1;
            continue;
        }
        match c {
            '<' | '^' | '>' => {
                advance(&mut state, FloatState::Align, i)?;
                options.alignment = alignment_of(c);
                i += 1;
            }
            '+' | '-' | ' ' => {
                advance(&mut state, FloatState::Sign, i)?;
                options.show_sign = c == '+';
                i += 1;
            }
            '0' => {
                advance(&mut state, FloatState::Zero, i)?;
                options.zero_pad = true;
                i += 1;
            }
            '1'..='9' => {
                advance(&mut state, FloatState::Width, i)?;
                let (n, len) = digit_run(spec, i)?;
                options.width = n;
                i += len;
            }
            '.' => {
                advance(&mut state, FloatState::Precision, i)?;
                if !spec.as_bytes().get(i + 1).is_some_and(u8::is_ascii_digit) {
                    return Err(Error::spec(i, "precision needs digits"));
                }
                let (n, len) = digit_run(spec, i + 1)?;
                options.precision = Some(n);
                i += 1 + len;
            }
            'e' => return Ok(options.with_mode(FloatMode::Scientific)),
            'E' => return Ok(options.with_mode(FloatMode::SciCap)),
            'f' | 'F' => return Ok(options.with_mode(FloatMode::Fixed)),
            'g' => return Ok(options.with_mode(FloatMode::General)),
            'G' => return Ok(options.with_mode(FloatMode::GenCap)),
            _ => return Err(Error::spec(i, "unrecognized directive")),
        }
    }
    Ok(options)
}

impl IntFormatOptions {
    /// Parses a format-spec string such as `"04x"` or `"*^#10d"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numtext::{IntBase, IntFormatOptions};
    ///
    /// let options = IntFormatOptions::from_spec("04x")?;
    /// assert_eq!(options.base, IntBase::Hex);
    /// assert_eq!(options.num_len, 4);
    /// assert!(options.zero_pad);
    /// # Ok::<(), numtext::Error>(())
    /// ```
    pub fn from_spec(spec: &str) -> Result<Self> {
        parse_int_spec(spec)
    }
}

impl FloatFormatOptions {
    /// Parses a format-spec string such as `".2f"` or `">12.3e"`.
    pub fn from_spec(spec: &str) -> Result<Self> {
        parse_float_spec(spec)
    }
}
