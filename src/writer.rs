//! The append-only output sink and the aligned-text emission pass.
//!
//! [`StringWriter`] is the only destination the formatters know about:
//! it appends character runs, single characters, and repeated padding to
//! a caller-owned `String`, and never seeks or overwrites. The
//! [`write_aligned`] pass places a rendered numeral inside a padded
//! field (left / center / right) and is shared by the integer and float
//! formatters.

use crate::options::Alignment;

/// Write-only, append-only sink over a borrowed `String`.
pub struct StringWriter<'a> {
    buf: &'a mut String,
}

impl<'a> StringWriter<'a> {
    pub fn new(buf: &'a mut String) -> Self {
        StringWriter { buf }
    }

    /// Appends a character run.
    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends a single character.
    pub fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Appends `n` copies of `c`.
    pub fn write_repeat(&mut self, c: char, n: usize) {
        for _ in 0..n {
            self.buf.push(c);
        }
    }

    /// Appends a run of bytes known to be ASCII (digit emitters build
    /// their output as ASCII bytes in stack buffers).
    pub(crate) fn write_ascii(&mut self, bytes: &[u8]) {
        debug_assert!(bytes.is_ascii());
        self.buf.extend(bytes.iter().map(|&b| b as char));
    }
}

/// Splits a padding budget between the two sides of the field:
/// right-aligned content takes all padding before it, left-aligned all
/// after, centered splits with the extra pad char on the right.
pub(crate) fn split_padding(pad_len: usize, alignment: Alignment) -> (usize, usize) {
    match alignment {
        Alignment::Right => (pad_len, 0),
        Alignment::Left => (0, pad_len),
        Alignment::Center => (pad_len / 2, pad_len - pad_len / 2),
    }
}

/// Emits `text` inside a field of at least `width` characters, padded
/// with `pad` per `alignment`. Returns the field width actually written
/// (larger than `width` when the text itself is longer).
pub fn write_aligned(
    w: &mut StringWriter<'_>,
    text: &str,
    width: usize,
    alignment: Alignment,
    pad: char,
) -> usize {
    let len = text.chars().count();
    let (before, after) = split_padding(width.saturating_sub(len), alignment);
    w.write_repeat(pad, before);
    w.write_str(text);
    w.write_repeat(pad, after);
    width.max(len)
}
