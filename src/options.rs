//! Option types for numeric parsing and formatting.
//!
//! These are plain value types created per call and discarded after
//! use. Formatting options follow the same builder idiom throughout:
//! start from `default()` and chain `with_*` methods.
//!
//! ```rust
//! use numtext::{IntBase, IntFormatOptions};
//!
//! let options = IntFormatOptions::new()
//!     .with_base(IntBase::Hex)
//!     .with_num_len(4)
//!     .with_zero_pad(true);
//! assert_eq!(numtext::format_int(255u32, &options), "00ff");
//! ```

/// Horizontal placement of a numeral inside its padded field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Output radix for integer formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IntBase {
    #[default]
    Decimal,
    Binary,
    Octal,
    Hex,
    CapHex,
}

impl IntBase {
    /// Two-character radix prefix (`0b`, `0o`, `0x`, `0X`), or `None`
    /// for decimal.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            IntBase::Decimal => None,
            IntBase::Binary => Some("0b"),
            IntBase::Octal => Some("0o"),
            IntBase::Hex => Some("0x"),
            IntBase::CapHex => Some("0X"),
        }
    }
}

/// Integer formatting options.
///
/// `num_len` and `width` are independent by design: `num_len` pads the
/// numeral itself (with zeros or spaces), `width` pads the whole field
/// (with `pad`, split per `alignment`).
#[derive(Clone, Debug, PartialEq)]
pub struct IntFormatOptions {
    /// Minimum digit count of the numeral itself.
    pub num_len: u32,
    /// Minimum total field width.
    pub width: u32,
    pub alignment: Alignment,
    pub pad: char,
    /// Emit `+` for non-negative values.
    pub show_sign: bool,
    /// Pad the numeral to `num_len` with zeros instead of spaces.
    pub zero_pad: bool,
    /// Emit the two-character radix prefix for non-decimal bases.
    pub show_prefix: bool,
    pub base: IntBase,
}

impl Default for IntFormatOptions {
    fn default() -> Self {
        IntFormatOptions {
            num_len: 0,
            width: 0,
            alignment: Alignment::default(),
            pad: ' ',
            show_sign: false,
            zero_pad: false,
            show_prefix: false,
            base: IntBase::default(),
        }
    }
}

impl IntFormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base(mut self, base: IntBase) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_num_len(mut self, num_len: u32) -> Self {
        self.num_len = num_len;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub fn with_show_sign(mut self, show_sign: bool) -> Self {
        self.show_sign = show_sign;
        self
    }

    #[must_use]
    pub fn with_zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }

    #[must_use]
    pub fn with_show_prefix(mut self, show_prefix: bool) -> Self {
        self.show_prefix = show_prefix;
        self
    }
}

/// Float formatting notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FloatMode {
    /// `d.dddE±e` with a lowercase `e`.
    Scientific,
    /// `d.dddE±e` with an uppercase `E`.
    SciCap,
    /// Plain decimal notation.
    #[default]
    Fixed,
    /// Fixed for moderate magnitudes, scientific otherwise.
    General,
    /// [`FloatMode::General`] with an uppercase exponent marker.
    GenCap,
    /// Value times 100, fixed notation.
    Percentage,
}

/// Float formatting options.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatFormatOptions {
    /// Minimum width of the integer portion / total field.
    pub width: u32,
    /// Fractional digit count; `None` selects the fast 3-digit default
    /// path that also drops trailing zeros.
    pub precision: Option<u32>,
    pub alignment: Alignment,
    pub pad: char,
    pub show_sign: bool,
    pub zero_pad: bool,
    pub mode: FloatMode,
}

impl Default for FloatFormatOptions {
    fn default() -> Self {
        FloatFormatOptions {
            width: 0,
            precision: None,
            alignment: Alignment::default(),
            pad: ' ',
            show_sign: false,
            zero_pad: false,
            mode: FloatMode::default(),
        }
    }
}

impl FloatFormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: FloatMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_pad(mut self, pad: char) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub fn with_show_sign(mut self, show_sign: bool) -> Self {
        self.show_sign = show_sign;
        self
    }

    #[must_use]
    pub fn with_zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }
}

/// Radix selection for integer parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Infer the base from a leading `0b` / `0x` / `0o` prefix; a bare
    /// leading zero falls back to octal, anything else is decimal.
    Adaptive,
    /// Parse in the given base (2-36). [`Radix::DECIMAL`] is the
    /// default.
    Base(u32),
}

impl Radix {
    pub const BINARY: Radix = Radix::Base(2);
    pub const OCTAL: Radix = Radix::Base(8);
    pub const DECIMAL: Radix = Radix::Base(10);
    pub const HEX: Radix = Radix::Base(16);
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

/// Integer parsing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntParseOptions {
    pub radix: Radix,
}

impl IntParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn adaptive() -> Self {
        IntParseOptions {
            radix: Radix::Adaptive,
        }
    }

    #[must_use]
    pub fn with_radix(mut self, radix: Radix) -> Self {
        self.radix = radix;
        self
    }
}

/// Which float notations a parse accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Notation {
    /// Plain decimal only; an exponent marker stops the parse.
    Fixed,
    /// Exponent notation required for the exponent part to apply.
    Scientific,
    /// Both notations.
    #[default]
    General,
}

impl Notation {
    #[must_use]
    pub const fn allows_fixed(self) -> bool {
        matches!(self, Notation::Fixed | Notation::General)
    }

    #[must_use]
    pub const fn allows_scientific(self) -> bool {
        matches!(self, Notation::Scientific | Notation::General)
    }
}

/// Float parsing options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FloatParseOptions {
    pub notation: Notation,
}

impl FloatParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }
}
