//! Float-to-text emission: fixed, scientific, general and percentage
//! renditions over the BCD batch encoders.
//!
//! This is the fast companion of the parser, not a shortest-round-trip
//! printer. Integer portions below `10^19` convert exactly and go out
//! through the batch decimal emitter; fractions come out of
//! multiply-and-truncate steps, so very long renditions drift in the
//! last few places exactly as the underlying double does. The default
//! (`precision: None`) fraction path emits up to three rounded digits
//! and drops trailing zeros; an explicit precision truncates.
//!
//! Layout: the numeral is rendered into a scratch string (sign first,
//! then digits), and a final aligned pass places it inside the padded
//! field. In fixed notation `width` additionally pads the integer
//! portion, which is why the outer pass then has nothing left to do.

use crate::batch::{u64_to_bcd2, u64_to_bcd4};
use crate::float_bits::fast_to_int;
use crate::format_int::push_u64_decimal;
use crate::options::{FloatFormatOptions, FloatMode};
use crate::tables::{exp10i, log10_u64, POWERS_OF_10};
use crate::writer::{write_aligned, StringWriter};

const ASCII_ZEROS_4: u64 = 0x3030_3030;

fn push_sign(w: &mut StringWriter<'_>, f: f64, show_sign: bool) {
    if f < 0.0 {
        w.write_char('-');
    } else if show_sign {
        w.write_char('+');
    }
}

/// Appends the fraction `f` in `[0, 1)` after a decimal point.
///
/// `None` precision renders at most 3 rounded digits and drops trailing
/// zeros (a zero fraction emits nothing, not even the point); explicit
/// precision truncates digit pairs off the running remainder.
fn push_fraction(w: &mut StringWriter<'_>, f: f64, precision: Option<u32>) {
    match precision {
        // precision 0 means no fraction, not a bare point
        Some(0) => {}
        None => {
            let dig3 = fast_to_int(f * 1000.0);
            if dig3 == 0 {
                return;
            }
            let bcd = u64_to_bcd4(dig3);
            let digits = 3usize.saturating_sub((bcd.trailing_zeros() / 8) as usize);
            if digits == 0 {
                return;
            }
            w.write_char('.');
            let ascii = (bcd | ASCII_ZEROS_4).to_be_bytes();
            w.write_ascii(&ascii[5..5 + digits]);
        }
        Some(p) => {
            w.write_char('.');
            let mut rem = p;
            let mut f = f;
            while rem >= 2 {
                let scaled = f * 100.0;
                let pair = scaled.floor();
                f = scaled - pair;
                let b = u64_to_bcd2(pair as u64).to_be_bytes();
                w.write_ascii(&[b[6] | 0x30, b[7] | 0x30]);
                rem -= 2;
            }
            if rem == 1 {
                w.write_char((0x30 | (f * 10.0) as u8) as char);
            }
        }
    }
}

/// Appends a non-negative exponent magnitude, no leading zeros.
fn push_exp_digits(w: &mut StringWriter<'_>, e: u32) {
    if e == 0 {
        w.write_char('0');
        return;
    }
    let bcd = u64_to_bcd4(u64::from(e)).to_be_bytes();
    let lead = bcd[4..].iter().take_while(|&&d| d == 0).count();
    let ascii: Vec<u8> = bcd[4 + lead..].iter().map(|&d| d | 0x30).collect();
    w.write_ascii(&ascii);
}

/// Appends `f >= 0` in scientific notation, `d.dddE±e`. Zero is plain
/// `0`, no exponent.
fn push_scientific(w: &mut StringWriter<'_>, f: f64, precision: Option<u32>, e_char: char) {
    if f == 0.0 {
        w.write_char('0');
        if let Some(p) = precision.filter(|&p| p > 0) {
            w.write_char('.');
            w.write_repeat('0', p as usize);
        }
        return;
    }
    let mut exp = f.log10().floor() as i32;
    let mut mant = f * exp10i(-exp);
    // log10 can land a hair off right at powers of ten
    if mant >= 10.0 {
        mant /= 10.0;
        exp += 1;
    } else if mant < 1.0 {
        mant *= 10.0;
        exp -= 1;
    }
    let lead = mant as u8; // 1..=9
    w.write_char((b'0' + lead) as char);
    push_fraction(w, mant - f64::from(lead), precision);
    w.write_char(e_char);
    w.write_char(if exp < 0 { '-' } else { '+' });
    push_exp_digits(w, exp.unsigned_abs());
}

/// Appends `f >= 0` in fixed notation, the integer portion padded with
/// `fill` to at least `width` characters.
fn push_fixed(w: &mut StringWriter<'_>, f: f64, width: usize, precision: Option<u32>, fill: char) {
    if f < 1.0 {
        w.write_repeat(fill, width.saturating_sub(1));
        w.write_char('0');
        if f == 0.0 {
            if let Some(p) = precision.filter(|&p| p > 0) {
                w.write_char('.');
                w.write_repeat('0', p as usize);
            }
        } else {
            push_fraction(w, f, precision);
        }
        return;
    }

    let int_part = f.trunc();
    if int_part < POWERS_OF_10[19] as f64 {
        // the integer portion is exact in a u64
        let n = int_part as u64;
        let digits = 1 + log10_u64(n) as usize;
        w.write_repeat(fill, width.saturating_sub(digits));
        push_u64_decimal(w, n, digits);
        push_fraction(w, f - int_part, precision);
    } else {
        // only the leading ~17 digits are meaningful; render the head
        // through the exact path and fill the rest with zeros
        let mut digits = f.log10().floor() as i32 + 1;
        if exp10i(digits - 1) > f {
            digits -= 1;
        } else if exp10i(digits) <= f {
            digits += 1;
        }
        let head = (f * exp10i(18 - digits)) as u64;
        let head_digits = 1 + log10_u64(head) as usize;
        let zeros = (digits - 18).max(0) as usize;
        w.write_repeat(fill, width.saturating_sub(head_digits + zeros));
        push_u64_decimal(w, head, head_digits);
        w.write_repeat('0', zeros);
        if let Some(p) = precision.filter(|&p| p > 0) {
            w.write_char('.');
            w.write_repeat('0', p as usize);
        }
    }
}

/// Appends `f` to the writer per `options`. Returns the field width
/// actually written.
///
/// # Examples
///
/// ```rust
/// use numtext::FloatFormatOptions;
///
/// let two = FloatFormatOptions::new().with_precision(2);
/// assert_eq!(numtext::format_float(3.14159, &two), "3.14");
/// ```
pub fn write_float(w: &mut StringWriter<'_>, f: f64, options: &FloatFormatOptions) -> usize {
    let width = options.width as usize;
    let percentage = options.mode == FloatMode::Percentage;
    let mut scratch = String::with_capacity(24);
    {
        let mut sw = StringWriter::new(&mut scratch);
        if f.is_nan() {
            sw.write_str("NaN");
            if percentage {
                sw.write_char('%');
            }
        } else if f.is_infinite() {
            push_sign(&mut sw, f, options.show_sign);
            sw.write_str("Infinity");
            if percentage {
                sw.write_char('%');
            }
        } else {
            push_sign(&mut sw, f, options.show_sign);
            let mag = f.abs();
            let fill = if options.zero_pad { '0' } else { options.pad };
            match options.mode {
                FloatMode::Scientific => push_scientific(&mut sw, mag, options.precision, 'e'),
                FloatMode::SciCap => push_scientific(&mut sw, mag, options.precision, 'E'),
                FloatMode::Fixed => push_fixed(&mut sw, mag, width, options.precision, fill),
                FloatMode::Percentage => {
                    push_fixed(&mut sw, mag * 100.0, width, options.precision, fill);
                    sw.write_char('%');
                }
                FloatMode::General | FloatMode::GenCap => {
                    let e_char = if options.mode == FloatMode::GenCap { 'E' } else { 'e' };
                    let too_big = mag > exp10i(width as i32);
                    let too_small =
                        mag != 0.0 && mag < options.precision.map_or(0.0, |p| exp10i(-(p as i32)));
                    if too_big || too_small {
                        push_scientific(&mut sw, mag, options.precision, e_char);
                    } else {
                        push_fixed(&mut sw, mag, width, options.precision, fill);
                    }
                }
            }
        }
    }
    write_aligned(w, &scratch, width, options.alignment, options.pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Alignment;

    fn fmt(f: f64, options: &FloatFormatOptions) -> String {
        let mut out = String::new();
        let mut w = StringWriter::new(&mut out);
        write_float(&mut w, f, options);
        out
    }

    fn fixed() -> FloatFormatOptions {
        FloatFormatOptions::new().with_mode(FloatMode::Fixed)
    }

    #[test]
    fn fixed_default_precision() {
        assert_eq!(fmt(0.0, &fixed()), "0");
        assert_eq!(fmt(141.0, &fixed()), "141");
        assert_eq!(fmt(141.25, &fixed()), "141.25");
        assert_eq!(fmt(-141.25, &fixed()), "-141.25");
        assert_eq!(fmt(0.5, &fixed()), "0.5");
        // default fraction rounds to 3 digits and trims zeros
        assert_eq!(fmt(1.23456, &fixed()), "1.235");
        assert_eq!(fmt(2.1, &fixed()), "2.1");
    }

    #[test]
    fn fixed_explicit_precision_truncates() {
        let two = fixed().with_precision(2);
        assert_eq!(fmt(3.14159, &two), "3.14");
        assert_eq!(fmt(2.0, &two), "2.00");
        assert_eq!(fmt(0.0, &two), "0.00");
        let three = fixed().with_precision(3);
        assert_eq!(fmt(1.9999, &three), "1.999");
    }

    #[test]
    fn fixed_long_integers_are_exact() {
        assert_eq!(fmt(123456.0, &fixed()), "123456");
        assert_eq!(fmt(1000000.0, &fixed()), "1000000");
        assert_eq!(fmt(987654321.0, &fixed()), "987654321");
        assert_eq!(fmt(9007199254740992.0, &fixed()), "9007199254740992");
    }

    #[test]
    fn fixed_integer_padding() {
        let opts = fixed().with_width(6);
        assert_eq!(fmt(42.5, &opts), "    42.5");
        let zeroed = fixed().with_width(6).with_zero_pad(true);
        assert_eq!(fmt(42.5, &zeroed), "000042.5");
    }

    #[test]
    fn scientific() {
        let sci = FloatFormatOptions::new().with_mode(FloatMode::Scientific);
        assert_eq!(fmt(625.0, &sci), "6.25e+2");
        assert_eq!(fmt(0.001, &sci), "1e-3");
        assert_eq!(fmt(0.0, &sci), "0");
        assert_eq!(fmt(-1500.0, &sci), "-1.5e+3");
        let cap = FloatFormatOptions::new().with_mode(FloatMode::SciCap);
        assert_eq!(fmt(625.0, &cap), "6.25E+2");
        let sci2 = sci.with_precision(2);
        assert_eq!(fmt(625.0, &sci2), "6.25e+2");
        assert_eq!(fmt(1000.0, &sci2), "1.00e+3");
    }

    #[test]
    fn general_switches_notation() {
        let gen = FloatFormatOptions::new().with_mode(FloatMode::General).with_width(4);
        assert_eq!(fmt(625.0, &gen), " 625");
        assert_eq!(fmt(62500.0, &gen), "6.25e+4");
        let gen_p = gen.with_precision(2);
        assert_eq!(fmt(0.0001, &gen_p), "1.00e-4");
        let cap = FloatFormatOptions::new().with_mode(FloatMode::GenCap).with_width(2);
        assert_eq!(fmt(625.0, &cap), "6.25E+2");
    }

    #[test]
    fn percentage() {
        let pct = FloatFormatOptions::new().with_mode(FloatMode::Percentage);
        assert_eq!(fmt(0.25, &pct), "25%");
        assert_eq!(fmt(1.5, &pct), "150%");
        let pct1 = pct.with_precision(1);
        assert_eq!(fmt(0.254, &pct1), "25.4%");
    }

    #[test]
    fn specials() {
        let plain = FloatFormatOptions::new();
        assert_eq!(fmt(f64::NAN, &plain), "NaN");
        assert_eq!(fmt(f64::INFINITY, &plain), "Infinity");
        assert_eq!(fmt(f64::NEG_INFINITY, &plain), "-Infinity");
        let pct = FloatFormatOptions::new().with_mode(FloatMode::Percentage);
        assert_eq!(fmt(f64::NAN, &pct), "NaN%");
        let shown = FloatFormatOptions::new().with_show_sign(true);
        assert_eq!(fmt(f64::INFINITY, &shown), "+Infinity");
    }

    #[test]
    fn alignment_pads_the_whole_field() {
        let sci = FloatFormatOptions::new()
            .with_mode(FloatMode::Scientific)
            .with_width(10)
            .with_alignment(Alignment::Right);
        assert_eq!(fmt(625.0, &sci), "   6.25e+2");
    }
}
