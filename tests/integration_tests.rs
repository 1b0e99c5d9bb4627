use numtext::{
    float_from_str, format_float, format_float_spec, format_int, format_int_spec, int_from_str,
    parse_float, parse_int, Alignment, Error, FloatFormatOptions, FloatMode, FloatParseOptions,
    IntBase, IntFormatOptions, IntParseOptions, Notation, Radix, StringWriter,
};

#[test]
fn test_parse_u32_consumes_prefix() {
    assert_eq!(parse_int::<u32>("123", IntParseOptions::new()), Some((123, 3)));
    assert_eq!(parse_int::<u32>("123, 456", IntParseOptions::new()), Some((123, 3)));
}

#[test]
fn test_parse_i32_negative() {
    assert_eq!(parse_int::<i32>("-42", IntParseOptions::new()), Some((-42, 3)));
}

#[test]
fn test_format_hex_zero_padded() {
    let options = IntFormatOptions::new()
        .with_base(IntBase::Hex)
        .with_num_len(4)
        .with_zero_pad(true);
    assert_eq!(format_int(255u32, &options), "00ff");
}

#[test]
fn test_format_float_fixed_precision() {
    let options = FloatFormatOptions::new()
        .with_mode(FloatMode::Fixed)
        .with_precision(2);
    assert_eq!(format_float(3.14159, &options), "3.14");
}

#[test]
fn test_parse_float_scientific() {
    let (v, consumed) = parse_float::<f64>("6.25e2", FloatParseOptions::new()).unwrap();
    assert_eq!(consumed, 6);
    assert!((v - 625.0).abs() < 1e-9, "got {v}");
}

#[test]
fn test_format_zero_with_width() {
    let options = IntFormatOptions::new().with_num_len(5).with_zero_pad(true);
    assert_eq!(format_int(0u32, &options), "00000");
}

#[test]
fn test_overflow_is_rejected_outright() {
    // 2^64
    assert_eq!(parse_int::<u64>("18446744073709551616", IntParseOptions::new()), None);
    assert_eq!(parse_int::<u64>("18446744073709551615", IntParseOptions::new()), Some((u64::MAX, 20)));
    assert_eq!(parse_int::<u32>("4294967296", IntParseOptions::new()), None);
    assert_eq!(parse_int::<u32>("4294967295", IntParseOptions::new()), Some((u32::MAX, 10)));
}

#[test]
fn test_adaptive_radix_prefixes() {
    let adaptive = IntParseOptions::adaptive();
    assert_eq!(parse_int::<u32>("0x1F", adaptive), Some((31, 4)));
    assert_eq!(parse_int::<u32>("0b1010", adaptive), Some((10, 6)));
    assert_eq!(parse_int::<u32>("0o17", adaptive), Some((15, 4)));
    // bare leading zero falls back to octal
    assert_eq!(parse_int::<u32>("017", adaptive), Some((15, 3)));
    assert_eq!(parse_int::<u32>("17", adaptive), Some((17, 2)));
    // a prefix without digits is not a numeral
    assert_eq!(parse_int::<u32>("0x", adaptive), None);
}

#[test]
fn test_prefixed_format_roundtrips_through_adaptive_parse() {
    let adaptive = IntParseOptions::adaptive();
    for base in [IntBase::Binary, IntBase::Octal, IntBase::Hex, IntBase::CapHex] {
        let options = IntFormatOptions::new().with_base(base).with_show_prefix(true);
        for value in [0u64, 1, 255, 4096, 123_456_789, u64::MAX] {
            let text = format_int(value, &options);
            // the capital-hex prefix 0X is formatter-only; parse it as 0x
            let text = text.replace("0X", "0x").to_lowercase();
            let parsed = parse_int::<u64>(&text, adaptive);
            assert_eq!(parsed, Some((value, text.len())), "{base:?} {text}");
        }
    }
}

#[test]
fn test_from_str_trailing_detection() {
    assert_eq!(int_from_str::<u32>("123"), Ok(123));
    let err = int_from_str::<u32>("123kg").unwrap_err();
    assert!(matches!(err, Error::TrailingCharacters { consumed: 3, .. }));
    assert!(matches!(int_from_str::<i16>("99999"), Err(Error::InvalidNumber { .. })));

    assert!((float_from_str::<f64>("1.5").unwrap() - 1.5).abs() < 1e-12);
    assert!(float_from_str::<f64>("1.5.2").is_err());
}

#[test]
fn test_notation_restrictions() {
    let fixed_only = FloatParseOptions::new().with_notation(Notation::Fixed);
    let (v, consumed) = parse_float::<f64>("6.25e2", fixed_only).unwrap();
    assert!((v - 6.25).abs() < 1e-12);
    assert_eq!(consumed, 4);

    let sci_only = FloatParseOptions::new().with_notation(Notation::Scientific);
    assert_eq!(parse_float::<f64>("6.25", sci_only), None);
}

#[test]
fn test_float_specials_roundtrip() {
    let plain = FloatFormatOptions::new();
    assert_eq!(format_float(f64::INFINITY, &plain), "Infinity");
    assert_eq!(format_float(f64::NEG_INFINITY, &plain), "-Infinity");
    assert_eq!(format_float(f64::NAN, &plain), "NaN");

    let general = FloatParseOptions::new();
    assert_eq!(parse_float::<f64>("Infinity", general), Some((f64::INFINITY, 8)));
    assert_eq!(parse_float::<f64>("-Infinity", general), Some((f64::NEG_INFINITY, 9)));
    let (v, n) = parse_float::<f64>("NaN", general).unwrap();
    assert!(v.is_nan());
    assert_eq!(n, 3);
}

#[test]
fn test_spec_strings_end_to_end() {
    assert_eq!(format_int_spec(255u32, "04x").unwrap(), "00ff");
    assert_eq!(format_int_spec(255u32, "#x").unwrap(), "0xff");
    assert_eq!(format_int_spec(255u32, "*>6d").unwrap(), "***255");
    assert_eq!(format_int_spec(0u32, "05d").unwrap(), "00000");
    assert_eq!(format_int_spec(-7i32, "+d").unwrap(), "-7");
    assert_eq!(format_int_spec(7i32, "+d").unwrap(), "+7");

    assert_eq!(format_float_spec(3.14159, ".2f").unwrap(), "3.14");
    assert_eq!(format_float_spec(625.0, ".2E").unwrap(), "6.25E+2");
    assert_eq!(format_float_spec(625.0, ">10e").unwrap(), "   6.25e+2");

    assert!(format_int_spec(1u32, "0+d").is_err());
    assert!(format_float_spec(1.0, "#f").is_err());
}

#[test]
fn test_writer_accumulates_fields() {
    let mut line = String::new();
    let mut w = StringWriter::new(&mut line);
    let options = IntFormatOptions::new()
        .with_width(6)
        .with_alignment(Alignment::Right);
    numtext::write_int(&mut w, 42u32, &options);
    w.write_str(" | ");
    numtext::write_float(&mut w, 2.5, &FloatFormatOptions::new().with_precision(1));
    assert_eq!(line, "    42 | 2.5");
}

#[test]
fn test_fixed_base_parsing() {
    let hex = IntParseOptions::new().with_radix(Radix::HEX);
    assert_eq!(parse_int::<u32>("deadbeef", hex), Some((0xDEAD_BEEF, 8)));
    let bin = IntParseOptions::new().with_radix(Radix::BINARY);
    assert_eq!(parse_int::<u8>("11110000", bin), Some((0xF0, 8)));
    let b36 = IntParseOptions::new().with_radix(Radix::Base(36));
    assert_eq!(parse_int::<u32>("zz", b36), Some((35 * 36 + 35, 2)));
}

#[test]
fn test_percentage_mode() {
    let pct = FloatFormatOptions::new().with_mode(FloatMode::Percentage);
    assert_eq!(format_float(0.25, &pct), "25%");
    assert_eq!(format_float(-0.5, &pct), "-50%");
}

#[test]
fn test_continuation_parsing() {
    // prefix parsing composes into a larger grammar
    let text = "12x34";
    let (w, n) = parse_int::<u32>(text, IntParseOptions::new()).unwrap();
    assert_eq!((w, n), (12, 2));
    assert_eq!(&text[n..n + 1], "x");
    let (h, m) = parse_int::<u32>(&text[n + 1..], IntParseOptions::new()).unwrap();
    assert_eq!((h, m), (34, 2));
}
