use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numtext::{
    format_float, format_int, parse_float, parse_int, FloatFormatOptions, FloatParseOptions,
    IntBase, IntFormatOptions, IntParseOptions,
};

fn benchmark_parse_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int");
    for text in ["7", "123456", "18446744073709551615"] {
        group.bench_with_input(BenchmarkId::new("decimal", text.len()), &text, |b, &text| {
            b.iter(|| parse_int::<u64>(black_box(text), IntParseOptions::new()));
        });
    }
    let adaptive = IntParseOptions::adaptive();
    group.bench_function("adaptive_hex", |b| {
        b.iter(|| parse_int::<u64>(black_box("0xdeadbeefcafe"), adaptive));
    });
    group.bench_function("std_u64_baseline", |b| {
        b.iter(|| black_box("18446744073709551615").parse::<u64>());
    });
    group.finish();
}

fn benchmark_format_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_int");
    let decimal = IntFormatOptions::new();
    let hex = IntFormatOptions::new().with_base(IntBase::Hex);
    let values = [7u64, 123_456, u64::MAX];
    group.bench_function("decimal", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format_int(black_box(v), &decimal));
            }
        });
    });
    group.bench_function("hex", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(format_int(black_box(v), &hex));
            }
        });
    });
    group.bench_function("std_baseline", |b| {
        b.iter(|| {
            for &v in &values {
                black_box(v.to_string());
            }
        });
    });
    group.finish();
}

fn benchmark_floats(c: &mut Criterion) {
    let mut group = c.benchmark_group("float");
    group.bench_function("parse_fixed", |b| {
        b.iter(|| parse_float::<f64>(black_box("3.141592653589793"), FloatParseOptions::new()));
    });
    group.bench_function("parse_scientific", |b| {
        b.iter(|| parse_float::<f64>(black_box("6.0221408e23"), FloatParseOptions::new()));
    });
    let two = FloatFormatOptions::new().with_precision(2);
    group.bench_function("format_fixed", |b| {
        b.iter(|| black_box(format_float(black_box(1234.5678), &two)));
    });
    group.finish();
}

criterion_group!(benches, benchmark_parse_int, benchmark_format_int, benchmark_floats);
criterion_main!(benches);
