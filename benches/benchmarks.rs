use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numphrase::{
    latin_power_name, latin_power_name_to_latin_power, FractionMode, NumeralConfig, Numerals,
};

// ---------------------------------------------------------------------------
// Input generation
// ---------------------------------------------------------------------------

/// Build a number string of `n` significant digits: "1234567890123..." with a
/// decimal point after the third digit.
fn make_large_number(n: usize) -> String {
    let mut s = String::with_capacity(n + 1);
    for i in 0..n {
        if i == 3 {
            s.push('.');
        }
        s.push(char::from(b'1' + (i % 9) as u8)); // 1-9 repeating
    }
    s
}

/// Numerals that never promote to exponential form, so long inputs are
/// phrased in full.
fn unbounded() -> Numerals {
    Numerals::new(NumeralConfig::default().with_high_precision_digits(usize::MAX))
}

// ---------------------------------------------------------------------------
// Encoding benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("encode");
    let numerals = unbounded();

    let inputs = [
        ("small", "42".to_string()),
        ("medium", "123456.789".to_string()),
        ("large_100d", make_large_number(100)),
        ("very_large_1000d", make_large_number(1000)),
    ];

    for mode in [FractionMode::Simple, FractionMode::Fancy] {
        let group = format!("{mode:?}").to_lowercase();
        for (name, input) in &inputs {
            g.bench_with_input(BenchmarkId::new(group.as_str(), name), input, |b, s| {
                b.iter(|| numerals.number_to_phrase_with(black_box(s), mode).unwrap());
            });
        }
    }

    g.bench_function("exponential", |b| {
        b.iter(|| numerals.number_to_exponential_phrase(black_box("123456.789")).unwrap());
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Decoding benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut g = c.benchmark_group("decode");
    let numerals = unbounded();

    let inputs = [
        ("small", "42".to_string()),
        ("medium", "123456.789".to_string()),
        ("large_100d", make_large_number(100)),
        ("very_large_1000d", make_large_number(1000)),
    ];

    for (name, input) in &inputs {
        for mode in [FractionMode::Simple, FractionMode::Fancy] {
            let phrase = numerals.number_to_phrase_with(input, mode).unwrap();
            let group = format!("{mode:?}").to_lowercase();
            g.bench_with_input(BenchmarkId::new(group, name), &phrase, |b, p| {
                b.iter(|| numerals.phrase_to_number(black_box(p)).unwrap());
            });
        }
    }

    g.bench_function("literal", |b| {
        b.iter(|| numerals.phrase_to_number(black_box("1.25 billion")).unwrap());
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Latin power benchmarks
// ---------------------------------------------------------------------------

fn bench_latin(c: &mut Criterion) {
    let mut g = c.benchmark_group("latin");

    for power in [1_u64, 123, 1_002_003, u64::MAX] {
        let name = latin_power_name(power);
        g.bench_with_input(BenchmarkId::new("name", power), &power, |b, &p| {
            b.iter(|| latin_power_name(black_box(p)));
        });
        g.bench_with_input(BenchmarkId::new("parse", power), &name, |b, n| {
            b.iter(|| latin_power_name_to_latin_power(black_box(n)).unwrap());
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_encode, bench_decode, bench_latin);
criterion_main!(benches);
