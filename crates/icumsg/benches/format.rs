//! Benchmarks for pattern parsing and formatting.
//!
//! Run with: cargo bench -p icumsg

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use icumsg::{parse, Args, FormatOptions, MessageFormat};
use std::hint::black_box;

const SIMPLE: &str = "Hello, {name}!";
const PLURAL: &str = "You have {n, plural, =0 {no items} one {one item} other {# items}}.";
const NESTED: &str = "{host} {guests, plural, offset:1 =0 {does not give a party} \
                      =1 {invites {guest} to their party} \
                      other {invites {guest} and # other people to their party}}.";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (label, pattern) in [("simple", SIMPLE), ("plural", PLURAL), ("nested", NESTED)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), pattern, |b, pattern| {
            b.iter(|| black_box(parse::parse(pattern)))
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let uncached = MessageFormat::new(FormatOptions::new().locale("en"));
    let cached = MessageFormat::new(FormatOptions::new().locale("en").use_cache(true));
    let args = Args::new().set("n", 42).set("name", "Ada");
    let party = Args::new().set("host", "Ada").set("guests", 4).set("guest", "Max");

    group.bench_function("simple_uncached", |b| {
        b.iter(|| black_box(uncached.format(SIMPLE, &args).unwrap()))
    });
    group.bench_function("plural_uncached", |b| {
        b.iter(|| black_box(uncached.format(PLURAL, &args).unwrap()))
    });
    group.bench_function("plural_cached", |b| {
        b.iter(|| black_box(cached.format(PLURAL, &args).unwrap()))
    });
    group.bench_function("nested_cached", |b| {
        b.iter(|| black_box(cached.format(NESTED, &party).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
