//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package minimoe-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minimoe_lex::parse;

fn token_count(source: &str) -> usize {
    parse(source).lines.iter().map(|l| l.tokens.len()).sum()
}

fn bench_lexer_declarations(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_declarations");

    let source = "module m\nphrase foo (x, y)\n    var z = x + y\nend\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("short_phrase", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        module demo

        using other

        tag Red
        tag Green
        tag Blue

        type Point
            x, y
        end

        phrase distance between (a) and (b)
            var dx = a.x - b.x
            var dy = a.y - b.y
            result dx * dx + dy * dy
        end
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("module_with_declarations", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("var s = \"hello\"\n")))
    });

    group.bench_function("long_string_with_escapes", |b| {
        let source = "var s = \"This is a longer string with an escaped \\\"quote\\\" inside it.\"\n";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| token_count(black_box("var x = 123456\n"))));

    group.bench_function("float", |b| b.iter(|| token_count(black_box("var x = 3.14159\n"))));

    group.bench_function("invalid_float", |b| {
        b.iter(|| token_count(black_box("var x = 3.\n")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| token_count(black_box("var x = 42\n"))));

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("var very_long_variable_name = 42\n")))
    });

    group.bench_function("many_declarations", |b| {
        b.iter(|| {
            token_count(black_box(
                "var a = 1\nvar b = 2\nvar c = 3\nvar d = 4\nvar e = 5\n",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_declarations,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
