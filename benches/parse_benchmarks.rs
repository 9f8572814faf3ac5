mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_exec_parser::parse;
use graphql_exec_parser::tokenize;

// ─── Group 1: Document Parsing ───────────────────────────

fn document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(parse(fixtures::SIMPLE_QUERY)))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(parse(fixtures::COMPLEX_QUERY)))
    });

    let nested_10 = fixtures::operations::deeply_nested_query(10);
    group.bench_function("nested_depth_10", |b| {
        b.iter(|| black_box(parse(&nested_10)))
    });

    let nested_30 = fixtures::operations::deeply_nested_query(30);
    group.bench_function("nested_depth_30", |b| {
        b.iter(|| black_box(parse(&nested_30)))
    });

    for count in [10, 50, 200] {
        let many_ops = fixtures::operations::many_operations(count);
        group.throughput(Throughput::Bytes(many_ops.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("many_operations", count),
            &many_ops,
            |b, source| b.iter(|| black_box(parse(source))),
        );
    }

    group.finish();
}

// ─── Group 2: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(fixtures::COMPLEX_QUERY.len() as u64));
    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(tokenize(fixtures::COMPLEX_QUERY)))
    });

    let many_ops = fixtures::operations::many_operations(200);
    group.throughput(Throughput::Bytes(many_ops.len() as u64));
    group.bench_function("many_operations_200", |b| {
        b.iter(|| black_box(tokenize(&many_ops)))
    });

    group.finish();
}

criterion_group!(benches, document_parse, lexer);
criterion_main!(benches);
