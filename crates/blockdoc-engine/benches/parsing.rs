use blockdoc_engine::parsing::{from_markdown, parse_inline, render_inline, to_markdown};
use blockdoc_engine::wire::{from_wire_json, to_wire_json};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let line = common::generate_inline_line(50);
    group.bench_function("parse_inline", |b| {
        b.iter(|| parse_inline(std::hint::black_box(&line)));
    });

    let runs = parse_inline(&line);
    group.bench_function("render_inline", |b| {
        b.iter(|| render_inline(std::hint::black_box(&runs)));
    });

    group.finish();
}

fn bench_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("from_markdown", |b| {
        b.iter(|| from_markdown(std::hint::black_box(&content)));
    });

    let blocks = from_markdown(&content);
    group.bench_function("to_markdown", |b| {
        b.iter(|| to_markdown(std::hint::black_box(&blocks)));
    });

    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    group.sample_size(10);

    let forest = common::generate_forest(50, 3);
    let json = to_wire_json(&forest).unwrap();

    group.bench_function("to_wire_json", |b| {
        b.iter(|| to_wire_json(std::hint::black_box(&forest)).unwrap());
    });
    group.bench_function("from_wire_json", |b| {
        b.iter(|| from_wire_json(std::hint::black_box(&json)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_inline, bench_markdown, bench_wire);
criterion_main!(benches);
