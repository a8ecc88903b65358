use criterion::{Criterion, criterion_group, criterion_main};
use pagecraft_engine::blocks::SequentialIdGenerator;
use pagecraft_engine::views::DocumentInsights;
use pagecraft_engine::{parse_markup, render_page, serialize_blocks};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let markup = common::generate_page_markup(200);
    group.bench_function("parse_markup", |b| {
        b.iter(|| {
            let mut ids = SequentialIdGenerator::new("bench");
            let blocks = parse_markup(std::hint::black_box(&markup), &mut ids);
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_serialize_and_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.sample_size(10);

    let mut ids = SequentialIdGenerator::new("bench");
    let blocks = parse_markup(&common::generate_page_markup(200), &mut ids);

    group.bench_function("serialize_blocks", |b| {
        b.iter(|| std::hint::black_box(serialize_blocks(std::hint::black_box(&blocks))));
    });
    group.bench_function("render_page", |b| {
        b.iter(|| std::hint::black_box(render_page(std::hint::black_box(&blocks))));
    });
    group.bench_function("insights", |b| {
        b.iter(|| std::hint::black_box(DocumentInsights::compute(std::hint::black_box(&blocks))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize_and_views);
criterion_main!(benches);
