use criterion::{Criterion, criterion_group, criterion_main};
use crossdocs_engine::parsing::{parse_tree, parser_options, tokenize};
use crossdocs_engine::{RenderOptions, render_document, render_tree};
use pulldown_cmark::Parser;
mod common;

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });
    group.bench_function("block_tree", |b| {
        b.iter(|| std::hint::black_box(parse_tree(&content, parser_options(true))));
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let options = RenderOptions::default();
    group.bench_function("render_document", |b| {
        b.iter(|| std::hint::black_box(render_document(&content, &options)));
    });

    let tree = parse_tree(&content, parser_options(options.footnotes));
    group.bench_function("render_tree", |b| {
        b.iter(|| std::hint::black_box(render_tree(&content, &tree, &options)));
    });

    group.finish();
}

fn bench_tokenizer(c: &mut Criterion) {
    let text = common::generate_inline_heavy(2_000);
    c.bench_function("tokenize_inline_heavy", |b| {
        b.iter(|| std::hint::black_box(tokenize(&text)));
    });
}

criterion_group!(benches, bench_pulldown_cmark_baseline, bench_rendering, bench_tokenizer);
criterion_main!(benches);
