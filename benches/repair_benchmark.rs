//! Benchmarks for the notation repair pipeline.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mathpdf::parse::Segmenter;
use mathpdf::{RepairPipeline, SymbolTable};

/// Builds a synthetic corrupted document with the given number of problems.
fn corrupted_document(problem_count: usize) -> String {
    let mut text = String::new();
    for i in 0..problem_count {
        text.push_str(&format!(
            "{}. Let x ³ 0 and evaluate frac{{1}}{{2}} cid:32 π x. \
             GO ON TO THE NEXT PAGE\n(A) 0 (B) 1 (C) π (D) \\infty\n",
            i + 1
        ));
    }
    text
}

fn bench_repair_pipeline(c: &mut Criterion) {
    let pipeline = RepairPipeline::new(SymbolTable::default());
    let body = "Let x ³ 0 and evaluate frac{1}{2} cid:32 π x. (A) 0 (B) 1 (C) π";

    c.bench_function("repair_single_problem", |b| {
        b.iter(|| pipeline.process(black_box(body)));
    });

    c.bench_function("repair_clean_text", |b| {
        b.iter(|| pipeline.process(black_box("What is 2+2?\n\nChoices:\n(A) 3\n(B) 4")));
    });
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for problem_count in [10, 100, 500].iter() {
        let text = corrupted_document(*problem_count);
        let segmenter = Segmenter::new();

        group.bench_function(format!("{}_problems", problem_count), |b| {
            b.iter(|| segmenter.segment(black_box(&text), 1));
        });
    }

    group.finish();
}

fn bench_pipeline_construction(c: &mut Criterion) {
    c.bench_function("pipeline_construction", |b| {
        b.iter(|| RepairPipeline::new(black_box(SymbolTable::default())));
    });
}

criterion_group!(
    benches,
    bench_repair_pipeline,
    bench_segmentation,
    bench_pipeline_construction,
);
criterion_main!(benches);
