//! Benchmarks for the outline scan on large synthetic pages.
//!
//! Run with: cargo bench -p boxlens-inspector
//! With JSON logs: RUST_LOG=debug cargo bench -p boxlens-inspector --features tracing-json

use boxlens_core::{Mode, Rect, VisualOptions};
use boxlens_harness::MemoryPage;
use boxlens_inspector::Inspector;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// `sections` top-level sections, each holding a nested chain of `depth`
/// divs and a few leaf paragraphs.
fn synthetic_page(sections: usize, depth: usize) -> MemoryPage {
    let mut page = MemoryPage::new();
    let body = page.body();
    for i in 0..sections {
        let y = i as f64 * 120.0;
        let chain = page.add_chain(body, depth, Rect::new(0.0, y, 800.0, 100.0));
        let leaf = *chain.last().unwrap_or(&body);
        for j in 0..4 {
            page.add(leaf, "P", Rect::new(j as f64 * 200.0, y, 180.0, 18.0));
        }
    }
    page
}

fn bench_outline_scan(c: &mut Criterion) {
    #[cfg(feature = "tracing-json")]
    boxlens_core::logging::init_json_logging();

    let mut group = c.benchmark_group("inspector/outline_scan");

    for (sections, depth) in [(10, 4), (100, 8), (500, 12)] {
        let options = VisualOptions::default().with_max_depth(20);
        let page = synthetic_page(sections, depth);

        // Fresh page per batch: every scan appends nodes to the arena.
        group.bench_with_input(
            BenchmarkId::new("enter", format!("{sections}x{depth}")),
            &page,
            |b, page| {
                b.iter_batched(
                    || {
                        let mut inspector = Inspector::new(page.clone());
                        inspector.update_settings(options);
                        inspector
                    },
                    |mut inspector| {
                        inspector.set_mode(Mode::Outline);
                        black_box(inspector.outline_boxes().len())
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_hover_enter(c: &mut Criterion) {
    let mut page = MemoryPage::new();
    let body = page.body();
    let chain = page.add_chain(body, 30, Rect::new(0.0, 0.0, 400.0, 300.0));
    let target = chain[chain.len() - 1];
    let mut inspector = Inspector::new(page);
    inspector.set_mode(Mode::Hover);

    c.bench_function("inspector/hover_enter_depth_31", |b| {
        b.iter(|| black_box(inspector.pointer_enter(&target)))
    });
}

criterion_group!(benches, bench_outline_scan, bench_hover_enter);
criterion_main!(benches);
