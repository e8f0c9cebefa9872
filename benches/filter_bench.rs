use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use keysheet::config::KeybindRow;
use keysheet::core::filter_rows;

// Helper to generate a keybinding table of the given size
fn make_rows(count: usize) -> Vec<KeybindRow> {
    let modes = ["normal", "insert", "visual"];
    (0..count)
        .map(|i| {
            KeybindRow::new(
                modes[i % modes.len()],
                &format!("<leader>x{}", i),
                &format!("perform action {} on the current buffer", i),
            )
        })
        .collect()
}

fn bench_filter_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_rows_sizes");

    for size in [50, 500, 5000] {
        let rows = make_rows(size);

        group.bench_with_input(BenchmarkId::new("match_third", size), &rows, |b, rows| {
            b.iter(|| filter_rows(black_box(rows), black_box("normal")));
        });

        group.bench_with_input(BenchmarkId::new("match_none", size), &rows, |b, rows| {
            b.iter(|| filter_rows(black_box(rows), black_box("no-such-binding")));
        });
    }

    group.finish();
}

fn bench_filter_query_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_rows_queries");
    let rows = make_rows(1000);

    group.bench_function("empty_query", |b| {
        b.iter(|| filter_rows(black_box(&rows), black_box("")));
    });

    group.bench_function("mixed_case_query", |b| {
        b.iter(|| filter_rows(black_box(&rows), black_box("LEADER")));
    });

    group.bench_function("long_query", |b| {
        b.iter(|| filter_rows(black_box(&rows), black_box("perform action 999 on the current")));
    });

    group.finish();
}

criterion_group!(benches, bench_filter_sizes, bench_filter_query_shapes);
criterion_main!(benches);
