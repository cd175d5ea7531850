//! Scan vs pattern: what each strategy costs as text grows
//!
//! The scan strategy pays one classifier lookup per code point; the pattern
//! strategy pays for the regex engine. Mark-heavy text stresses both.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcount_core::{GraphemeCounter, MarkTable, Strategy};

fn sample(len: usize, marks_every: usize) -> String {
    (0..len)
        .map(|i| {
            if marks_every > 0 && i % marks_every == marks_every - 1 {
                '\u{301}'
            } else {
                (b'a' + (i % 26) as u8) as char
            }
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let builtin = GraphemeCounter::builtin();
    let mut group = c.benchmark_group("builtin");

    for (label, marks_every) in [("ascii", 0), ("accented", 2)] {
        for len in [16usize, 1_024, 65_536] {
            let text = sample(len, marks_every);
            group.throughput(Throughput::Bytes(text.len() as u64));
            for strategy in Strategy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(format!("{label}/{strategy}"), len),
                    &text,
                    |b, text| b.iter(|| builtin.count_with(black_box(text), strategy)),
                );
            }
        }
    }
    group.finish();
}

fn bench_pinned_table(c: &mut Criterion) {
    let Ok(table) = MarkTable::new("combining-diacriticals", [(0x300, 0x36F)]) else {
        return;
    };
    let Ok(counter) = GraphemeCounter::from_table(table) else {
        return;
    };
    let text = sample(4_096, 3);

    let mut group = c.benchmark_group("pinned_table");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| counter.count_with(black_box(&text), strategy))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_pinned_table);
criterion_main!(benches);
