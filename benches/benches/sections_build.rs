// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_sections::filter::{filter_prefix, sort_by_label};
use understory_sections::letters::LetterIndexBuilder;
use understory_sections::locale::RootLocale;
use understory_sections::sections::sections_by_label;

// Xorshift step; the labels only need a stable pseudo-random stream.
fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

// Pseudo app labels: mixed case, some leading digits.
fn gen_labels(count: usize) -> Vec<String> {
    let mut seed = 0xBADC_F00D_1234_5678_u64;
    (0..count)
        .map(|_| {
            let len = 3 + (xorshift(&mut seed) % 10) as usize;
            (0..len)
                .map(|i| {
                    let r = xorshift(&mut seed);
                    match (i, r % 20) {
                        (0, 0) => char::from(b'0' + (r % 10) as u8),
                        (0, k) if k < 10 => char::from(b'A' + (r % 26) as u8),
                        _ => char::from(b'a' + (r % 26) as u8),
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sections");
    for &n in &[200usize, 2000] {
        let labels = gen_labels(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("letter_index_n{}", n), |b| {
            let builder = LetterIndexBuilder::new();
            b.iter(|| black_box(builder.build(&labels)))
        });
        group.bench_function(format!("sort_and_section_n{}", n), |b| {
            b.iter_batched(
                || labels.clone(),
                |mut labels| {
                    sort_by_label(&mut labels, &RootLocale);
                    black_box(sections_by_label(labels, &RootLocale))
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("filter_prefix_n{}", n), |b| {
            b.iter(|| black_box(filter_prefix(labels.iter(), "ma", &RootLocale)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
