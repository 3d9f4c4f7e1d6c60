// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rail::glyphs::GlyphTable;
use understory_rail::mapper::letter_at;
use understory_rail::slider::{AlphabetSlider, SliderConfig};
use understory_rail::types::{GlyphBounds, TouchSample};

const GLYPH: f64 = 18.0;

fn gen_letters(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn gen_table(n: usize) -> GlyphTable {
    (0..n)
        .map(|i| GlyphBounds::new(i, i as f64 * GLYPH, (i + 1) as f64 * GLYPH))
        .collect()
}

// Xorshift jitter in [0, 1), deterministic across runs.
struct Jitter(u64);

impl Jitter {
    fn unit(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

// A jittery drag across the whole rail and a bit past both ends.
fn gen_drag(n: usize, samples: usize) -> Vec<TouchSample> {
    let mut jitter = Jitter(0xCAFE_F00D_DEAD_BEEF);
    let span = n as f64 * GLYPH;
    let mut out = Vec::with_capacity(samples + 2);
    out.push(TouchSample::down(0.0).with_x(400.0));
    for i in 0..samples {
        let t = i as f64 / samples as f64;
        let y = -40.0 + t * (span + 80.0) + (jitter.unit() - 0.5) * 6.0;
        let x = 400.0 - jitter.unit() * 120.0;
        out.push(TouchSample::moved(y).with_x(x));
    }
    out.push(TouchSample::up(span));
    out
}

fn bench_mapper(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapper");
    for &n in &[27usize, 64, 256] {
        let letters = gen_letters(n);
        let table = gen_table(n);
        let span = n as f64 * GLYPH;
        group.throughput(Throughput::Elements(100));
        group.bench_function(format!("letter_at_n{}", n), |b| {
            b.iter(|| {
                for k in 0..100 {
                    let y = span * k as f64 / 100.0;
                    black_box(letter_at(y, &table, black_box(-3.0), &letters));
                }
            })
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider");
    for &n in &[27usize, 64] {
        let letters = gen_letters(n);
        let drag = gen_drag(n, 512);
        group.throughput(Throughput::Elements(drag.len() as u64));
        group.bench_function(format!("drag_with_wave_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut s = AlphabetSlider::with_letters(
                        SliderConfig::default().with_screen_width(420.0),
                        &letters,
                    );
                    for i in 0..n {
                        let top = i as f64 * GLYPH;
                        let _ = s.update_letter_bounds(i, top, top + GLYPH);
                    }
                    s
                },
                |mut s| {
                    let mut events = 0_usize;
                    for &sample in &drag {
                        events += usize::from(s.on_touch(sample).is_some());
                        let wave: f64 = s.displacements().sum();
                        black_box(wave);
                    }
                    black_box(events);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mapper, bench_drag);
criterion_main!(benches);
