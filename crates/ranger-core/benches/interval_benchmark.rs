// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ranger_core::math::interval::Interval;
use std::fmt::Write;
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

/// Generates `n` valid intervals of mixed shapes from a fixed seed.
fn generate_intervals(n: usize, seed: u64) -> Vec<Interval<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let start = rng.random_range(0.0..1_000.0);
            let end = start + rng.random_range(0.0..25.0);
            match rng.random_range(0..4) {
                0 => Interval::closed(start, end),
                1 => Interval::open(start, end),
                2 => Interval::closed_open(start, end),
                _ => Interval::open_closed(start, end),
            }
        })
        .collect()
}

fn bench_is_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_connected");
    for &n in SIZES.iter() {
        let intervals = generate_intervals(n, 0xDEADBEEF);
        let probe = Interval::closed(500.0, 510.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, ivs| {
            b.iter(|| {
                ivs.iter()
                    .filter(|iv| black_box(probe).is_connected(*iv))
                    .count()
            })
        });
    }
    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");
    for &n in SIZES.iter() {
        let intervals = generate_intervals(n, 123456);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &intervals, |b, ivs| {
            let mut buf = String::with_capacity(n * 32);
            b.iter(|| {
                buf.clear();
                for iv in ivs {
                    let _ = write!(buf, "{}", black_box(iv));
                }
                buf.len()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_is_connected, bench_display);
criterion_main!(benches);
