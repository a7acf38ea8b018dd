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

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wavepick_model::sample;
use wavepick_solver::{enumerate::WaveEnumerator, solve::WaveSolver};

fn bench_enumerate_reference_instance(c: &mut Criterion) {
    let (model, band) = sample::reference_instance();

    c.bench_function("enumerate/reference", |b| {
        b.iter(|| {
            let count = WaveEnumerator::new(black_box(&model), black_box(band)).count();
            black_box(count)
        })
    });
}

fn bench_solve_reference_instance(c: &mut Criterion) {
    let (model, band) = sample::reference_instance();
    let solver = WaveSolver::new();

    c.bench_function("solve/reference", |b| {
        b.iter(|| {
            let outcome = solver.solve(black_box(&model), black_box(band));
            black_box(outcome)
        })
    });
}

criterion_group!(
    benches,
    bench_enumerate_reference_instance,
    bench_solve_reference_instance
);
criterion_main!(benches);
