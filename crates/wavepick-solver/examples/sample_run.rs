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

//! Solves the built-in reference instance, prints the best wave, and then
//! sweeps a few alternative unit bands to show how the optimum reacts.

use wavepick_model::{band::Band, sample};
use wavepick_search::monitor::log::LogMonitor;
use wavepick_solver::solve::WaveSolver;

fn main() {
    let (model, band) = sample::reference_instance();
    let solver = WaveSolver::new();

    println!(
        "Reference instance: {} orders, {} corridors, search space {}",
        model.num_orders(),
        model.num_corridors(),
        model.search_space()
    );
    println!("Unit band: {}\n", band);

    let mut monitor = LogMonitor::new();
    let outcome = solver.solve_with_monitor(&model, band, &mut monitor);

    println!();
    println!("{}", outcome);
    if let Some(best) = outcome.best_wave() {
        println!();
        println!("{}", best);
    }

    // How sensitive is the optimum to the band?
    println!("\nBand sensitivity sweep:");
    for (lower, upper) in [(5i64, 12i64), (6, 15), (4, 10)] {
        let sweep_band = Band::new(lower, upper);
        let sweep = solver.solve(&model, sweep_band);
        match sweep.best_wave() {
            Some(wave) => println!(
                "  band {}: {} feasible wave(s), best objective {}",
                sweep_band,
                sweep.waves().len(),
                wave.objective()
            ),
            None => println!("  band {}: infeasible", sweep_band),
        }
    }
}
