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

//! # Wave Solver
//!
//! The high-level entry point: enumerate every feasible wave of an
//! instance, rank them by units per corridor, and hand back a
//! [`SearchOutcome`] describing the best wave, the full feasible set, the
//! termination reason, and the collected statistics.
//!
//! ## Usage
//!
//! ```rust
//! use wavepick_model::sample;
//! use wavepick_solver::solve::WaveSolver;
//!
//! let (model, band) = sample::reference_instance();
//! let outcome = WaveSolver::new().solve(&model, band);
//!
//! assert!(outcome.is_optimal());
//! let best = outcome.best_wave().unwrap();
//! println!("best objective: {}", best.objective());
//! ```

use crate::{enumerate::WaveEnumerator, rank};
use std::time::Instant;
use wavepick_model::{band::Band, model::Model};
use wavepick_search::{
    monitor::{no_op::NoOperationMonitor, search_monitor::SearchMonitor},
    num::UnitNumeric,
    result::SearchOutcome,
};

/// Exhaustive wave selection solver.
///
/// Stateless; one solver instance can solve any number of instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveSolver<T> {
    _numeric: std::marker::PhantomData<T>,
}

impl<T> WaveSolver<T>
where
    T: UnitNumeric,
{
    /// Creates a new `WaveSolver`.
    #[inline]
    pub fn new() -> Self {
        Self {
            _numeric: std::marker::PhantomData,
        }
    }

    /// Solves the instance without instrumentation.
    #[inline]
    pub fn solve(&self, model: &Model<T>, band: Band<T>) -> SearchOutcome<T> {
        let mut monitor = NoOperationMonitor::new();
        self.solve_with_monitor(model, band, &mut monitor)
    }

    /// Solves the instance, reporting lifecycle events to `monitor`.
    ///
    /// The monitor may cut the enumeration short; the outcome is then
    /// `Aborted` and carries the best wave found up to that point, if any.
    pub fn solve_with_monitor<M>(
        &self,
        model: &Model<T>,
        band: Band<T>,
        monitor: &mut M,
    ) -> SearchOutcome<T>
    where
        M: SearchMonitor<T>,
    {
        let start = Instant::now();
        monitor.on_enter_search(model);

        let mut enumerator = WaveEnumerator::with_monitor(model, band, &mut *monitor);
        let mut waves = Vec::new();
        for wave in enumerator.by_ref() {
            waves.push(wave);
        }
        let mut statistics = enumerator.statistics().clone();
        let aborted = enumerator.aborted_reason().map(str::to_owned);
        drop(enumerator);

        monitor.on_exit_search();
        statistics.set_total_time(start.elapsed());

        match aborted {
            Some(reason) => {
                let best = rank::best_wave(&waves).cloned();
                SearchOutcome::aborted(best, waves, reason, statistics)
            }
            None => match rank::best_wave(&waves) {
                Some(best) => {
                    let best = best.clone();
                    SearchOutcome::optimal(best, waves, statistics)
                }
                None => SearchOutcome::infeasible(statistics),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavepick_core::math::ratio::UnitRate;
    use wavepick_model::{
        index::{CorridorIndex, ItemIndex, OrderIndex},
        model::ModelBuilder,
        sample,
    };
    use wavepick_search::{
        monitor::solution_limit::SolutionLimitMonitor,
        result::{SearchResult, TerminationReason},
    };

    #[test]
    fn test_reference_instance_optimum() {
        let (model, band) = sample::reference_instance();
        let outcome = WaveSolver::new().solve(&model, band);

        assert!(outcome.is_optimal());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );

        let best = outcome.best_wave().unwrap();
        assert_eq!(
            best.objective(),
            UnitRate::new(5i64, 1),
            "orders o1 and o2 out of corridor c4 give 5 units per corridor"
        );
    }

    #[test]
    fn test_reference_instance_explores_the_full_tree() {
        let (model, band) = sample::reference_instance();
        let outcome = WaveSolver::new().solve(&model, band);

        // 10 variables: the complete binary tree has 2^11 - 2 nodes below
        // the root.
        assert_eq!(outcome.statistics().nodes_explored, 2046);
        assert_eq!(outcome.statistics().max_depth, 10);
        assert_eq!(
            outcome.statistics().solutions_found,
            outcome.waves().len() as u64
        );
    }

    #[test]
    fn test_unreachable_band_is_infeasible() {
        let mut builder = ModelBuilder::new(1, 1);
        builder.add_order_demand(OrderIndex::new(0), ItemIndex::new(0), 2);
        builder.add_corridor_supply(CorridorIndex::new(0), ItemIndex::new(0), 2);
        let model = builder.build().unwrap();

        let outcome = WaveSolver::new().solve(&model, Band::new(50, 60));
        assert!(outcome.is_infeasible());
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
        assert!(outcome.waves().is_empty());
    }

    #[test]
    fn test_solution_limit_aborts_with_incumbent() {
        let (model, band) = sample::reference_instance();
        let mut monitor = SolutionLimitMonitor::new(1);
        let outcome = WaveSolver::new().solve_with_monitor(&model, band, &mut monitor);

        assert!(!outcome.is_optimal());
        assert!(outcome.has_solution());
        assert_eq!(outcome.waves().len(), 1);
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => {
                assert!(reason.contains("solution limit"), "unexpected: {reason}")
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
        match outcome.result() {
            SearchResult::Feasible(_) => {}
            other => panic!("expected Feasible, got {:?}", other),
        }
    }

    #[test]
    fn test_solving_twice_yields_identical_waves() {
        let (model, band) = sample::reference_instance();
        let solver = WaveSolver::new();
        let first = solver.solve(&model, band);
        let second = solver.solve(&model, band);

        assert_eq!(first.waves(), second.waves());
        assert_eq!(first.best_wave(), second.best_wave());
    }

    #[test]
    fn test_best_wave_is_in_the_feasible_set() {
        let (model, band) = sample::reference_instance();
        let outcome = WaveSolver::new().solve(&model, band);
        let best = outcome.best_wave().unwrap();

        assert!(outcome.waves().contains(best));
        for wave in outcome.waves() {
            assert!(
                wave.objective() <= best.objective(),
                "no feasible wave may beat the reported optimum"
            );
        }
    }
}
