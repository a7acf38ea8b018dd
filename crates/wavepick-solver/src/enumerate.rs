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

//! # Wave Enumeration
//!
//! Exhaustive, lazy enumeration of all feasible waves of an instance.
//!
//! The enumeration walks the binary assignment tree with an explicit
//! decision stack instead of recursion, assigning variables in the stable
//! order `o0 .. o(n-1), c0 .. c(m-1)` and trying `false` before `true` at
//! every level. Complete assignments are checked against the global
//! feasibility predicates; each one that passes is yielded as a [`Wave`].
//!
//! ## Highlights
//!
//! - Implements `Iterator`, so waves stream out as they are found. Dropping
//!   the iterator early abandons the remaining tree without further work.
//! - The visit order is fully deterministic; two runs on the same instance
//!   yield the same waves in the same sequence.
//! - A [`SearchMonitor`] observes every node and may terminate the
//!   enumeration; the reason is then available via `aborted_reason()`.
//! - No pruning. The tree has exactly `2^(n + m)` leaves and every leaf is
//!   evaluated, which keeps the enumeration a reliable ground truth to test
//!   smarter searches against.

use crate::{
    feasibility::check_global_constraints,
    variables::VariableSpace,
};
use fixedbitset::FixedBitSet;
use num_traits::{PrimInt, Signed};
use wavepick_model::{band::Band, model::Model, wave::Wave};
use wavepick_search::{
    monitor::{
        no_op::NoOperationMonitor,
        search_monitor::{SearchCommand, SearchMonitor},
    },
    stats::SearchStatistics,
};

/// One pending assignment in the decision stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    position: usize,
    value: bool,
}

/// Lazy iterator over all feasible waves of an instance.
///
/// See the module documentation for the enumeration order and the
/// termination protocol.
#[derive(Debug)]
pub struct WaveEnumerator<'a, T, M = NoOperationMonitor<T>>
where
    T: PrimInt + Signed,
{
    model: &'a Model<T>,
    band: Band<T>,
    space: VariableSpace,
    stack: Vec<Decision>,
    assignment: Vec<bool>,
    prev_position: Option<usize>,
    monitor: M,
    statistics: SearchStatistics,
    aborted: Option<String>,
}

impl<'a, T> WaveEnumerator<'a, T>
where
    T: PrimInt + Signed + Into<i64>,
{
    /// Creates an enumerator without instrumentation.
    #[inline]
    pub fn new(model: &'a Model<T>, band: Band<T>) -> Self {
        Self::with_monitor(model, band, NoOperationMonitor::new())
    }
}

impl<'a, T, M> WaveEnumerator<'a, T, M>
where
    T: PrimInt + Signed + Into<i64>,
    M: SearchMonitor<T>,
{
    /// Creates an enumerator that reports lifecycle events to `monitor`.
    ///
    /// The monitor's `on_enter_search` and `on_exit_search` hooks are not
    /// called here; drivers that own the whole search lifecycle (such as
    /// [`crate::solve::WaveSolver`]) invoke them around the enumeration.
    pub fn with_monitor(model: &'a Model<T>, band: Band<T>, monitor: M) -> Self {
        let space = VariableSpace::new(model);
        let mut stack = Vec::with_capacity(space.len() + 1);
        if !space.is_empty() {
            // True is pushed first so false pops first: at every level the
            // value 0 branch is explored before the value 1 branch.
            stack.push(Decision {
                position: 0,
                value: true,
            });
            stack.push(Decision {
                position: 0,
                value: false,
            });
        }
        // An instance without variables has a single complete assignment,
        // the empty one, which opens no corridor and is never feasible.

        Self {
            model,
            band,
            space,
            stack,
            assignment: vec![false; space.len()],
            prev_position: None,
            monitor,
            statistics: SearchStatistics::new(),
            aborted: None,
        }
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the monitor's termination reason, if the enumeration was cut
    /// short.
    #[inline]
    pub fn aborted_reason(&self) -> Option<&str> {
        self.aborted.as_deref()
    }

    /// Consumes the enumerator and returns its monitor.
    #[inline]
    pub fn into_monitor(self) -> M {
        self.monitor
    }

    /// Builds the wave for the current complete assignment.
    fn build_wave(&self, total_units: T, corridor_count: usize) -> Wave<T> {
        let num_orders = self.space.num_orders();
        let num_corridors = self.space.num_corridors();

        let mut orders = FixedBitSet::with_capacity(num_orders);
        for (order, &selected) in self.assignment[..num_orders].iter().enumerate() {
            if selected {
                orders.insert(order);
            }
        }
        let mut corridors = FixedBitSet::with_capacity(num_corridors);
        for (corridor, &opened) in self.assignment[num_orders..].iter().enumerate() {
            if opened {
                corridors.insert(corridor);
            }
        }

        Wave::new(orders, corridors, total_units, corridor_count)
    }
}

impl<T, M> Iterator for WaveEnumerator<'_, T, M>
where
    T: PrimInt + Signed + Into<i64>,
    M: SearchMonitor<T>,
{
    type Item = Wave<T>;

    fn next(&mut self) -> Option<Wave<T>> {
        if self.aborted.is_some() {
            return None;
        }

        while let Some(decision) = self.stack.pop() {
            if let SearchCommand::Terminate(reason) = self.monitor.search_command() {
                self.stack.clear();
                self.aborted = Some(reason);
                return None;
            }
            self.monitor.on_step();
            self.statistics.on_node_explored();

            // Popping a decision at or below the previous position means the
            // search undid decisions to get here.
            if let Some(prev) = self.prev_position {
                if decision.position <= prev {
                    self.statistics.on_backtrack();
                }
            }
            self.prev_position = Some(decision.position);

            // Positions are always assigned in order along the current
            // path, so overwriting the slot reflects the path exactly.
            self.assignment[decision.position] = decision.value;
            let depth = decision.position + 1;
            self.statistics.on_depth_update(depth as u64);

            if depth < self.space.len() {
                self.stack.push(Decision {
                    position: depth,
                    value: true,
                });
                self.stack.push(Decision {
                    position: depth,
                    value: false,
                });
                continue;
            }

            // Complete assignment, run the global checks.
            let num_orders = self.space.num_orders();
            let check = check_global_constraints(
                self.model,
                &self.band,
                &self.assignment[..num_orders],
                &self.assignment[num_orders..],
            );
            if check.feasible {
                let wave = self.build_wave(check.total_units, check.corridor_count);
                self.statistics.on_solution_found();
                self.monitor.on_solution_found(&wave);
                return Some(wave);
            }
        }

        None
    }
}
