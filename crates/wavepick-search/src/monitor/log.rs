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

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use num_traits::{PrimInt, Signed};
use std::time::Instant;
use wavepick_model::{model::Model, wave::Wave};

/// Console logger for wave enumeration progress.
///
/// Prints a table header when the search starts and one line for every
/// feasible wave found, with elapsed time, the running wave count, and the
/// wave's totals and objective.
#[derive(Debug, Clone)]
pub struct LogMonitor<T> {
    start_time: Instant,
    waves_found: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> LogMonitor<T> {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            waves_found: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<7} | {:<12} | {:<10} | {:<9}",
            "Elapsed", "Wave", "Total Units", "Corridors", "Objective"
        );
        println!("{}", "-".repeat(58));
    }
}

impl<T> Default for LogMonitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for LogMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(waves_found: {})", self.waves_found)
    }
}

impl<T> SearchMonitor<T> for LogMonitor<T>
where
    T: PrimInt + Signed + Into<i64> + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model<T>) {
        self.start_time = Instant::now();
        self.waves_found = 0;
        self.print_header();
    }

    fn on_exit_search(&mut self) {
        let elapsed = self.start_time.elapsed().as_secs_f32();
        println!(
            "Search finished after {:.1}s with {} feasible wave(s).",
            elapsed, self.waves_found
        );
    }

    fn on_solution_found(&mut self, wave: &Wave<T>) {
        self.waves_found += 1;
        let elapsed_field = format!("{:.1}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<7} | {:<12} | {:<10} | {:<9}",
            elapsed_field,
            self.waves_found,
            wave.total_units(),
            wave.corridor_count(),
            wave.objective()
        );
    }

    fn on_step(&mut self) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        SearchCommand::Continue
    }
}
