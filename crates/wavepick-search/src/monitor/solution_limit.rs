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
use wavepick_model::{model::Model, wave::Wave};

/// A monitor that terminates the search once a given number of feasible
/// waves has been found. The enumeration is single-threaded, so a plain
/// counter suffices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLimitMonitor<T> {
    solutions_found: u64,
    solution_limit: u64,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> SolutionLimitMonitor<T> {
    /// Creates a new `SolutionLimitMonitor` with the given limit.
    #[inline]
    pub fn new(solution_limit: u64) -> Self {
        Self {
            solutions_found: 0,
            solution_limit,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the number of waves seen so far.
    #[inline]
    pub fn solutions_found(&self) -> u64 {
        self.solutions_found
    }
}

impl<T> SearchMonitor<T> for SolutionLimitMonitor<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _model: &Model<T>) {
        self.solutions_found = 0;
    }

    fn on_exit_search(&mut self) {}

    fn on_solution_found(&mut self, _wave: &Wave<T>) {
        self.solutions_found += 1;
    }

    fn on_step(&mut self) {}

    #[inline(always)]
    fn search_command(&self) -> SearchCommand {
        if self.solutions_found >= self.solution_limit {
            return SearchCommand::Terminate("solution limit reached".to_string());
        }
        SearchCommand::Continue
    }
}
