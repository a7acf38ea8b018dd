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

//! # Search Results
//!
//! Types describing the outcome of a finished wave search: what was found,
//! why the search stopped, every feasible wave it visited, and the counters
//! it collected along the way.

use crate::stats::SearchStatistics;
use num_traits::{PrimInt, Signed};
use wavepick_model::wave::Wave;

/// The qualitative result of a wave search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<T>
where
    T: PrimInt + Signed,
{
    /// No feasible wave exists.
    Infeasible,
    /// The search ran to completion; the contained wave maximizes
    /// units per corridor over all feasible waves.
    Optimal(Wave<T>),
    /// The search was cut short; the contained wave is the best one
    /// found so far but optimality is unproven.
    Feasible(Wave<T>),
}

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The full assignment tree was enumerated and a best wave exists.
    OptimalityProven,
    /// The full assignment tree was enumerated and no wave is feasible.
    InfeasibilityProven,
    /// A monitor requested termination before the tree was exhausted.
    /// The string carries the monitor's reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::InfeasibilityProven => write!(f, "Infeasibility Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a finished search hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T>
where
    T: PrimInt + Signed,
{
    result: SearchResult<T>,
    termination_reason: TerminationReason,
    waves: Vec<Wave<T>>,
    statistics: SearchStatistics,
}

impl<T> SearchOutcome<T>
where
    T: PrimInt + Signed,
{
    /// Creates an outcome for a completed search that found a best wave.
    #[inline]
    pub fn optimal(best: Wave<T>, waves: Vec<Wave<T>>, statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Optimal(best),
            termination_reason: TerminationReason::OptimalityProven,
            waves,
            statistics,
        }
    }

    /// Creates an outcome for a completed search that found no feasible wave.
    #[inline]
    pub fn infeasible(statistics: SearchStatistics) -> Self {
        Self {
            result: SearchResult::Infeasible,
            termination_reason: TerminationReason::InfeasibilityProven,
            waves: Vec::new(),
            statistics,
        }
    }

    /// Creates an outcome for a search that a monitor cut short.
    ///
    /// `best` is the best wave among those enumerated before the abort, or
    /// `None` if none were found in time.
    #[inline]
    pub fn aborted(
        best: Option<Wave<T>>,
        waves: Vec<Wave<T>>,
        reason: String,
        statistics: SearchStatistics,
    ) -> Self {
        let result = match best {
            Some(wave) => SearchResult::Feasible(wave),
            None => SearchResult::Infeasible,
        };
        Self {
            result,
            termination_reason: TerminationReason::Aborted(reason),
            waves,
            statistics,
        }
    }

    /// Returns the qualitative result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Returns the reason the search stopped.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns every feasible wave the search visited, in enumeration order.
    #[inline]
    pub fn waves(&self) -> &[Wave<T>] {
        &self.waves
    }

    /// Returns the statistics collected during the search.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the best wave, if any feasible wave was found.
    #[inline]
    pub fn best_wave(&self) -> Option<&Wave<T>> {
        match &self.result {
            SearchResult::Optimal(wave) | SearchResult::Feasible(wave) => Some(wave),
            SearchResult::Infeasible => None,
        }
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SearchResult::Optimal(_))
    }

    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.result, SearchResult::Infeasible)
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(
            self.result,
            SearchResult::Optimal(_) | SearchResult::Feasible(_)
        )
    }
}

impl<T> std::fmt::Display for SearchOutcome<T>
where
    T: PrimInt + Signed + Into<i64> + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Outcome")?;
        writeln!(f, "  Termination: {}", self.termination_reason)?;
        writeln!(f, "  Feasible Waves: {}", self.waves.len())?;
        match self.best_wave() {
            Some(wave) => writeln!(f, "  Best Objective: {}", wave.objective())?,
            None => writeln!(f, "  Best Objective: none")?,
        }
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixedbitset::FixedBitSet;

    fn wave(units: i64, corridors: &[usize], num_corridors: usize) -> Wave<i64> {
        let orders = FixedBitSet::with_capacity(2);
        let mut selected = FixedBitSet::with_capacity(num_corridors);
        for &c in corridors {
            selected.insert(c);
        }
        Wave::new(orders, selected, units, corridors.len())
    }

    #[test]
    fn test_optimal_outcome_exposes_best_wave() {
        let best = wave(6, &[0, 1], 3);
        let outcome = SearchOutcome::optimal(
            best.clone(),
            vec![best.clone()],
            SearchStatistics::new(),
        );

        assert!(outcome.is_optimal());
        assert!(outcome.has_solution());
        assert_eq!(outcome.best_wave(), Some(&best));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
    }

    #[test]
    fn test_infeasible_outcome_has_no_waves() {
        let outcome = SearchOutcome::<i64>::infeasible(SearchStatistics::new());
        assert!(outcome.is_infeasible());
        assert!(!outcome.has_solution());
        assert!(outcome.best_wave().is_none());
        assert!(outcome.waves().is_empty());
    }

    #[test]
    fn test_aborted_outcome_with_incumbent_is_feasible_not_optimal() {
        let best = wave(4, &[2], 3);
        let outcome = SearchOutcome::aborted(
            Some(best.clone()),
            vec![best.clone()],
            "time limit reached".to_string(),
            SearchStatistics::new(),
        );

        assert!(!outcome.is_optimal());
        assert!(outcome.has_solution());
        assert_eq!(outcome.best_wave(), Some(&best));
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => {
                assert!(reason.contains("time limit"), "unexpected reason: {reason}")
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_aborted_outcome_without_incumbent_is_infeasible() {
        let outcome =
            SearchOutcome::<i64>::aborted(None, Vec::new(), "stopped".to_string(), SearchStatistics::new());
        assert!(outcome.is_infeasible());
        assert!(!outcome.is_optimal());
    }

    #[test]
    fn test_display_mentions_termination_and_objective() {
        let best = wave(6, &[0], 2);
        let outcome = SearchOutcome::optimal(best.clone(), vec![best], SearchStatistics::new());

        let rendered = format!("{}", outcome);
        assert!(rendered.contains("Optimality Proven"));
        assert!(rendered.contains("Best Objective: 6.00"));
    }
}
