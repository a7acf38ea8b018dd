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

/// Statistics collected while the assignment tree is explored.
///
/// Counters saturate instead of wrapping; a search long enough to hit
/// `u64::MAX` has bigger problems than an off-by-one statistic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Number of tree nodes visited (partial and complete assignments).
    pub nodes_explored: u64,
    /// Number of times the search undid a decision.
    pub backtracks: u64,
    /// Number of feasible complete assignments found.
    pub solutions_found: u64,
    /// Deepest level reached in the assignment tree.
    pub max_depth: u64,
    /// Total wall-clock duration of the search.
    pub time_total: std::time::Duration,
}

impl SearchStatistics {
    /// Creates a new `SearchStatistics` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the search visits a node in the assignment tree.
    #[inline(always)]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    /// Called when the search undoes a decision.
    #[inline(always)]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    /// Called when a feasible complete assignment has been found.
    #[inline(always)]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Called whenever the search reaches depth `depth`; keeps the maximum.
    #[inline(always)]
    pub fn on_depth_update(&mut self, depth: u64) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Sets the total wall-clock time of the search.
    #[inline]
    pub fn set_total_time(&mut self, time: std::time::Duration) {
        self.time_total = time;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Solutions Found: {}", self.solutions_found)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        writeln!(
            f,
            "  Total Time (secs): {:.3}",
            self.time_total.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use std::time::Duration;

    #[test]
    fn test_new_statistics_are_zeroed() {
        let stats = SearchStatistics::new();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_event_methods_increment_counters() {
        let mut stats = SearchStatistics::new();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_backtrack();
        stats.on_solution_found();

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.solutions_found, 1);
    }

    #[test]
    fn test_depth_update_keeps_the_maximum() {
        let mut stats = SearchStatistics::new();
        stats.on_depth_update(3);
        stats.on_depth_update(7);
        stats.on_depth_update(5);
        assert_eq!(stats.max_depth, 7, "max depth must not decrease");
    }

    #[test]
    fn test_counters_saturate_at_u64_max() {
        let mut stats = SearchStatistics::new();
        stats.nodes_explored = u64::MAX;
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = SearchStatistics::new();
        stats.on_node_explored();
        stats.set_total_time(Duration::from_millis(1500));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Nodes Explored: 1"));
        assert!(rendered.contains("Total Time (secs): 1.500"));
    }
}
