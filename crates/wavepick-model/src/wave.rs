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

//! A feasible wave: the solution type of the enumerator.
//!
//! A `Wave` is a complete binary selection over all orders and corridors
//! that satisfied the band, capacity, and activity constraints, together
//! with its derived metrics. Waves are fresh copies owned by the caller;
//! the enumerator never hands out references into its working state.

use crate::index::{CorridorIndex, OrderIndex};
use fixedbitset::FixedBitSet;
use num_traits::{PrimInt, Signed};
use wavepick_core::math::ratio::UnitRate;

/// A feasible selection of orders and corridors with its derived metrics.
///
/// Invariants (checked at construction):
/// - at least one corridor is selected,
/// - `corridor_count` equals the number of set corridor bits,
/// - `objective == total_units / corridor_count` exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wave<T> {
    orders: FixedBitSet,
    corridors: FixedBitSet,
    total_units: T,
    corridor_count: usize,
}

impl<T> Wave<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    /// Constructs a new `Wave` from selection bitsets and derived metrics.
    ///
    /// # Panics
    ///
    /// Panics if `corridor_count` is zero or does not match the number of
    /// set bits in `corridors`.
    pub fn new(
        orders: FixedBitSet,
        corridors: FixedBitSet,
        total_units: T,
        corridor_count: usize,
    ) -> Self {
        assert!(
            corridor_count > 0,
            "called `Wave::new` with zero selected corridors; feasible waves always use at least one"
        );
        assert_eq!(
            corridors.count_ones(..),
            corridor_count,
            "called `Wave::new` with inconsistent corridor count: bitset has {} set bits but corridor_count is {}",
            corridors.count_ones(..),
            corridor_count
        );

        Self {
            orders,
            corridors,
            total_units,
            corridor_count,
        }
    }

    /// Returns the number of order variables (selected or not).
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.orders.len()
    }

    /// Returns the number of corridor variables (selected or not).
    #[inline]
    pub fn num_corridors(&self) -> usize {
        self.corridors.len()
    }

    /// Returns `true` if the given order is part of this wave.
    #[inline]
    pub fn is_order_selected(&self, order: OrderIndex) -> bool {
        self.orders.contains(order.get())
    }

    /// Returns `true` if the given corridor is part of this wave.
    #[inline]
    pub fn is_corridor_selected(&self, corridor: CorridorIndex) -> bool {
        self.corridors.contains(corridor.get())
    }

    /// Iterates over the selected orders in ascending index order.
    #[inline]
    pub fn selected_orders(&self) -> impl Iterator<Item = OrderIndex> + '_ {
        self.orders.ones().map(OrderIndex::new)
    }

    /// Iterates over the selected corridors in ascending index order.
    #[inline]
    pub fn selected_corridors(&self) -> impl Iterator<Item = CorridorIndex> + '_ {
        self.corridors.ones().map(CorridorIndex::new)
    }

    /// Returns the total units picked by the selected orders.
    #[inline]
    pub fn total_units(&self) -> T {
        self.total_units
    }

    /// Returns the number of selected corridors.
    #[inline]
    pub fn corridor_count(&self) -> usize {
        self.corridor_count
    }

    /// Returns the exact units-per-corridor objective of this wave.
    #[inline]
    pub fn objective(&self) -> UnitRate<T> {
        UnitRate::new(self.total_units, self.corridor_count)
    }
}

impl<T> std::fmt::Display for Wave<T>
where
    T: PrimInt + Signed + Into<i64> + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wave Summary")?;
        writeln!(f, "   Total Units: {}", self.total_units)?;
        writeln!(f, "   Corridors Used: {}", self.corridor_count)?;
        writeln!(f, "   Objective (units/corridor): {}", self.objective())?;
        writeln!(f)?;

        writeln!(f, "   {:<10} | {:<8}", "Variable", "Selected")?;
        writeln!(f, "   {:-<10}-+-{:-<8}", "", "")?;
        for order in 0..self.orders.len() {
            let value = if self.orders.contains(order) { 1 } else { 0 };
            writeln!(f, "   {:<10} | {:<8}", format!("o{}", order), value)?;
        }
        for corridor in 0..self.corridors.len() {
            let value = if self.corridors.contains(corridor) { 1 } else { 0 };
            writeln!(f, "   {:<10} | {:<8}", format!("c{}", corridor), value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(len: usize, set: &[usize]) -> FixedBitSet {
        let mut bitset = FixedBitSet::with_capacity(len);
        for &bit in set {
            bitset.insert(bit);
        }
        bitset
    }

    #[test]
    fn test_accessors() {
        let wave = Wave::new(bits(3, &[0, 2]), bits(2, &[1]), 7i64, 1);
        assert_eq!(wave.num_orders(), 3);
        assert_eq!(wave.num_corridors(), 2);
        assert_eq!(wave.total_units(), 7);
        assert_eq!(wave.corridor_count(), 1);
        assert!(wave.is_order_selected(OrderIndex::new(0)));
        assert!(!wave.is_order_selected(OrderIndex::new(1)));
        assert!(wave.is_corridor_selected(CorridorIndex::new(1)));

        let orders: Vec<usize> = wave.selected_orders().map(|o| o.get()).collect();
        assert_eq!(orders, vec![0, 2]);
        let corridors: Vec<usize> = wave.selected_corridors().map(|c| c.get()).collect();
        assert_eq!(corridors, vec![1]);
    }

    #[test]
    fn test_objective_is_exact() {
        let wave = Wave::new(bits(1, &[0]), bits(3, &[0, 2]), 10i64, 2);
        assert_eq!(wave.objective(), UnitRate::new(5i64, 1));
    }

    #[test]
    #[should_panic(expected = "zero selected corridors")]
    fn test_zero_corridors_panics() {
        let _ = Wave::new(bits(1, &[0]), bits(2, &[]), 4i64, 0);
    }

    #[test]
    #[should_panic(expected = "inconsistent corridor count")]
    fn test_inconsistent_count_panics() {
        let _ = Wave::new(bits(1, &[0]), bits(2, &[0, 1]), 4i64, 1);
    }

    #[test]
    fn test_display_lists_every_variable() {
        let wave = Wave::new(bits(2, &[1]), bits(2, &[0]), 2i64, 1);
        let rendered = format!("{}", wave);

        assert!(rendered.contains("Total Units: 2"));
        assert!(rendered.contains("Corridors Used: 1"));
        assert!(rendered.contains("Objective (units/corridor): 2.00"));
        assert!(rendered.contains("o0"));
        assert!(rendered.contains("o1"));
        assert!(rendered.contains("c0"));
        assert!(rendered.contains("c1"));
    }

    #[test]
    fn test_clone_and_eq() {
        let wave = Wave::new(bits(2, &[0]), bits(1, &[0]), 4i64, 1);
        let copy = wave.clone();
        assert_eq!(wave, copy);
    }
}
