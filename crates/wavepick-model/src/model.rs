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

//! The validated, immutable problem instance and its builder.
//!
//! A `Model` holds the sparse demand table (per order) and supply table
//! (per corridor), pre-sorted by item, together with precomputed order unit
//! totals and the list of items demanded by at least one order. The
//! feasibility oracle iterates exactly that demanded-item list: items that
//! appear only in corridor supplies are never checked.
//!
//! Construction goes through `ModelBuilder`, which accumulates entries in
//! hash maps (summing duplicate `(order, item)` contributions) and validates
//! everything once on `build`: demands must be strictly positive, supplies
//! non-negative. The solver never sees an invalid model.

use crate::index::{CorridorIndex, ItemIndex, OrderIndex};
use num_traits::{PrimInt, Signed};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A single sparse `(item, quantity)` entry in a demand or supply table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ItemQuantity<T> {
    /// The item this entry refers to.
    pub item: ItemIndex,
    /// Demanded or supplied units of that item.
    pub quantity: T,
}

/// Inline capacity for per-order and per-corridor entry lists. Real wave
/// picking instances rarely bundle more than a handful of items per order.
type EntryList<T> = SmallVec<[ItemQuantity<T>; 4]>;

/// The theoretical search space of a wave selection instance.
///
/// Every order and every corridor contributes one binary decision variable,
/// so the full assignment tree has `2^(orders + corridors)` leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchSpace {
    num_variables: usize,
}

impl SearchSpace {
    /// Creates the search space descriptor for the given dimensions.
    #[inline]
    pub fn new(num_orders: usize, num_corridors: usize) -> Self {
        Self {
            num_variables: num_orders + num_corridors,
        }
    }

    /// Returns the number of binary decision variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Returns the number of complete assignments, or `None` if it does not
    /// fit into a `u128`.
    #[inline]
    pub fn num_assignments(&self) -> Option<u128> {
        1u128.checked_shl(self.num_variables as u32)
    }
}

impl std::fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "2^{}", self.num_variables)
    }
}

/// The immutable data model describing orders, corridors, and their sparse
/// item demand/supply tables.
///
/// Stored layout:
/// - `demands[o]`: sorted `(item, quantity)` entries demanded by order `o`,
///   all quantities strictly positive.
/// - `supplies[c]`: sorted `(item, quantity)` entries offered by corridor
///   `c`, all quantities non-negative.
/// - `order_totals[o]`: the sum of all quantities of order `o`.
/// - `demanded_items`: sorted, distinct items that appear in at least one
///   order. Items appearing only in corridors are intentionally absent.
///
/// Construction: use [`ModelBuilder`] and call [`ModelBuilder::build`].
#[derive(Clone, Debug)]
pub struct Model<T> {
    demands: Vec<EntryList<T>>,    // len = num_orders
    supplies: Vec<EntryList<T>>,   // len = num_corridors
    order_totals: Vec<T>,          // len = num_orders
    demanded_items: Vec<ItemIndex>,
}

impl<T> Model<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of orders in the model.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wavepick_model::model::ModelBuilder;
    ///
    /// let model = ModelBuilder::<i64>::new(3, 5).build().unwrap();
    /// assert_eq!(model.num_orders(), 3);
    /// ```
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.demands.len()
    }

    /// Returns the number of corridors in the model.
    #[inline]
    pub fn num_corridors(&self) -> usize {
        self.supplies.len()
    }

    /// Returns the search space descriptor of this instance.
    #[inline]
    pub fn search_space(&self) -> SearchSpace {
        SearchSpace::new(self.num_orders(), self.num_corridors())
    }

    /// Returns the sorted demand entries of the given order.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of bounds.
    #[inline]
    pub fn order_demand(&self, order: OrderIndex) -> &[ItemQuantity<T>] {
        &self.demands[order.get()]
    }

    /// Returns the sorted supply entries of the given corridor.
    ///
    /// # Panics
    ///
    /// Panics if `corridor` is out of bounds.
    #[inline]
    pub fn corridor_supply(&self, corridor: CorridorIndex) -> &[ItemQuantity<T>] {
        &self.supplies[corridor.get()]
    }

    /// Returns the total units demanded by the given order across all items.
    ///
    /// # Panics
    ///
    /// Panics if `order` is out of bounds.
    #[inline]
    pub fn order_total_units(&self, order: OrderIndex) -> T {
        self.order_totals[order.get()]
    }

    /// Returns the quantity of `item` demanded by `order`, or zero if the
    /// order does not demand it.
    #[inline]
    pub fn order_demand_of(&self, order: OrderIndex, item: ItemIndex) -> T {
        lookup(&self.demands[order.get()], item)
    }

    /// Returns the supply of `item` offered by `corridor`, or zero if the
    /// corridor does not stock it.
    #[inline]
    pub fn corridor_supply_of(&self, corridor: CorridorIndex, item: ItemIndex) -> T {
        lookup(&self.supplies[corridor.get()], item)
    }

    /// Returns the sorted, distinct items demanded by at least one order.
    ///
    /// Capacity checking is defined over exactly this set; items stocked by
    /// corridors but demanded by nobody are never examined.
    #[inline]
    pub fn demanded_items(&self) -> &[ItemIndex] {
        &self.demanded_items
    }
}

#[inline]
fn lookup<T>(entries: &[ItemQuantity<T>], item: ItemIndex) -> T
where
    T: PrimInt + Signed,
{
    match entries.binary_search_by_key(&item, |entry| entry.item) {
        Ok(position) => entries[position].quantity,
        Err(_) => T::zero(),
    }
}

/// The error type for model validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBuildError {
    /// An order demands a zero or negative quantity of some item.
    NonPositiveDemand {
        /// The offending order.
        order: OrderIndex,
        /// The offending item.
        item: ItemIndex,
    },
    /// A corridor offers a negative supply of some item.
    NegativeSupply {
        /// The offending corridor.
        corridor: CorridorIndex,
        /// The offending item.
        item: ItemIndex,
    },
}

impl std::fmt::Display for ModelBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDemand { order, item } => {
                write!(
                    f,
                    "Order {} demands a non-positive quantity of item {}",
                    order.get(),
                    item.get()
                )
            }
            Self::NegativeSupply { corridor, item } => {
                write!(
                    f,
                    "Corridor {} offers a negative supply of item {}",
                    corridor.get(),
                    item.get()
                )
            }
        }
    }
}

impl std::error::Error for ModelBuildError {}

/// A mutable builder accumulating demand and supply entries before
/// validation.
///
/// Repeated calls for the same `(order, item)` or `(corridor, item)` pair
/// are summed, so loaders can feed entries in any order without
/// deduplicating first. Entries are sorted by item on `build`, giving the
/// model a deterministic layout.
#[derive(Debug, Clone)]
pub struct ModelBuilder<T> {
    num_orders: usize,
    num_corridors: usize,
    demands: Vec<FxHashMap<ItemIndex, T>>,
    supplies: Vec<FxHashMap<ItemIndex, T>>,
}

impl<T> ModelBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new builder for `num_orders` orders and `num_corridors`
    /// corridors with empty demand and supply tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wavepick_model::model::ModelBuilder;
    /// # use wavepick_model::index::{ItemIndex, OrderIndex};
    ///
    /// let mut builder = ModelBuilder::<i64>::new(2, 3);
    /// builder.add_order_demand(OrderIndex::new(0), ItemIndex::new(0), 3);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.order_total_units(OrderIndex::new(0)), 3);
    /// ```
    pub fn new(num_orders: usize, num_corridors: usize) -> Self {
        Self {
            num_orders,
            num_corridors,
            demands: vec![FxHashMap::default(); num_orders],
            supplies: vec![FxHashMap::default(); num_corridors],
        }
    }

    /// Returns the number of orders this builder was created for.
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.num_orders
    }

    /// Returns the number of corridors this builder was created for.
    #[inline]
    pub fn num_corridors(&self) -> usize {
        self.num_corridors
    }

    /// Adds `quantity` units of `item` to the demand of `order`, summing
    /// with any previous contribution for the same pair.
    ///
    /// # Panics
    ///
    /// Panics if `order` is not in `0..num_orders()`.
    pub fn add_order_demand(&mut self, order: OrderIndex, item: ItemIndex, quantity: T) {
        assert!(
            order.get() < self.num_orders,
            "called `ModelBuilder::add_order_demand` with order index out of bounds: the len is {} but the index is {}",
            self.num_orders,
            order.get()
        );
        let slot = self.demands[order.get()].entry(item).or_insert_with(T::zero);
        *slot = *slot + quantity;
    }

    /// Adds `quantity` units of `item` to the supply of `corridor`, summing
    /// with any previous contribution for the same pair.
    ///
    /// # Panics
    ///
    /// Panics if `corridor` is not in `0..num_corridors()`.
    pub fn add_corridor_supply(&mut self, corridor: CorridorIndex, item: ItemIndex, quantity: T) {
        assert!(
            corridor.get() < self.num_corridors,
            "called `ModelBuilder::add_corridor_supply` with corridor index out of bounds: the len is {} but the index is {}",
            self.num_corridors,
            corridor.get()
        );
        let slot = self.supplies[corridor.get()]
            .entry(item)
            .or_insert_with(T::zero);
        *slot = *slot + quantity;
    }

    /// Validates the accumulated data and freezes it into a `Model`.
    ///
    /// Demands must be strictly positive and supplies non-negative; the
    /// first violation found is reported and nothing is built.
    pub fn build(self) -> Result<Model<T>, ModelBuildError> {
        let mut demands = Vec::with_capacity(self.num_orders);
        let mut order_totals = Vec::with_capacity(self.num_orders);
        let mut demanded_items: Vec<ItemIndex> = Vec::new();

        for (order, table) in self.demands.into_iter().enumerate() {
            let mut entries: EntryList<T> = table
                .into_iter()
                .map(|(item, quantity)| ItemQuantity { item, quantity })
                .collect();
            entries.sort_unstable_by_key(|entry| entry.item);

            let mut total = T::zero();
            for entry in &entries {
                if entry.quantity <= T::zero() {
                    return Err(ModelBuildError::NonPositiveDemand {
                        order: OrderIndex::new(order),
                        item: entry.item,
                    });
                }
                total = total + entry.quantity;
                demanded_items.push(entry.item);
            }

            order_totals.push(total);
            demands.push(entries);
        }

        demanded_items.sort_unstable();
        demanded_items.dedup();

        let mut supplies = Vec::with_capacity(self.num_corridors);
        for (corridor, table) in self.supplies.into_iter().enumerate() {
            let mut entries: EntryList<T> = table
                .into_iter()
                .map(|(item, quantity)| ItemQuantity { item, quantity })
                .collect();
            entries.sort_unstable_by_key(|entry| entry.item);

            for entry in &entries {
                if entry.quantity < T::zero() {
                    return Err(ModelBuildError::NegativeSupply {
                        corridor: CorridorIndex::new(corridor),
                        item: entry.item,
                    });
                }
            }

            supplies.push(entries);
        }

        Ok(Model {
            demands,
            supplies,
            order_totals,
            demanded_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oi(index: usize) -> OrderIndex {
        OrderIndex::new(index)
    }

    fn ci(index: usize) -> CorridorIndex {
        CorridorIndex::new(index)
    }

    fn ii(index: usize) -> ItemIndex {
        ItemIndex::new(index)
    }

    #[test]
    fn test_empty_model_has_zero_totals() {
        let model = ModelBuilder::<i64>::new(2, 3).build().unwrap();
        assert_eq!(model.num_orders(), 2);
        assert_eq!(model.num_corridors(), 3);
        assert_eq!(model.order_total_units(oi(0)), 0);
        assert!(model.demanded_items().is_empty());
    }

    #[test]
    fn test_entries_are_sorted_and_totals_computed() {
        let mut builder = ModelBuilder::<i64>::new(1, 1);
        builder.add_order_demand(oi(0), ii(4), 2);
        builder.add_order_demand(oi(0), ii(1), 1);
        builder.add_order_demand(oi(0), ii(2), 3);
        builder.add_corridor_supply(ci(0), ii(9), 5);
        builder.add_corridor_supply(ci(0), ii(3), 0);
        let model = builder.build().unwrap();

        let items: Vec<usize> = model
            .order_demand(oi(0))
            .iter()
            .map(|entry| entry.item.get())
            .collect();
        assert_eq!(items, vec![1, 2, 4]);
        assert_eq!(model.order_total_units(oi(0)), 6);

        let supply_items: Vec<usize> = model
            .corridor_supply(ci(0))
            .iter()
            .map(|entry| entry.item.get())
            .collect();
        assert_eq!(supply_items, vec![3, 9]);
    }

    #[test]
    fn test_duplicate_contributions_are_summed() {
        let mut builder = ModelBuilder::<i64>::new(1, 1);
        builder.add_order_demand(oi(0), ii(0), 2);
        builder.add_order_demand(oi(0), ii(0), 3);
        builder.add_corridor_supply(ci(0), ii(0), 1);
        builder.add_corridor_supply(ci(0), ii(0), 4);
        let model = builder.build().unwrap();

        assert_eq!(model.order_demand_of(oi(0), ii(0)), 5);
        assert_eq!(model.corridor_supply_of(ci(0), ii(0)), 5);
    }

    #[test]
    fn test_sparse_lookup_defaults_to_zero() {
        let mut builder = ModelBuilder::<i64>::new(1, 1);
        builder.add_order_demand(oi(0), ii(2), 1);
        let model = builder.build().unwrap();

        assert_eq!(model.order_demand_of(oi(0), ii(7)), 0);
        assert_eq!(model.corridor_supply_of(ci(0), ii(2)), 0);
    }

    #[test]
    fn test_demanded_items_exclude_corridor_only_items() {
        let mut builder = ModelBuilder::<i64>::new(2, 1);
        builder.add_order_demand(oi(0), ii(3), 1);
        builder.add_order_demand(oi(1), ii(1), 2);
        builder.add_order_demand(oi(1), ii(3), 1);
        builder.add_corridor_supply(ci(0), ii(8), 10);
        let model = builder.build().unwrap();

        let demanded: Vec<usize> = model.demanded_items().iter().map(|i| i.get()).collect();
        assert_eq!(demanded, vec![1, 3]);
    }

    #[test]
    fn test_non_positive_demand_is_rejected() {
        let mut builder = ModelBuilder::<i64>::new(1, 0);
        builder.add_order_demand(oi(0), ii(0), 0);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelBuildError::NonPositiveDemand {
                order: oi(0),
                item: ii(0)
            }
        );
        assert!(format!("{}", err).contains("non-positive quantity"));
    }

    #[test]
    fn test_negative_supply_is_rejected() {
        let mut builder = ModelBuilder::<i64>::new(0, 2);
        builder.add_corridor_supply(ci(1), ii(5), -1);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            ModelBuildError::NegativeSupply {
                corridor: ci(1),
                item: ii(5)
            }
        );
    }

    #[test]
    fn test_zero_supply_is_allowed() {
        let mut builder = ModelBuilder::<i64>::new(0, 1);
        builder.add_corridor_supply(ci(0), ii(0), 0);
        assert!(builder.build().is_ok());
    }

    #[test]
    #[should_panic(expected = "order index out of bounds")]
    fn test_out_of_bounds_order_panics() {
        let mut builder = ModelBuilder::<i64>::new(1, 1);
        builder.add_order_demand(oi(1), ii(0), 1);
    }

    #[test]
    fn test_search_space() {
        let model = ModelBuilder::<i64>::new(5, 5).build().unwrap();
        let space = model.search_space();
        assert_eq!(space.num_variables(), 10);
        assert_eq!(space.num_assignments(), Some(1024));
        assert_eq!(format!("{}", space), "2^10");
    }

    #[test]
    fn test_search_space_overflow_reports_none() {
        let space = SearchSpace::new(100, 50);
        assert_eq!(space.num_assignments(), None);
    }
}
