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

//! # Global Feasibility Checks
//!
//! The three predicates a complete assignment must pass to form a feasible
//! wave:
//!
//! 1. Band: the total units of the selected orders lie within the
//!    instance's inclusive band.
//! 2. Capacity: for every item demanded by a selected order, the opened
//!    corridors jointly supply at least the demanded quantity.
//! 3. Activity: at least one corridor is opened.
//!
//! Capacity is checked only for items that some order demands. Items that
//! exist solely on the supply side can never violate it, so they are not
//! iterated at all.
//!
//! All checks operate on complete assignments. Selections are passed as
//! bool slices indexed like the model's orders and corridors.

use num_traits::{PrimInt, Signed};
use wavepick_model::{
    band::Band,
    index::{CorridorIndex, OrderIndex},
    model::Model,
};

/// The outcome of the band predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCheck<T> {
    /// Whether the total lies within the band.
    pub within_band: bool,
    /// The total units of the selected orders.
    pub total_units: T,
}

/// The outcome of the activity predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityCheck {
    /// Whether at least one corridor is opened.
    pub active: bool,
    /// The number of opened corridors.
    pub corridor_count: usize,
}

/// The combined outcome of all three predicates.
///
/// When the band or capacity predicate fails, `corridor_count` is reported
/// as zero regardless of how many corridors the assignment opens. Failed
/// assignments have no meaningful corridor usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalCheck<T> {
    /// Whether the assignment forms a feasible wave.
    pub feasible: bool,
    /// The total units of the selected orders.
    pub total_units: T,
    /// The number of opened corridors, or zero on band/capacity failure.
    pub corridor_count: usize,
}

/// Checks the band predicate: total selected units within `band`.
pub fn check_band<T>(model: &Model<T>, band: &Band<T>, orders: &[bool]) -> BandCheck<T>
where
    T: PrimInt + Signed,
{
    debug_assert_eq!(
        orders.len(),
        model.num_orders(),
        "order selection length must match the model"
    );

    let mut total_units = T::zero();
    for (order, &selected) in orders.iter().enumerate() {
        if selected {
            total_units = total_units + model.order_total_units(OrderIndex::new(order));
        }
    }

    BandCheck {
        within_band: band.contains(total_units),
        total_units,
    }
}

/// Checks the capacity predicate: for every demanded item, the opened
/// corridors jointly supply at least the demand of the selected orders.
pub fn check_capacity<T>(model: &Model<T>, orders: &[bool], corridors: &[bool]) -> bool
where
    T: PrimInt + Signed,
{
    debug_assert_eq!(
        orders.len(),
        model.num_orders(),
        "order selection length must match the model"
    );
    debug_assert_eq!(
        corridors.len(),
        model.num_corridors(),
        "corridor selection length must match the model"
    );

    for &item in model.demanded_items() {
        let mut demand = T::zero();
        for (order, &selected) in orders.iter().enumerate() {
            if selected {
                demand = demand + model.order_demand_of(OrderIndex::new(order), item);
            }
        }
        if demand.is_zero() {
            continue;
        }

        let mut supply = T::zero();
        for (corridor, &opened) in corridors.iter().enumerate() {
            if opened {
                supply = supply + model.corridor_supply_of(CorridorIndex::new(corridor), item);
            }
        }
        if demand > supply {
            return false;
        }
    }
    true
}

/// Checks the activity predicate: at least one corridor opened.
pub fn check_activity(corridors: &[bool]) -> ActivityCheck {
    let corridor_count = corridors.iter().filter(|&&opened| opened).count();
    ActivityCheck {
        active: corridor_count > 0,
        corridor_count,
    }
}

/// Evaluates all three predicates on a complete assignment.
pub fn check_global_constraints<T>(
    model: &Model<T>,
    band: &Band<T>,
    orders: &[bool],
    corridors: &[bool],
) -> GlobalCheck<T>
where
    T: PrimInt + Signed,
{
    let band_check = check_band(model, band, orders);
    if !band_check.within_band {
        return GlobalCheck {
            feasible: false,
            total_units: band_check.total_units,
            corridor_count: 0,
        };
    }

    if !check_capacity(model, orders, corridors) {
        return GlobalCheck {
            feasible: false,
            total_units: band_check.total_units,
            corridor_count: 0,
        };
    }

    let activity = check_activity(corridors);
    GlobalCheck {
        feasible: activity.active,
        total_units: band_check.total_units,
        corridor_count: activity.corridor_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavepick_model::{
        index::{CorridorIndex, ItemIndex},
        model::ModelBuilder,
    };

    // Two orders, two corridors, two items.
    // Order 0 wants 3 of item 0; order 1 wants 2 of item 1.
    // Corridor 0 stocks 2 of item 0; corridor 1 stocks 1 of item 0 and 2 of item 1.
    fn small_model() -> Model<i64> {
        let mut builder = ModelBuilder::new(2, 2);
        builder.add_order_demand(OrderIndex::new(0), ItemIndex::new(0), 3);
        builder.add_order_demand(OrderIndex::new(1), ItemIndex::new(1), 2);
        builder.add_corridor_supply(CorridorIndex::new(0), ItemIndex::new(0), 2);
        builder.add_corridor_supply(CorridorIndex::new(1), ItemIndex::new(0), 1);
        builder.add_corridor_supply(CorridorIndex::new(1), ItemIndex::new(1), 2);
        builder.build().unwrap()
    }

    #[test]
    fn test_band_sums_selected_orders_only() {
        let model = small_model();
        let band = Band::new(0, 10);

        let check = check_band(&model, &band, &[true, false]);
        assert!(check.within_band);
        assert_eq!(check.total_units, 3);

        let check = check_band(&model, &band, &[true, true]);
        assert_eq!(check.total_units, 5);
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let model = small_model();
        let band = Band::new(5, 5);
        assert!(check_band(&model, &band, &[true, true]).within_band);
        assert!(!check_band(&model, &band, &[true, false]).within_band);
    }

    #[test]
    fn test_capacity_requires_joint_supply() {
        let model = small_model();
        // Order 0 demands 3 of item 0; corridor 0 alone supplies 2.
        assert!(!check_capacity(&model, &[true, false], &[true, false]));
        // Both corridors together supply 3.
        assert!(check_capacity(&model, &[true, false], &[true, true]));
    }

    #[test]
    fn test_capacity_ignores_items_without_selected_demand() {
        let model = small_model();
        // No orders selected, no demand; any corridor set passes.
        assert!(check_capacity(&model, &[false, false], &[false, false]));
        // Order 1 only demands item 1; corridor 1 covers it even though it
        // cannot cover item 0.
        assert!(check_capacity(&model, &[false, true], &[false, true]));
    }

    #[test]
    fn test_capacity_never_inspects_supply_only_items() {
        // Corridor stocks item 5 which no order demands; demand for item 0
        // is satisfiable. The unused supply item must not affect the check.
        let mut builder = ModelBuilder::new(1, 1);
        builder.add_order_demand(OrderIndex::new(0), ItemIndex::new(0), 1);
        builder.add_corridor_supply(CorridorIndex::new(0), ItemIndex::new(0), 1);
        builder.add_corridor_supply(CorridorIndex::new(0), ItemIndex::new(5), 9);
        let model = builder.build().unwrap();

        assert_eq!(model.demanded_items(), &[ItemIndex::new(0)]);
        assert!(check_capacity(&model, &[true], &[true]));
    }

    #[test]
    fn test_activity_counts_opened_corridors() {
        let check = check_activity(&[false, true, true]);
        assert!(check.active);
        assert_eq!(check.corridor_count, 2);

        let check = check_activity(&[false, false]);
        assert!(!check.active);
        assert_eq!(check.corridor_count, 0);
    }

    #[test]
    fn test_global_check_feasible_assignment() {
        let model = small_model();
        let band = Band::new(2, 6);
        let check = check_global_constraints(&model, &band, &[false, true], &[false, true]);

        assert!(check.feasible);
        assert_eq!(check.total_units, 2);
        assert_eq!(check.corridor_count, 1);
    }

    #[test]
    fn test_global_check_reports_zero_corridors_on_band_failure() {
        let model = small_model();
        let band = Band::new(10, 20);
        let check = check_global_constraints(&model, &band, &[true, true], &[true, true]);

        assert!(!check.feasible);
        assert_eq!(check.total_units, 5);
        assert_eq!(check.corridor_count, 0, "band failure masks corridor usage");
    }

    #[test]
    fn test_global_check_reports_zero_corridors_on_capacity_failure() {
        let model = small_model();
        let band = Band::new(0, 10);
        // Order 0 demands 3 of item 0 but only corridor 0 (supply 2) is open.
        let check = check_global_constraints(&model, &band, &[true, false], &[true, false]);

        assert!(!check.feasible);
        assert_eq!(check.corridor_count, 0);
    }

    #[test]
    fn test_global_check_rejects_inactive_assignment() {
        let model = small_model();
        let band = Band::new(0, 10);
        // No orders, no corridors: band and capacity pass trivially but the
        // activity predicate fails.
        let check = check_global_constraints(&model, &band, &[false, false], &[false, false]);

        assert!(!check.feasible);
        assert_eq!(check.total_units, 0);
        assert_eq!(check.corridor_count, 0);
    }
}
