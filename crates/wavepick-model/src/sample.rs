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

//! A small built-in warehouse instance.
//!
//! Five orders, five corridors, five item types. Handy for examples,
//! benchmarks, and end-to-end tests that need a known-good instance with a
//! hand-checkable optimum.

use crate::{
    band::Band,
    index::{CorridorIndex, ItemIndex, OrderIndex},
    model::{Model, ModelBuilder},
};

/// Builds the reference instance together with its `[5, 12]` unit band.
///
/// The dataset is small enough to enumerate by hand. Its best wave picks
/// orders `o1` and `o2` (5 units in total) out of corridor `c4` alone, for
/// a units-per-corridor objective of exactly 5.
pub fn reference_instance() -> (Model<i64>, Band<i64>) {
    let demands: [&[(usize, i64)]; 5] = [
        &[(0, 3), (2, 1)],
        &[(1, 1), (3, 1)],
        &[(2, 1), (4, 2)],
        &[(0, 1), (2, 2), (3, 1), (4, 1)],
        &[(1, 1)],
    ];
    let supplies: [&[(usize, i64)]; 5] = [
        &[(0, 2), (1, 1), (2, 1), (4, 1)],
        &[(0, 2), (1, 1), (2, 2), (4, 1)],
        &[(1, 2), (3, 1), (4, 2)],
        &[(0, 2), (1, 1), (3, 1), (4, 1)],
        &[(1, 1), (2, 2), (3, 1), (4, 2)],
    ];

    let mut builder = ModelBuilder::new(demands.len(), supplies.len());
    for (order, entries) in demands.iter().enumerate() {
        for &(item, quantity) in entries.iter() {
            builder.add_order_demand(OrderIndex::new(order), ItemIndex::new(item), quantity);
        }
    }
    for (corridor, entries) in supplies.iter().enumerate() {
        for &(item, supply) in entries.iter() {
            builder.add_corridor_supply(CorridorIndex::new(corridor), ItemIndex::new(item), supply);
        }
    }

    // The data above is static and valid, so building cannot fail.
    let model = match builder.build() {
        Ok(model) => model,
        Err(e) => unreachable!("reference instance must validate: {}", e),
    };
    (model, Band::new(5, 12))
}
