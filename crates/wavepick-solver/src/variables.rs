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

//! # Selection Variables
//!
//! The binary decision variables of a wave instance and their fixed
//! enumeration order. Every order and every corridor contributes exactly one
//! boolean variable; the search assigns them in the stable order
//! `o0 .. o(n-1), c0 .. c(m-1)`.

use num_traits::{PrimInt, Signed};
use wavepick_model::{
    index::{CorridorIndex, OrderIndex},
    model::Model,
};

/// A single binary decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionVariable {
    /// Whether the order is included in the wave.
    Order(OrderIndex),
    /// Whether the corridor is opened for the wave.
    Corridor(CorridorIndex),
}

impl std::fmt::Display for SelectionVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionVariable::Order(order) => write!(f, "o{}", order.get()),
            SelectionVariable::Corridor(corridor) => write!(f, "c{}", corridor.get()),
        }
    }
}

/// The ordered set of decision variables of an instance.
///
/// Positions `0..num_orders` map to order variables, positions
/// `num_orders..num_orders + num_corridors` map to corridor variables. The
/// order never changes between runs on the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpace {
    num_orders: usize,
    num_corridors: usize,
}

impl VariableSpace {
    /// Creates the variable space of the given model.
    #[inline]
    pub fn new<T>(model: &Model<T>) -> Self
    where
        T: PrimInt + Signed,
    {
        Self {
            num_orders: model.num_orders(),
            num_corridors: model.num_corridors(),
        }
    }

    /// Returns the total number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_orders + self.num_corridors
    }

    /// Returns `true` if the instance has no variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of order variables.
    #[inline]
    pub fn num_orders(&self) -> usize {
        self.num_orders
    }

    /// Returns the number of corridor variables.
    #[inline]
    pub fn num_corridors(&self) -> usize {
        self.num_corridors
    }

    /// Returns the variable at `position` in enumeration order.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn variable_at(&self, position: usize) -> SelectionVariable {
        assert!(
            position < self.len(),
            "called `VariableSpace::variable_at` with position out of bounds: the len is {} but the position is {}",
            self.len(),
            position
        );
        if position < self.num_orders {
            SelectionVariable::Order(OrderIndex::new(position))
        } else {
            SelectionVariable::Corridor(CorridorIndex::new(position - self.num_orders))
        }
    }

    /// Iterates all variables in enumeration order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = SelectionVariable> + '_ {
        (0..self.len()).map(|position| self.variable_at(position))
    }
}
