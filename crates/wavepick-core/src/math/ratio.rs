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

//! # Units-per-Corridor Rate
//!
//! The objective of a wave is the number of picked units divided by the
//! number of corridors used. Comparing those values as floating point would
//! make equality (and therefore ranking ties) depend on rounding; `UnitRate`
//! instead keeps the exact numerator/denominator pair and compares by
//! cross multiplication in 128-bit space, so `10/2` and `5/1` are the same
//! rate and no precision is lost for any representable instance.
//!
//! The denominator is always strictly positive; constructing a rate over
//! zero corridors is a programming error and panics.

use num_traits::{PrimInt, Signed};

/// An exact rational "units per corridor" objective value.
///
/// # Examples
///
/// ```rust
/// use wavepick_core::math::ratio::UnitRate;
///
/// let a = UnitRate::new(10i64, 2);
/// let b = UnitRate::new(5i64, 1);
/// assert_eq!(a, b);
/// assert!(UnitRate::new(11i64, 2) > a);
/// ```
#[derive(Clone, Copy)]
pub struct UnitRate<T> {
    units: T,
    corridors: usize,
}

impl<T> UnitRate<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    /// Creates a new rate of `units` over `corridors`.
    ///
    /// # Panics
    ///
    /// Panics if `corridors` is zero.
    #[inline]
    pub fn new(units: T, corridors: usize) -> Self {
        assert!(
            corridors > 0,
            "called `UnitRate::new` with zero corridors; the denominator must be positive"
        );
        Self { units, corridors }
    }

    /// Returns the numerator (total picked units).
    #[inline]
    pub fn units(&self) -> T {
        self.units
    }

    /// Returns the denominator (number of corridors used).
    #[inline]
    pub fn corridors(&self) -> usize {
        self.corridors
    }

    /// Returns the rate as `f64`. For display and plotting only; all
    /// comparisons inside the solver stay exact.
    #[inline]
    pub fn value(&self) -> f64 {
        let units: i64 = self.units.into();
        units as f64 / self.corridors as f64
    }

    /// Cross product used for exact comparison: `units * other.corridors`.
    #[inline]
    fn cross(&self, other: &Self) -> (i128, i128) {
        let lhs: i64 = self.units.into();
        let rhs: i64 = other.units.into();
        (
            lhs as i128 * other.corridors as i128,
            rhs as i128 * self.corridors as i128,
        )
    }
}

impl<T> PartialEq for UnitRate<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl<T> Eq for UnitRate<T> where T: PrimInt + Signed + Into<i64> {}

impl<T> PartialOrd for UnitRate<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for UnitRate<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl<T> std::fmt::Debug for UnitRate<T>
where
    T: PrimInt + Signed + Into<i64> + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnitRate({}/{})", self.units, self.corridors)
    }
}

impl<T> std::fmt::Display for UnitRate<T>
where
    T: PrimInt + Signed + Into<i64>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}
