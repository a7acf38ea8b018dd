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

//! The allowed range for the total number of units picked in one wave.
//!
//! A `Band` is fixed for the duration of a single search run, but sensitivity
//! analysis may run the same model through several bands; each run takes its
//! own `Band` by value, so no state leaks between runs.

use num_traits::{PrimInt, Signed};

/// The inclusive `[lower, upper]` range for the total units of a wave.
///
/// # Examples
///
/// ```rust
/// use wavepick_model::band::Band;
///
/// let band = Band::new(5i64, 12);
/// assert!(band.contains(5));
/// assert!(band.contains(12));
/// assert!(!band.contains(13));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Band<T> {
    lower: T,
    upper: T,
}

impl<T> Band<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new band.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "called `Band::new` with an inverted range: lower bound exceeds upper bound"
        );
        Self { lower, upper }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if `total` lies within the band (inclusive on both
    /// ends).
    #[inline]
    pub fn contains(&self, total: T) -> bool {
        self.lower <= total && total <= self.upper
    }
}

impl<T> std::fmt::Display for Band<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let band = Band::new(5i64, 12);
        assert!(!band.contains(4));
        assert!(band.contains(5));
        assert!(band.contains(8));
        assert!(band.contains(12));
        assert!(!band.contains(13));
    }

    #[test]
    fn test_degenerate_band_is_allowed() {
        let band = Band::new(0i64, 0);
        assert!(band.contains(0));
        assert!(!band.contains(1));
    }

    #[test]
    #[should_panic(expected = "inverted range")]
    fn test_inverted_band_panics() {
        let _ = Band::new(10i64, 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Band::new(5i64, 12)), "[5, 12]");
    }
}
