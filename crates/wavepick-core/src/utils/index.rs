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

//! # Strongly Typed Indices
//!
//! Phantom-tagged wrappers around `usize` so that order, corridor, and item
//! indices cannot be mixed up at compile time. A `TaggedIndex<T>` carries a
//! tag type `T: IndexTag` encoding intent, while compiling down to a
//! transparent `usize`.
//!
//! The wave selection problem juggles three index spaces at once (orders,
//! corridors, items). A raw `usize` invites silently swapped arguments in
//! the feasibility checks; a phantom tag turns that mistake into a type
//! error.
//!
//! ```rust
//! use wavepick_core::utils::index::{IndexTag, TaggedIndex};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct WidgetTag;
//! impl IndexTag for WidgetTag {
//!     const NAME: &'static str = "WidgetIndex";
//! }
//!
//! type WidgetIndex = TaggedIndex<WidgetTag>;
//! let w = WidgetIndex::new(2);
//! assert_eq!(w.get(), 2);
//! assert_eq!(format!("{}", w), "WidgetIndex(2)");
//! ```

/// Names a typed index space for `Display` and `Debug` output.
pub trait IndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to a specific index space via the tag type `T`.
///
/// Zero-cost: `#[repr(transparent)]` over `usize`, all methods are `const`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaggedIndex<T> {
    value: usize,
    _tag: std::marker::PhantomData<T>,
}

impl<T> TaggedIndex<T> {
    /// Creates a new index with the given raw value.
    #[inline(always)]
    pub const fn new(value: usize) -> Self {
        Self {
            value,
            _tag: std::marker::PhantomData,
        }
    }

    /// Returns the raw `usize` value.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.value
    }
}

impl<T> std::fmt::Debug for TaggedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.value)
    }
}

impl<T> std::fmt::Display for TaggedIndex<T>
where
    T: IndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.value)
    }
}

impl<T> From<usize> for TaggedIndex<T> {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl<T> From<TaggedIndex<T>> for usize {
    fn from(index: TaggedIndex<T>) -> Self {
        index.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl IndexTag for TestTag {
        const NAME: &'static str = "TestIdx";
    }

    type TestIndex = TaggedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let idx = TestIndex::new(7);
        assert_eq!(idx.get(), 7);
    }

    #[test]
    fn test_conversions_round_trip() {
        let idx: TestIndex = 42.into();
        assert_eq!(idx.get(), 42);

        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_display_and_debug_use_tag_name() {
        let idx = TestIndex::new(3);
        assert_eq!(format!("{}", idx), "TestIdx(3)");
        assert_eq!(format!("{:?}", idx), "TestIdx(3)");
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        assert!(TestIndex::new(1) < TestIndex::new(2));
        assert_eq!(TestIndex::new(5), TestIndex::new(5));
    }
}
