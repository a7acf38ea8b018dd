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

//! # Wavepick Model
//!
//! **The domain model for the wavepick wave selection solver.**
//!
//! Wave picking groups customer orders into a "wave" that is released to the
//! warehouse together with the corridors (aisle lanes) that will serve it.
//! This crate defines the immutable problem data and the solution shape; the
//! search itself lives in `wavepick_solver`.
//!
//! ## Architecture
//!
//! The crate separates construction from solving:
//!
//! * **`index`**: strongly typed `OrderIndex`, `CorridorIndex`, and
//!   `ItemIndex` wrappers.
//! * **`model`**: `Model` (immutable, validated, optimized for feasibility
//!   checking) and `ModelBuilder` (mutable accumulation with fail-fast
//!   validation on `build`).
//! * **`band`**: the inclusive `[lower, upper]` range for total picked units.
//! * **`wave`**: the solution type, including the exact units-per-corridor
//!   objective.
//! * **`loading`**: a whitespace-token text loader for problem instances.
//! * **`sample`**: a small built-in reference instance used by tests,
//!   benches, and examples.
//!
//! ## Design Philosophy
//!
//! 1. **Type safety**: order, corridor, and item indices are distinct types.
//! 2. **Fail fast**: malformed data (non-positive demand, negative supply,
//!    inverted bands) is rejected before any search starts; the search
//!    itself has no error paths.
//! 3. **Determinism**: demand and supply entries are stored sorted by item,
//!    so every traversal order is reproducible.

pub mod band;
pub mod index;
pub mod loading;
pub mod model;
pub mod sample;
pub mod wave;
