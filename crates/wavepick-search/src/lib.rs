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

//! # Wavepick Search
//!
//! Shared search infrastructure for the wavepick solver stack. This crate
//! defines the vocabulary every search component speaks: numeric bounds,
//! lifecycle monitors, termination reasons, outcomes, and statistics. It
//! contains no search algorithm itself; the enumeration lives in
//! `wavepick-solver` and builds on the types defined here.
//!
//! ## Modules
//!
//! - `num`: The `UnitNumeric` trait alias bundling the integer bounds the
//!   search stack requires.
//! - `monitor`: Pluggable observers for search lifecycle events, including
//!   logging, solution limits, time limits, and composition.
//! - `result`: `SearchResult`, `TerminationReason`, and the `SearchOutcome`
//!   envelope returned by a finished search.
//! - `stats`: Counters collected while the search tree is explored.

pub mod monitor;
pub mod num;
pub mod result;
pub mod stats;
