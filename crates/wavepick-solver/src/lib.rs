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

//! # Wavepick Solver
//!
//! Exhaustive search over wave order-picking instances. Every order and
//! every corridor is a binary decision variable; the solver enumerates the
//! complete assignment tree, keeps the assignments that satisfy the global
//! feasibility predicates, and ranks the resulting waves by units per
//! corridor.
//!
//! ## Modules
//!
//! - `variables`: The binary decision variables and their fixed
//!   enumeration order.
//! - `feasibility`: The band, capacity, and activity predicates evaluated
//!   on complete assignments.
//! - `enumerate`: The lazy, deterministic, monitor-aware backtracking
//!   enumeration of all feasible waves.
//! - `rank`: Exact objective comparison and selection of the best wave.
//! - `solve`: The `WaveSolver` facade tying enumeration and ranking into a
//!   single call that returns a `SearchOutcome`.

pub mod enumerate;
pub mod feasibility;
pub mod rank;
pub mod solve;
pub mod variables;
