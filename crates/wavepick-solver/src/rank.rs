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

//! Ranking of enumerated waves by units per corridor.
//!
//! Objectives are compared exactly through [`UnitRate`]'s cross-multiplied
//! ordering; no floating point is involved. Ties keep the earliest wave in
//! enumeration order, which makes the chosen optimum deterministic.

use num_traits::{PrimInt, Signed};
use wavepick_model::wave::Wave;

/// Returns the wave maximizing units per corridor, or `None` on an empty
/// slice. The first maximum in slice order wins.
pub fn best_wave<T>(waves: &[Wave<T>]) -> Option<&Wave<T>>
where
    T: PrimInt + Signed + Into<i64>,
{
    let mut best: Option<&Wave<T>> = None;
    for wave in waves {
        match best {
            // Strict comparison keeps the earlier wave on equal objectives.
            Some(current) if wave.objective() > current.objective() => best = Some(wave),
            Some(_) => {}
            None => best = Some(wave),
        }
    }
    best
}
