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

use num_traits::Num;
use std::{cmp::Ordering, fmt::Display};

/// A value that can serve as an interval boundary.
///
/// A `Scalar` is a cheap, copyable number that can be ordered and rendered.
/// Its `Display` output is used verbatim when formatting intervals, so it must
/// produce the shortest decimal form that round-trips: Rust's float `Display`
/// already does this (`1.0_f64` prints as `1`, `1.32_f64` as `1.32`) and
/// integer `Display` is exact.
///
/// # Preconditions
///
/// Callers must only use values that are comparable with each other. For
/// floating point types this rules out NaN. Comparisons involving NaN do not
/// panic, but their result is unspecified (currently `Ordering::Equal`).
///
/// # Examples
///
/// ```rust
/// # use ranger_core::num::scalar::Scalar;
/// use std::cmp::Ordering;
///
/// assert_eq!(1.5_f64.compare(&2.0), Ordering::Less);
/// assert_eq!(7_u32.compare(&7), Ordering::Equal);
/// ```
pub trait Scalar: Copy + PartialOrd + Display {
    /// Compares two values by magnitude.
    ///
    /// Falls through to `Ordering::Equal` when neither `<` nor `>` holds.
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        if self < other {
            Ordering::Less
        } else if self > other {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + Display {}
