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

//! # Ranger Core
//!
//! Interval primitives for one-dimensional ranges with open or closed bounds.
//! Intervals are immutable `Copy` values: build one with a factory, then query
//! it. Construction never fails; whether the bounds are in order is a separate
//! question answered by `is_valid`.
//!
//! ## Modules
//!
//! - `math`: `EndPoint<T>`/`BoundType` and `Interval<T>` with validity,
//!   connectivity (value-based overlap, bound types ignored), canonical
//!   `Display` rendering, and `std::ops` range conversions.
//! - `num`: The `Scalar` trait describing which value types an interval can
//!   hold (any `num_traits::Num` that is `Copy + PartialOrd + Display`).
//!
//! ## Example
//!
//! ```rust
//! use ranger_core::math::interval::Interval;
//!
//! let morning = Interval::closed_open(8.0, 12.0);
//! let lunch = Interval::closed(12.0, 13.5);
//! assert!(morning.is_connected(&lunch));
//! assert_eq!(format!("{morning} / {lunch}"), "[8,12) / [12,13.5]");
//! ```

pub mod math;
pub mod num;
