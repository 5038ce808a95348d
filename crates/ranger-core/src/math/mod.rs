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

//! # Math Primitives
//!
//! One-dimensional interval math over ordered scalar values.
//!
//! ## Submodules
//!
//! - `endpoint`: `BoundType` (open/closed) and `EndPoint<T>`, a boundary value
//!   tagged with its bound type. Endpoints compare by value only.
//! - `interval`: `Interval<T>` with the four factories `closed`, `open`,
//!   `closed_open` and `open_closed`, validity and connectivity checks,
//!   canonical rendering (`[1,3]`, `(1.32,3.12]`, ...), and conversions
//!   to/from `std::ops::Range`, `RangeInclusive` and `RangeBounds`. The
//!   `Range<T>` trait lets other types take part in connectivity checks.
//!
//! ## Motivation
//!
//! Admission control, scheduling windows and log formatting all need to ask
//! whether two numeric ranges touch and to print them unambiguously. Open and
//! closed boundaries are where off-by-one mistakes creep in, so the bound type
//! travels with every value.

pub mod endpoint;
pub mod interval;
