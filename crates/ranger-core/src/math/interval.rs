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

use crate::{
    math::endpoint::{BoundType, EndPoint},
    num::scalar::Scalar,
};
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// Read-only view of a one-dimensional interval.
///
/// Anything that can report a lower and an upper `EndPoint` gets the validity
/// and connectivity checks for free, so `Interval::is_connected` accepts any
/// implementor as its argument.
pub trait Range<T>
where
    T: Scalar,
{
    /// Returns the lower endpoint.
    fn lower_endpoint(&self) -> EndPoint<T>;

    /// Returns the upper endpoint.
    fn upper_endpoint(&self) -> EndPoint<T>;

    /// Returns `true` if the lower value does not exceed the upper value.
    #[inline]
    fn is_valid(&self) -> bool {
        self.lower_endpoint().compare_to(&self.upper_endpoint()) != Ordering::Greater
    }

    /// Returns `true` if the value spans of `self` and `other` overlap or touch.
    #[inline]
    fn is_connected<R>(&self, other: &R) -> bool
    where
        Self: Sized,
        R: Range<T> + ?Sized,
    {
        self.lower_endpoint().compare_to(&other.upper_endpoint()) != Ordering::Greater
            && other.lower_endpoint().compare_to(&self.upper_endpoint()) != Ordering::Greater
    }
}

/// A one-dimensional interval between two tagged endpoints.
///
/// Each side is either open (value excluded) or closed (value included),
/// giving the four shapes `[a,b]`, `(a,b)`, `[a,b)` and `(a,b]`.
///
/// Construction never fails. An interval whose lower value exceeds its upper
/// value can be built and is reported by `is_valid`.
///
/// # Examples
///
/// ```rust
/// # use ranger_core::math::interval::Interval;
///
/// let a = Interval::closed(1.0, 3.0);
/// let b = Interval::open_closed(3.0, 5.5);
/// assert!(a.is_valid());
/// assert!(a.is_connected(&b));
/// assert_eq!(a.to_string(), "[1,3]");
/// assert_eq!(b.to_string(), "(3,5.5]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval<T> {
    lower: EndPoint<T>,
    upper: EndPoint<T>,
}

impl<T> Interval<T>
where
    T: Scalar,
{
    /// Creates an interval from two arbitrary endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::{endpoint::EndPoint, interval::Interval};
    ///
    /// let iv = Interval::new(EndPoint::open(0), EndPoint::closed(10));
    /// assert_eq!(iv, Interval::open_closed(0, 10));
    /// ```
    #[inline]
    pub const fn new(lower: EndPoint<T>, upper: EndPoint<T>) -> Self {
        Self { lower, upper }
    }

    /// Creates the closed interval `[lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(1, 3).to_string(), "[1,3]");
    /// ```
    #[inline]
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(EndPoint::closed(lower), EndPoint::closed(upper))
    }

    /// Creates the open interval `(lower, upper)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open(1.32, 3.12).to_string(), "(1.32,3.12)");
    /// ```
    #[inline]
    pub const fn open(lower: T, upper: T) -> Self {
        Self::new(EndPoint::open(lower), EndPoint::open(upper))
    }

    /// Creates the half-open interval `[lower, upper)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed_open(1.32, 3.12).to_string(), "[1.32,3.12)");
    /// ```
    #[inline]
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(EndPoint::closed(lower), EndPoint::open(upper))
    }

    /// Creates the half-open interval `(lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open_closed(1.32, 3.12).to_string(), "(1.32,3.12]");
    /// ```
    #[inline]
    pub const fn open_closed(lower: T, upper: T) -> Self {
        Self::new(EndPoint::open(lower), EndPoint::closed(upper))
    }

    /// Returns the lower endpoint.
    #[inline]
    pub const fn lower_endpoint(&self) -> EndPoint<T> {
        self.lower
    }

    /// Returns the upper endpoint.
    #[inline]
    pub const fn upper_endpoint(&self) -> EndPoint<T> {
        self.upper
    }

    /// Returns `true` if `lower <= upper` by value.
    ///
    /// Bound types are not consulted, so a degenerate interval such as
    /// `(5,5]` is valid even though it contains no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// assert!(Interval::closed(1, 3).is_valid());
    /// assert!(Interval::open_closed(5, 5).is_valid());
    /// assert!(!Interval::closed(3, 1).is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        Range::is_valid(self)
    }

    /// Returns `true` if the value spans of the two intervals overlap,
    /// touch, or one contains the other.
    ///
    /// The check compares raw boundary values and ignores whether a boundary
    /// is open or closed. `(1,3)` and `(3,5)` are therefore connected even
    /// though no value lies in both. The relation is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(1.0, 3.0);
    /// assert!(a.is_connected(&Interval::closed(3.0, 5.0)));  // Touching
    /// assert!(!a.is_connected(&Interval::closed(3.1, 5.0))); // Gap
    /// assert!(Interval::open(1, 3).is_connected(&Interval::open(3, 5)));
    /// ```
    #[inline]
    pub fn is_connected<R>(&self, other: &R) -> bool
    where
        R: Range<T> + ?Sized,
    {
        Range::is_connected(self, other)
    }

    /// Returns `true` if `value` lies in the interval, honoring open and
    /// closed bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::interval::Interval;
    ///
    /// let iv = Interval::closed_open(0, 10);
    /// assert!(iv.contains(0));
    /// assert!(iv.contains(9));
    /// assert!(!iv.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        RangeBounds::contains(self, &value)
    }
}

impl<T> Range<T> for Interval<T>
where
    T: Scalar,
{
    #[inline]
    fn lower_endpoint(&self) -> EndPoint<T> {
        self.lower
    }

    #[inline]
    fn upper_endpoint(&self) -> EndPoint<T> {
        self.upper
    }
}

impl<T> Display for Interval<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let open = if self.lower.is_open() { '(' } else { '[' };
        let close = if self.upper.is_open() { ')' } else { ']' };
        write!(
            f,
            "{}{},{}{}",
            open,
            self.lower.value(),
            self.upper.value(),
            close
        )
    }
}

impl<T> RangeBounds<T> for Interval<T>
where
    T: Scalar,
{
    fn start_bound(&self) -> Bound<&T> {
        self.lower.as_bound()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.upper.as_bound()
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: Scalar,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<RangeInclusive<T>> for Interval<T>
where
    T: Scalar,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

/// Error returned when an `Interval` is converted into a standard range type
/// whose bound shape it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalShapeError {
    expected: (BoundType, BoundType),
    found: (BoundType, BoundType),
}

impl IntervalShapeError {
    /// Returns the lower and upper bound types the target range requires.
    #[inline]
    pub const fn expected(&self) -> (BoundType, BoundType) {
        self.expected
    }

    /// Returns the lower and upper bound types of the rejected interval.
    #[inline]
    pub const fn found(&self) -> (BoundType, BoundType) {
        self.found
    }
}

#[inline]
const fn brackets(shape: (BoundType, BoundType)) -> &'static str {
    match shape {
        (BoundType::Closed, BoundType::Closed) => "[]",
        (BoundType::Open, BoundType::Open) => "()",
        (BoundType::Closed, BoundType::Open) => "[)",
        (BoundType::Open, BoundType::Closed) => "(]",
    }
}

impl Display for IntervalShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Interval shape mismatch: expected {}, found {}",
            brackets(self.expected),
            brackets(self.found)
        )
    }
}

impl std::error::Error for IntervalShapeError {}

impl<T> Interval<T>
where
    T: Scalar,
{
    #[inline]
    fn require_shape(&self, lower: BoundType, upper: BoundType) -> Result<(), IntervalShapeError> {
        let found = (self.lower.bound_type(), self.upper.bound_type());
        if found == (lower, upper) {
            Ok(())
        } else {
            Err(IntervalShapeError {
                expected: (lower, upper),
                found,
            })
        }
    }
}

impl<T> TryFrom<Interval<T>> for std::ops::Range<T>
where
    T: Scalar,
{
    type Error = IntervalShapeError;

    fn try_from(iv: Interval<T>) -> Result<Self, Self::Error> {
        iv.require_shape(BoundType::Closed, BoundType::Open)?;
        Ok(iv.lower.value()..iv.upper.value())
    }
}

impl<T> TryFrom<Interval<T>> for RangeInclusive<T>
where
    T: Scalar,
{
    type Error = IntervalShapeError;

    fn try_from(iv: Interval<T>) -> Result<Self, Self::Error> {
        iv.require_shape(BoundType::Closed, BoundType::Closed)?;
        Ok(iv.lower.value()..=iv.upper.value())
    }
}
