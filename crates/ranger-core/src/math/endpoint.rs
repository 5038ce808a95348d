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

use crate::num::scalar::Scalar;
use std::{cmp::Ordering, ops::Bound};

/// Whether a boundary value belongs to the interval it delimits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BoundType {
    /// The boundary value is excluded.
    Open,
    /// The boundary value is included.
    Closed,
}

impl BoundType {
    /// Returns `true` if this is `BoundType::Open`.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, BoundType::Open)
    }

    /// Returns `true` if this is `BoundType::Closed`.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, BoundType::Closed)
    }

    /// Returns the opposite bound type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::endpoint::BoundType;
    ///
    /// assert_eq!(BoundType::Open.flip(), BoundType::Closed);
    /// assert_eq!(BoundType::Closed.flip(), BoundType::Open);
    /// ```
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            BoundType::Open => BoundType::Closed,
            BoundType::Closed => BoundType::Open,
        }
    }
}

/// A boundary value tagged with its `BoundType`.
///
/// Endpoints are ordered by value alone. The bound type decides whether the
/// value itself is part of the interval, but never how two endpoints compare,
/// which is why `EndPoint` exposes `compare_to` instead of implementing
/// `PartialOrd`: equality (`==`) is structural and looks at both fields.
///
/// # Examples
///
/// ```rust
/// # use ranger_core::math::endpoint::EndPoint;
/// use std::cmp::Ordering;
///
/// let a = EndPoint::open(3.0);
/// let b = EndPoint::closed(3.0);
/// assert_eq!(a.compare_to(&b), Ordering::Equal);
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EndPoint<T> {
    bound_type: BoundType,
    value: T,
}

impl<T> EndPoint<T>
where
    T: Scalar,
{
    /// Creates an endpoint with an explicit bound type.
    #[inline]
    pub const fn new(bound_type: BoundType, value: T) -> Self {
        Self { bound_type, value }
    }

    /// Creates an endpoint that excludes `value`.
    #[inline]
    pub const fn open(value: T) -> Self {
        Self::new(BoundType::Open, value)
    }

    /// Creates an endpoint that includes `value`.
    #[inline]
    pub const fn closed(value: T) -> Self {
        Self::new(BoundType::Closed, value)
    }

    /// Returns the boundary value.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns the bound type.
    #[inline]
    pub const fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// Returns `true` if the boundary value is excluded.
    #[inline]
    pub const fn is_open(&self) -> bool {
        self.bound_type.is_open()
    }

    /// Returns `true` if the boundary value is included.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.bound_type.is_closed()
    }

    /// Compares the values of two endpoints, ignoring their bound types.
    ///
    /// `Ordering as i8` gives the conventional `-1`, `0`, `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ranger_core::math::endpoint::EndPoint;
    /// use std::cmp::Ordering;
    ///
    /// let lo = EndPoint::closed(1);
    /// let hi = EndPoint::open(5);
    /// assert_eq!(lo.compare_to(&hi), Ordering::Less);
    /// assert_eq!(hi.compare_to(&lo) as i8, 1);
    /// ```
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.value.compare(&other.value)
    }

    /// Borrows the endpoint as a `std::ops::Bound`.
    #[inline]
    pub const fn as_bound(&self) -> Bound<&T> {
        match self.bound_type {
            BoundType::Open => Bound::Excluded(&self.value),
            BoundType::Closed => Bound::Included(&self.value),
        }
    }
}

impl<T> From<EndPoint<T>> for Bound<T>
where
    T: Scalar,
{
    #[inline]
    fn from(endpoint: EndPoint<T>) -> Self {
        match endpoint.bound_type {
            BoundType::Open => Bound::Excluded(endpoint.value),
            BoundType::Closed => Bound::Included(endpoint.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_type_predicates() {
        assert!(BoundType::Open.is_open());
        assert!(!BoundType::Open.is_closed());
        assert!(BoundType::Closed.is_closed());
        assert!(!BoundType::Closed.is_open());
    }

    #[test]
    fn test_bound_type_flip_is_involution() {
        for b in [BoundType::Open, BoundType::Closed] {
            assert_ne!(b.flip(), b);
            assert_eq!(b.flip().flip(), b);
        }
    }

    #[test]
    fn test_constructors_set_bound_type() {
        let o = EndPoint::open(2.5);
        let c = EndPoint::closed(2.5);
        assert!(o.is_open());
        assert_eq!(o.bound_type(), BoundType::Open);
        assert!(c.is_closed());
        assert_eq!(c.bound_type(), BoundType::Closed);
        assert_eq!(o.value(), 2.5);
        assert_eq!(c.value(), 2.5);
        assert_eq!(EndPoint::new(BoundType::Open, 2.5), o);
    }

    #[test]
    fn test_compare_to_orders_by_value() {
        let a = EndPoint::closed(1);
        let b = EndPoint::closed(2);
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
        assert_eq!(a.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn test_compare_to_ignores_bound_type() {
        for (l, r) in [
            (BoundType::Open, BoundType::Closed),
            (BoundType::Closed, BoundType::Open),
            (BoundType::Open, BoundType::Open),
        ] {
            let a = EndPoint::new(l, 4.0);
            let b = EndPoint::new(r, 4.0);
            assert_eq!(a.compare_to(&b), Ordering::Equal);
        }
        // Open 1 still sorts before closed 2.
        assert_eq!(
            EndPoint::open(1.0).compare_to(&EndPoint::closed(2.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_to_as_integer() {
        let a = EndPoint::open(-1.5);
        let b = EndPoint::closed(0.0);
        assert_eq!(a.compare_to(&b) as i8, -1);
        assert_eq!(b.compare_to(&a) as i8, 1);
        assert_eq!(a.compare_to(&a) as i8, 0);
    }

    #[test]
    fn test_into_std_bound() {
        assert_eq!(Bound::from(EndPoint::open(3)), Bound::Excluded(3));
        assert_eq!(Bound::from(EndPoint::closed(3)), Bound::Included(3));
        assert_eq!(EndPoint::open(3).as_bound(), Bound::Excluded(&3));
        assert_eq!(EndPoint::closed(3).as_bound(), Bound::Included(&3));
    }
}
