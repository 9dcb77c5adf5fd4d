/*!
# Distances

Accumulated path costs are stored as [`Distance`], a thin wrapper around `i64` that reserves
`i64::MAX` as the *unreachable* sentinel. The sentinel compares greater than every finite
distance, and all arithmetic involving it short-circuits instead of overflowing.
*/

use std::fmt::{Debug, Display};

use crate::edge::Weight;

/// Accumulated cost of a path, or [`Distance::UNREACHABLE`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Distance(i64);

impl Distance {
    /// Sentinel for "no path". Distinct from every finite sum.
    pub const UNREACHABLE: Distance = Distance(i64::MAX);

    /// Distance of the empty path
    pub const ZERO: Distance = Distance(0);

    /// Largest finite distance. Sums saturate here instead of touching the sentinel.
    const MAX_FINITE: i64 = i64::MAX - 1;

    /// Wraps a finite value. Values at the sentinel are clamped to the largest finite distance.
    pub const fn finite(value: i64) -> Self {
        if value > Self::MAX_FINITE {
            Distance(Self::MAX_FINITE)
        } else {
            Distance(value)
        }
    }

    /// Narrows an exact wide sum into the finite range, saturating at both ends
    pub(crate) fn from_wide(value: i128) -> Self {
        Distance::finite(value.clamp(i64::MIN as i128, Self::MAX_FINITE as i128) as i64)
    }

    /// Returns *true* unless this is the unreachable sentinel
    #[inline]
    pub const fn is_finite(&self) -> bool {
        self.0 != i64::MAX
    }

    /// Returns *true* if this is the unreachable sentinel
    #[inline]
    pub const fn is_unreachable(&self) -> bool {
        !self.is_finite()
    }

    /// Returns the finite value, or `None` for the sentinel
    #[inline]
    pub const fn value(&self) -> Option<i64> {
        if self.is_finite() { Some(self.0) } else { None }
    }

    /// Returns *true* if this is a finite negative distance
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Extends the distance by one edge.
    /// Unreachable stays unreachable; finite sums saturate.
    #[inline]
    pub fn extend(self, weight: Weight) -> Self {
        match self.value() {
            Some(d) => Distance::finite(d.saturating_add(weight)),
            None => Distance::UNREACHABLE,
        }
    }

    /// Concatenates two distances.
    /// Returns unreachable if either operand is unreachable.
    #[inline]
    pub fn join(self, other: Distance) -> Self {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => Distance::finite(a.saturating_add(b)),
            _ => Distance::UNREACHABLE,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::UNREACHABLE
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        Distance::finite(value)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "unreachable"),
        }
    }
}

impl Debug for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
