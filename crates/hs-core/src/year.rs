//! Calendar years and projection horizons.
//!
//! # Design
//!
//! A projection runs over a `Horizon`: a run of consecutive calendar years.
//! The horizon is stored as `(first, len)` rather than a `Vec<Year>` so that
//! "consecutive and ascending" holds by construction; there is no way to
//! build a horizon with gaps.
//!
//! A year-*transition* is the step from year `i` to year `i + 1`.  A horizon
//! of `len` years has `len - 1` transitions, and every per-transition series
//! is labelled by the destination year (the second year of the pair).

use std::fmt;

use crate::{HsError, HsResult};

// ── Year ──────────────────────────────────────────────────────────────────────

/// A calendar year.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Year(pub i32);

impl Year {
    /// Return the year `n` years after `self`, saturating at `i32::MAX`.
    #[inline]
    pub fn offset(self, n: usize) -> Year {
        Year(self.0.saturating_add(i32::try_from(n).unwrap_or(i32::MAX)))
    }
}

impl std::ops::Add<i32> for Year {
    type Output = Year;
    #[inline]
    fn add(self, rhs: i32) -> Year {
        Year(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Horizon ───────────────────────────────────────────────────────────────────

/// An ordered run of consecutive calendar years.
///
/// `Horizon` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizon {
    /// First year of the horizon.
    pub first: Year,
    /// Number of years, including `first`.
    pub len: usize,
}

impl Horizon {
    /// Longest horizon the constructors accept, in years.
    pub const MAX_YEARS: usize = 1_000;

    /// Inclusive range `first..=last`.  An inverted range yields an empty
    /// horizon, which projection code rejects.
    ///
    /// Fails with [`HsError::Config`] if the range spans more than
    /// [`MAX_YEARS`][Self::MAX_YEARS] years.
    pub fn new(first: Year, last: Year) -> HsResult<Self> {
        let span = i64::from(last.0) - i64::from(first.0) + 1;
        let len = usize::try_from(span.max(0)).unwrap_or(usize::MAX);
        Self::checked(first, len)
    }

    fn checked(first: Year, len: usize) -> HsResult<Self> {
        if len > Self::MAX_YEARS {
            return Err(HsError::Config(format!(
                "horizon starting {first} spans {len} years, more than the {} allowed",
                Self::MAX_YEARS
            )));
        }
        Ok(Self { first, len })
    }

    /// Build a horizon from an explicit list of years.
    ///
    /// Fails unless every year is exactly one more than its predecessor.
    pub fn from_years(years: &[i32]) -> HsResult<Self> {
        let Some(&first) = years.first() else {
            return Ok(Self { first: Year::default(), len: 0 });
        };
        for pair in years.windows(2) {
            if pair[0].checked_add(1) != Some(pair[1]) {
                return Err(HsError::Config(format!(
                    "horizon years must be consecutive: {} is followed by {}",
                    pair[0], pair[1]
                )));
            }
        }
        Self::checked(Year(first), years.len())
    }

    /// Last year of the horizon, or `None` for an empty horizon.
    pub fn last(&self) -> Option<Year> {
        self.len.checked_sub(1).map(|n| self.first.offset(n))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of year-transitions (`len - 1`, saturating at zero).
    #[inline]
    pub fn transitions(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// The year at position `i`, if inside the horizon.
    pub fn year(&self, i: usize) -> Option<Year> {
        (i < self.len).then(|| self.first.offset(i))
    }

    /// Iterate every year of the horizon in order.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        (0..self.len).map(|i| self.first.offset(i))
    }

    /// Iterate the destination year of every transition (all years but the first).
    pub fn transition_years(&self) -> impl Iterator<Item = Year> + '_ {
        (1..self.len).map(|i| self.first.offset(i))
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last() {
            Some(last) => write!(f, "{}–{}", self.first, last),
            None => f.write_str("(empty)"),
        }
    }
}
