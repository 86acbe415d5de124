// SPDX-License-Identifier: AGPL-3.0-or-later

//! Instant abstraction used by [`DateTimeRange`].
//!
//! [`RangeInstant`] is the seam between the range algorithms and the host
//! date-time types: the algorithms only need ordering plus duration
//! arithmetic, so a range works over any instant implementing it.
//! [`CalendarInstant`] extends the trait with the calendar-field access
//! required by month/year stepping, whose step length is not constant
//! (28–31 days; 365–366 days).

use crate::range::DateTimeRange;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime, Utc};

// ═══════════════════════════════════════════════════════════════════════════
// RangeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as the endpoints of a
/// [`DateTimeRange`] and provide ordering plus basic duration arithmetic.
pub trait RangeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type used for arithmetic operations.
    type Duration: Copy + PartialOrd;

    /// The zero-length duration. Durations below this are rejected by the
    /// duration-based range constructors.
    fn zero_duration() -> Self::Duration;

    /// Compute the difference between two instants (`self - other`).
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration to this instant.
    fn add_duration(&self, duration: Self::Duration) -> Self;

    /// Subtract a duration from this instant.
    fn sub_duration(&self, duration: Self::Duration) -> Self;

    /// Whether this instant lies inside `range`, both endpoints included.
    ///
    /// Shorthand for [`DateTimeRange::contains`] with neither endpoint
    /// excluded.
    fn in_range(&self, range: &DateTimeRange<Self>) -> bool {
        range.contains(*self, false, false)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// A [`RangeInstant`] with Gregorian calendar fields.
///
/// Required by [`DateTimeRange::enumerate`] for the variable-length
/// [`DateSpan::Month`](crate::DateSpan::Month) and
/// [`DateSpan::Year`](crate::DateSpan::Year) units. Month and year addition
/// must be calendar-correct: the day-of-month is clamped to the last day of
/// the target month when it would overflow (Jan 31 + 1 month → Feb 28/29).
pub trait CalendarInstant: RangeInstant<Duration = Duration> {
    /// The calendar year.
    fn year(&self) -> i32;

    /// The calendar month, 1-based (January = 1).
    fn month(&self) -> u32;

    /// Advance by whole calendar months, clamping the day-of-month.
    fn add_months(&self, months: u32) -> Self;

    /// Advance by whole calendar years, clamping Feb 29 to Feb 28 when the
    /// target year is not a leap year.
    fn add_years(&self, years: u32) -> Self;
}

// ═══════════════════════════════════════════════════════════════════════════
// chrono implementations
// ═══════════════════════════════════════════════════════════════════════════

impl RangeInstant for DateTime<Utc> {
    type Duration = Duration;

    #[inline]
    fn zero_duration() -> Self::Duration {
        Duration::zero()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

impl CalendarInstant for DateTime<Utc> {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn add_months(&self, months: u32) -> Self {
        self.checked_add_months(Months::new(months))
            .expect("instant out of chrono::DateTime<Utc> representable range")
    }

    fn add_years(&self, years: u32) -> Self {
        self.add_months(years * 12)
    }
}

impl RangeInstant for NaiveDateTime {
    type Duration = Duration;

    #[inline]
    fn zero_duration() -> Self::Duration {
        Duration::zero()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

impl CalendarInstant for NaiveDateTime {
    #[inline]
    fn year(&self) -> i32 {
        Datelike::year(self)
    }

    #[inline]
    fn month(&self) -> u32 {
        Datelike::month(self)
    }

    fn add_months(&self, months: u32) -> Self {
        self.checked_add_months(Months::new(months))
            .expect("instant out of chrono::NaiveDateTime representable range")
    }

    fn add_years(&self, years: u32) -> Self {
        self.add_months(years * 12)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
