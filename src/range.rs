// SPDX-License-Identifier: AGPL-3.0-or-later

//! Validated date/time interval implementation.
//!
//! This module provides:
//! - [`DateTimeRange<T>`]: generic interval over any [`RangeInstant`]
//! - [`UtcRange`] / [`NaiveRange`]: chrono-backed aliases

use crate::error::InvalidRangeError;
use crate::instant::{CalendarInstant, RangeInstant};
use crate::iter::{DurationSteps, SpanSteps};
use crate::span::DateSpan;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents a closed interval between two instants.
///
/// A `DateTimeRange` is defined by a start and end instant of type `T`, where
/// `T` implements the [`RangeInstant`] trait. Every successfully constructed
/// range satisfies `start <= end`; a zero-width range (`start == end`) is a
/// legitimate degenerate range. Ranges are immutable and freely copyable, and
/// equality is structural on the `(start, end)` pair.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use datetime_range::DateTimeRange;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
/// let range = DateTimeRange::new(start, end).unwrap();
///
/// assert_eq!(range.start(), start);
/// assert_eq!(range.end(), end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeRange<T: RangeInstant> {
    start: T,
    end: T,
}

/// UTC range alias.
pub type UtcRange = DateTimeRange<DateTime<Utc>>;

/// Timezone-less range alias.
pub type NaiveRange = DateTimeRange<NaiveDateTime>;

impl<T: RangeInstant> DateTimeRange<T> {
    /// Creates a new range between two instants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError::StartAfterEnd`] if `start` is later than
    /// `end`. Equal bounds are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use datetime_range::DateTimeRange;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    ///
    /// assert!(DateTimeRange::new(start, end).is_ok());
    /// assert!(DateTimeRange::new(end, start).is_err());
    /// ```
    pub fn new(start: T, end: T) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError::StartAfterEnd);
        }
        Ok(Self { start, end })
    }

    /// Creates a range spanning `duration` forward from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError::NegativeDuration`] if `duration` is
    /// negative.
    pub fn from_start_and_duration(
        start: T,
        duration: T::Duration,
    ) -> Result<Self, InvalidRangeError> {
        if duration < T::zero_duration() {
            return Err(InvalidRangeError::NegativeDuration);
        }
        Ok(Self {
            start,
            end: start.add_duration(duration),
        })
    }

    /// Creates a range spanning `duration` backward from `end`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError::NegativeDuration`] if `duration` is
    /// negative.
    pub fn from_duration_and_end(
        duration: T::Duration,
        end: T,
    ) -> Result<Self, InvalidRangeError> {
        if duration < T::zero_duration() {
            return Err(InvalidRangeError::NegativeDuration);
        }
        Ok(Self {
            start: end.sub_duration(duration),
            end,
        })
    }

    /// The instant that marks the start of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The instant that marks the end of the range.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// The duration of the range as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Returns the range spanning both `self` and `other`: it starts at the
    /// earliest start and ends at the latest end of the two ranges.
    ///
    /// The result always satisfies the range invariant, so this operation
    /// cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use datetime_range::DateTimeRange;
    ///
    /// let jan = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let feb = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    /// let mar = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    ///
    /// let first = DateTimeRange::new(jan, feb).unwrap();
    /// let second = DateTimeRange::new(feb, mar).unwrap();
    /// let merged = first.intersect(&second);
    ///
    /// assert_eq!(merged.start(), jan);
    /// assert_eq!(merged.end(), mar);
    /// ```
    pub fn intersect(&self, other: &Self) -> Self {
        let start = if self.start <= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end >= other.end {
            self.end
        } else {
            other.end
        };
        // Earliest start, latest end: the invariant holds by selection.
        Self { start, end }
    }

    /// Whether `instant` lies inside the range.
    ///
    /// The two flags select which endpoints count as inside:
    ///
    /// | `exclude_start` | `exclude_end` | predicate |
    /// |---|---|---|
    /// | `false` | `false` | `start <= instant <= end` |
    /// | `true` | `false` | `start < instant <= end` |
    /// | `false` | `true` | `start <= instant < end` |
    /// | `true` | `true` | `start < instant < end` |
    pub fn contains(&self, instant: T, exclude_start: bool, exclude_end: bool) -> bool {
        match (exclude_start, exclude_end) {
            (true, true) => instant > self.start && instant < self.end,
            (true, false) => instant > self.start && instant <= self.end,
            (false, true) => instant >= self.start && instant < self.end,
            (false, false) => instant >= self.start && instant <= self.end,
        }
    }

    /// Enumerates the range in fixed steps of `step`.
    ///
    /// The sequence is lazy and restartable. The cursor starts at the range
    /// start (advanced once first if `exclude_start`); each pull emits the
    /// cursor and then advances it, and the advanced cursor is tested against
    /// the range end (`<` when `exclude_end`, `<=` otherwise). At least one
    /// instant is always emitted.
    ///
    /// `step` must be positive: this is a precondition, not validated. A zero
    /// or negative step never advances the cursor past the end, so iteration
    /// does not terminate.
    pub fn enumerate_step(
        &self,
        step: T::Duration,
        exclude_start: bool,
        exclude_end: bool,
    ) -> DurationSteps<T> {
        DurationSteps::new(self, step, exclude_start, exclude_end)
    }
}

impl<T: CalendarInstant> DateTimeRange<T> {
    /// Enumerates the range in steps of one [`DateSpan`] unit.
    ///
    /// Constant-length units ([`Millisecond`](DateSpan::Millisecond) through
    /// [`Week`](DateSpan::Week)) step by their fixed duration, with the same
    /// contract as [`enumerate_step`](Self::enumerate_step).
    /// [`Month`](DateSpan::Month) and [`Year`](DateSpan::Year) advance
    /// calendar-aware — the day-of-month is clamped to the target month where
    /// needed, and the continuation test compares only the `(year, month)`
    /// (respectively `year`) components against the range end.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use datetime_range::{DateSpan, DateTimeRange};
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let range = DateTimeRange::new(start, end).unwrap();
    ///
    /// let months: Vec<_> = range.enumerate(DateSpan::Month, false, false).collect();
    /// assert_eq!(months.len(), 3);
    /// ```
    pub fn enumerate(
        &self,
        span: DateSpan,
        exclude_start: bool,
        exclude_end: bool,
    ) -> SpanSteps<T> {
        SpanSteps::new(self, span, exclude_start, exclude_end)
    }
}

impl<T: RangeInstant + Default> Default for DateTimeRange<T> {
    /// The degenerate range whose start and end both sit at `T`'s default
    /// instant (the Unix epoch for the chrono types).
    fn default() -> Self {
        Self {
            start: T::default(),
            end: T::default(),
        }
    }
}

impl<T: RangeInstant + fmt::Display> fmt::Display for DateTimeRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

// Serde support. Deserialization funnels through `new` so a decoded range
// upholds the same invariant as a constructed one.
#[cfg(feature = "serde")]
impl<T> Serialize for DateTimeRange<T>
where
    T: RangeInstant + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateTimeRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for DateTimeRange<T>
where
    T: RangeInstant + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        DateTimeRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
