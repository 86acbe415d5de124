// SPDX-License-Identifier: AGPL-3.0-or-later

//! Step units for range enumeration.

use chrono::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar or duration granularity used to advance the cursor during
/// [`DateTimeRange::enumerate`](crate::DateTimeRange::enumerate).
///
/// The first six units have a constant length and step by a fixed
/// [`chrono::Duration`]. `Month` and `Year` vary in length and advance
/// calendar-aware instead, clamping the day-of-month where needed.
///
/// | Unit | Advance |
/// |------|---------|
/// | `Millisecond` | fixed 1 ms |
/// | `Second` | fixed 1 s |
/// | `Minute` | fixed 1 min |
/// | `Hour` | fixed 1 h |
/// | `Day` | fixed 24 h |
/// | `Week` | fixed 7 days |
/// | `Month` | one calendar month (28–31 days) |
/// | `Year` | one calendar year (365–366 days) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateSpan {
    /// One millisecond.
    Millisecond,
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One day of exactly 24 hours.
    Day,
    /// One week of exactly 7 days.
    Week,
    /// One calendar month; length depends on month and year.
    Month,
    /// One calendar year; leap years have an additional day.
    Year,
}

impl DateSpan {
    /// The fixed step duration of constant-length units.
    ///
    /// Returns `None` for [`Month`](DateSpan::Month) and
    /// [`Year`](DateSpan::Year), which have no constant duration and advance
    /// via the calendar instead.
    pub fn fixed_step(self) -> Option<Duration> {
        match self {
            DateSpan::Millisecond => Some(Duration::milliseconds(1)),
            DateSpan::Second => Some(Duration::seconds(1)),
            DateSpan::Minute => Some(Duration::minutes(1)),
            DateSpan::Hour => Some(Duration::hours(1)),
            DateSpan::Day => Some(Duration::days(1)),
            DateSpan::Week => Some(Duration::days(7)),
            DateSpan::Month | DateSpan::Year => None,
        }
    }
}
