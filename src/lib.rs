// SPDX-License-Identifier: AGPL-3.0-or-later

//! Date/Time Interval Module
//!
//! This crate provides a validated interval over points in time and the
//! operations derived from it: intersection, membership testing with
//! configurable boundary inclusion, and lazy stepped enumeration — including
//! calendar-aware stepping for units whose length is not constant.
//!
//! # Core types
//!
//! - [`DateTimeRange<T>`] — validated interval over any [`RangeInstant`].
//! - [`RangeInstant`] — trait for points in time usable as range endpoints.
//! - [`CalendarInstant`] — extension trait for calendar-aware month/year
//!   stepping; implemented for the chrono types.
//! - [`DateSpan`] — closed set of step units for enumeration.
//! - [`UtcRange`] — type alias for `DateTimeRange<DateTime<Utc>>`.
//! - [`NaiveRange`] — type alias for `DateTimeRange<NaiveDateTime>`.
//! - [`InvalidRangeError`] — the only failure mode, raised at construction.
//!
//! # Step units
//!
//! [`DateTimeRange::enumerate`] steps by one [`DateSpan`] unit per pull:
//!
//! | Unit | Advance |
//! |------|---------|
//! | `Millisecond`..`Week` | fixed duration |
//! | `Month` | one calendar month, day-of-month clamped |
//! | `Year` | one calendar year, Feb 29 clamped |
//!
//! Enumeration always yields the cursor before testing the continuation
//! condition, so every sequence contains at least one instant. All operations
//! are pure and the types are immutable values; concurrent read-only use
//! needs no synchronisation.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use datetime_range::{DateSpan, DateTimeRange};
//!
//! let start = Utc.with_ymd_and_hms(2024, 12, 15, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap();
//! let range = DateTimeRange::new(start, end).unwrap();
//!
//! let months: Vec<_> = range.enumerate(DateSpan::Month, false, false).collect();
//! assert_eq!(months.len(), 3);
//! assert!(range.contains(months[1], true, true));
//! ```

mod error;
pub(crate) mod instant;
mod iter;
mod range;
mod span;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::InvalidRangeError;
pub use instant::{CalendarInstant, RangeInstant};
pub use iter::{CalendarSteps, DurationSteps, SpanSteps};
pub use range::{DateTimeRange, NaiveRange, UtcRange};
pub use span::DateSpan;
