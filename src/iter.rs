// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lazy enumeration of the instants inside a range.
//!
//! Both iterator kinds reproduce the same emit-then-test loop: each pull
//! yields the cursor, advances it, and the *advanced* cursor decides whether
//! iteration continues. The first instant is therefore always yielded, even
//! for a zero-width range. Iterators hold no shared state: re-invoking the
//! producing method on the same range yields an identical sequence, and
//! abandoning iteration early is always safe.

use crate::instant::{CalendarInstant, RangeInstant};
use crate::range::DateTimeRange;
use crate::span::DateSpan;
use std::iter::FusedIterator;

// ═══════════════════════════════════════════════════════════════════════════
// Fixed-duration stepping
// ═══════════════════════════════════════════════════════════════════════════

/// Iterator over a range in fixed-duration steps.
///
/// Produced by [`DateTimeRange::enumerate_step`]. The continuation test
/// compares the advanced cursor against the range end with `<` when the end
/// is excluded, `<=` otherwise.
#[derive(Clone)]
pub struct DurationSteps<T: RangeInstant> {
    cursor: T,
    end: T,
    step: T::Duration,
    exclude_end: bool,
    done: bool,
}

impl<T: RangeInstant> DurationSteps<T> {
    pub(crate) fn new(
        range: &DateTimeRange<T>,
        step: T::Duration,
        exclude_start: bool,
        exclude_end: bool,
    ) -> Self {
        let mut cursor = range.start();
        if exclude_start {
            cursor = cursor.add_duration(step);
        }
        Self {
            cursor,
            end: range.end(),
            step,
            exclude_end,
            done: false,
        }
    }
}

impl<T: RangeInstant> Iterator for DurationSteps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = self.cursor;
        self.cursor = self.cursor.add_duration(self.step);
        let keep = if self.exclude_end {
            self.cursor < self.end
        } else {
            self.cursor <= self.end
        };
        if !keep {
            self.done = true;
        }
        Some(item)
    }
}

impl<T: RangeInstant> FusedIterator for DurationSteps<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar-unit stepping
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy)]
enum CalendarUnit {
    Months,
    Years,
}

/// Iterator over a range in whole calendar months or years.
///
/// The continuation test ignores the day-of-month: a `(year, month)` key —
/// `year * 100 + month` — of the advanced cursor is compared against the key
/// of the range end (bare `year` for yearly steps). A start day late in the
/// month can therefore yield a final instant later than the range end; that
/// is the documented contract of calendar stepping, not an off-by-one.
#[derive(Clone)]
pub struct CalendarSteps<T: CalendarInstant> {
    cursor: T,
    end_key: i64,
    unit: CalendarUnit,
    exclude_end: bool,
    done: bool,
}

impl<T: CalendarInstant> CalendarSteps<T> {
    pub(crate) fn months(range: &DateTimeRange<T>, exclude_start: bool, exclude_end: bool) -> Self {
        Self::with_unit(range, CalendarUnit::Months, exclude_start, exclude_end)
    }

    pub(crate) fn years(range: &DateTimeRange<T>, exclude_start: bool, exclude_end: bool) -> Self {
        Self::with_unit(range, CalendarUnit::Years, exclude_start, exclude_end)
    }

    fn with_unit(
        range: &DateTimeRange<T>,
        unit: CalendarUnit,
        exclude_start: bool,
        exclude_end: bool,
    ) -> Self {
        let mut cursor = range.start();
        if exclude_start {
            cursor = advance(unit, &cursor);
        }
        Self {
            cursor,
            end_key: key(unit, &range.end()),
            unit,
            exclude_end,
            done: false,
        }
    }
}

/// Numeric ordering key; `year * 100` keeps single-digit months ordered
/// correctly, unlike a digit-string concatenation.
fn key<T: CalendarInstant>(unit: CalendarUnit, instant: &T) -> i64 {
    match unit {
        CalendarUnit::Months => i64::from(instant.year()) * 100 + i64::from(instant.month()),
        CalendarUnit::Years => i64::from(instant.year()),
    }
}

fn advance<T: CalendarInstant>(unit: CalendarUnit, instant: &T) -> T {
    match unit {
        CalendarUnit::Months => instant.add_months(1),
        CalendarUnit::Years => instant.add_years(1),
    }
}

impl<T: CalendarInstant> Iterator for CalendarSteps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let item = self.cursor;
        self.cursor = advance(self.unit, &self.cursor);
        let cursor_key = key(self.unit, &self.cursor);
        let keep = if self.exclude_end {
            cursor_key < self.end_key
        } else {
            cursor_key <= self.end_key
        };
        if !keep {
            self.done = true;
        }
        Some(item)
    }
}

impl<T: CalendarInstant> FusedIterator for CalendarSteps<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// Unit dispatch
// ═══════════════════════════════════════════════════════════════════════════

/// Iterator over a range in [`DateSpan`] steps.
///
/// Produced by [`DateTimeRange::enumerate`]. Constant-length units step by
/// their fixed duration; `Month` and `Year` step calendar-aware.
#[derive(Clone)]
pub struct SpanSteps<T: CalendarInstant>(Inner<T>);

#[derive(Clone)]
enum Inner<T: CalendarInstant> {
    Fixed(DurationSteps<T>),
    Calendar(CalendarSteps<T>),
}

impl<T: CalendarInstant> SpanSteps<T> {
    pub(crate) fn new(
        range: &DateTimeRange<T>,
        span: DateSpan,
        exclude_start: bool,
        exclude_end: bool,
    ) -> Self {
        let inner = match span.fixed_step() {
            Some(step) => Inner::Fixed(DurationSteps::new(range, step, exclude_start, exclude_end)),
            None if span == DateSpan::Month => {
                Inner::Calendar(CalendarSteps::months(range, exclude_start, exclude_end))
            }
            None => Inner::Calendar(CalendarSteps::years(range, exclude_start, exclude_end)),
        };
        Self(inner)
    }
}

impl<T: CalendarInstant> Iterator for SpanSteps<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.0 {
            Inner::Fixed(steps) => steps.next(),
            Inner::Calendar(steps) => steps.next(),
        }
    }
}

impl<T: CalendarInstant> FusedIterator for SpanSteps<T> {}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
