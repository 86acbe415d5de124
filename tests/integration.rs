use chrono::{Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use datetime_range::{DateSpan, DateTimeRange, InvalidRangeError, RangeInstant, UtcRange};

fn naive(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn constructor_forms_agree() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(100);

    let by_bounds = DateTimeRange::new(start, end).unwrap();
    let by_start = DateTimeRange::from_start_and_duration(start, Duration::days(100)).unwrap();
    let by_end = DateTimeRange::from_duration_and_end(Duration::days(100), end).unwrap();

    assert_eq!(by_bounds, by_start);
    assert_eq!(by_bounds, by_end);
    assert_eq!(by_bounds.duration(), Duration::days(100));
}

#[test]
fn invalid_construction_is_rejected() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(
        DateTimeRange::new(start, start - Duration::seconds(1)),
        Err(InvalidRangeError::StartAfterEnd)
    );
    assert_eq!(
        DateTimeRange::from_start_and_duration(start, Duration::seconds(-1)),
        Err(InvalidRangeError::NegativeDuration)
    );
    assert!(UtcRange::default().start() <= UtcRange::default().end());
}

#[test]
fn month_enumeration_crosses_year_boundary() {
    let range = DateTimeRange::new(naive(2024, 12, 15), naive(2025, 2, 15)).unwrap();
    let months: Vec<_> = range.enumerate(DateSpan::Month, false, false).collect();

    assert_eq!(
        months,
        vec![naive(2024, 12, 15), naive(2025, 1, 15), naive(2025, 2, 15)]
    );
}

#[test]
fn day_enumeration_matches_boundary_policy() {
    let range = DateTimeRange::new(naive(2024, 1, 1), naive(2024, 1, 3)).unwrap();

    let all: Vec<_> = range.enumerate(DateSpan::Day, false, false).collect();
    assert_eq!(all.len(), 3);

    let interior: Vec<_> = range.enumerate(DateSpan::Day, true, true).collect();
    assert_eq!(interior, vec![naive(2024, 1, 2)]);
}

#[test]
fn containment_and_in_range_agree() {
    let range = DateTimeRange::new(naive(2024, 1, 1), naive(2024, 1, 31)).unwrap();

    for day in range.enumerate(DateSpan::Day, false, false) {
        assert!(range.contains(day, false, false));
        assert!(day.in_range(&range));
    }
    assert!(!naive(2024, 2, 1).in_range(&range));
}

#[test]
fn intersect_spans_disjoint_ranges() {
    let first = DateTimeRange::new(naive(2024, 1, 1), naive(2024, 1, 10)).unwrap();
    let second = DateTimeRange::new(naive(2024, 3, 1), naive(2024, 3, 10)).unwrap();
    let merged = first.intersect(&second);

    assert_eq!(merged.start(), naive(2024, 1, 1));
    assert_eq!(merged.end(), naive(2024, 3, 10));
}

#[cfg(feature = "serde")]
#[test]
fn serde_range_uses_start_end_field_names() {
    let range = DateTimeRange::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    )
    .unwrap();

    let json = serde_json::to_string(&range).unwrap();
    assert!(json.contains("\"start\""));
    assert!(json.contains("\"end\""));

    let back: UtcRange = serde_json::from_str(&json).unwrap();
    assert_eq!(back, range);
}
