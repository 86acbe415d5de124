use chrono::{TimeZone, Utc};
use datetime_range::{DateSpan, DateTimeRange};

fn main() {
    let start = Utc.with_ymd_and_hms(2024, 12, 15, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap();
    let range = DateTimeRange::new(start, end).expect("start precedes end");

    println!("range: {range}");
    println!("duration: {} days", range.duration().num_days());
    for month in range.enumerate(DateSpan::Month, false, false) {
        println!("  {month}");
    }
}
