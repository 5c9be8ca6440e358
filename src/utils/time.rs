use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

/// Returns the half-open `[start, end)` UTC window of the calendar day that
/// contains `on`, with day boundaries taken in `on`'s own offset.
pub fn calendar_day_bounds(on: DateTime<FixedOffset>) -> (DateTime<Utc>, DateTime<Utc>) {
    let since_midnight = Duration::seconds(i64::from(on.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(on.nanosecond()));

    let start = on - since_midnight;
    let end = start + Duration::days(1);

    (start.with_timezone(&Utc), end.with_timezone(&Utc))
}

/// Zero-based row offset for a 1-based page. Page 0 reads as page 1.
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.max(1) - 1) * u64::from(page_size)
}
