//! Week index arithmetic.
//!
//! Weekly charts are released each Sunday, the first one on February 13th
//! 2005. Rather than carrying full dates around, a week is stored as an index
//! into that sequence: `[0] = 2005-02-13`, `[1] = 2005-02-20`, and so on. All
//! conversions run in UTC so daylight-saving shifts cannot skew the seven-day
//! spacing.

use chrono::{DateTime, Duration, NaiveDate};
use once_cell::sync::Lazy;
use playgraph_common::{PlayGraphError, Result, Timestamp, TimestampMs, WeekIndex};

/// Unix seconds of week index 0: Sunday 2005-02-13 00:00:00 UTC.
pub const EPOCH_UNIX_SECONDS: i64 = 1_108_252_800;

/// Seconds in a seven-day week.
pub const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Milliseconds in a seven-day week.
pub const MILLIS_PER_WEEK: i64 = SECONDS_PER_WEEK * 1000;

/// Weeks treated as one month when deriving shortcut ranges.
pub const MONTH_IN_WEEKS: i64 = 4;

/// Weeks treated as one year when deriving shortcut ranges.
pub const YEAR_IN_WEEKS: i64 = 52;

/// The instant of week index 0.
pub static EPOCH: Lazy<Timestamp> =
    Lazy::new(|| DateTime::from_timestamp(EPOCH_UNIX_SECONDS, 0).unwrap());

/// The calendar date of week index 0.
pub static EPOCH_DATE: Lazy<NaiveDate> = Lazy::new(|| EPOCH.date_naive());

/// Returns the UTC instant of the given week index.
///
/// Accepts any index, including negative ones, which land before the epoch.
pub fn date_of_week(week: WeekIndex) -> Timestamp {
    *EPOCH + Duration::weeks(week)
}

/// Returns the second-precision Unix timestamp of the given week index.
pub fn unix_seconds_of_week(week: WeekIndex) -> i64 {
    EPOCH_UNIX_SECONDS + week * SECONDS_PER_WEEK
}

/// Returns the millisecond Unix timestamp of the given week index.
///
/// This is the unit charting collaborators expect on their time axis.
pub fn timestamp_of_week(week: WeekIndex) -> TimestampMs {
    unix_seconds_of_week(week) * 1000
}

/// Returns the index of the week containing the given instant.
///
/// Instants before the epoch map to negative indices.
pub fn week_index_of(at: Timestamp) -> WeekIndex {
    (at.timestamp() - EPOCH_UNIX_SECONDS).div_euclid(SECONDS_PER_WEEK)
}

/// Returns the index of the week containing the given millisecond timestamp.
pub fn week_index_of_millis(timestamp_ms: TimestampMs) -> WeekIndex {
    (timestamp_ms - EPOCH_UNIX_SECONDS * 1000).div_euclid(MILLIS_PER_WEEK)
}

/// Returns the index of the first chart week starting on or after the given
/// date. Dates on or before the epoch map to index 0.
pub fn first_sunday_on_or_after(date: NaiveDate) -> WeekIndex {
    if date <= *EPOCH_DATE {
        return 0;
    }
    let days = (date - *EPOCH_DATE).num_days();
    days / 7 + if days % 7 == 0 { 0 } else { 1 }
}

/// Returns the index of the chart week containing the given date, i.e. the
/// last week starting on or before it.
pub fn first_sunday_on_or_before(date: NaiveDate) -> Result<WeekIndex> {
    if date < *EPOCH_DATE {
        return Err(PlayGraphError::invalid_range(format!(
            "no chart weeks before {}",
            *EPOCH_DATE
        )));
    }
    Ok((date - *EPOCH_DATE).num_days() / 7)
}

/// Returns the `(start, end)` week indices spanning a calendar year, clamped
/// at the epoch for the first chart year.
pub fn year_bounds(year: i32) -> Result<(WeekIndex, WeekIndex)> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| PlayGraphError::invalid_range(format!("year {} out of range", year)))?;
    let dec_last = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| PlayGraphError::invalid_range(format!("year {} out of range", year)))?;

    if dec_last < *EPOCH_DATE {
        return Err(PlayGraphError::invalid_range(format!(
            "year {} ends before the first chart week",
            year
        )));
    }

    let start = if jan_first <= *EPOCH_DATE {
        0
    } else {
        first_sunday_on_or_before(jan_first)?
    };
    Ok((start, first_sunday_on_or_after(dec_last)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_epoch_is_a_sunday() {
        assert_eq!(date_of_week(0).weekday(), Weekday::Sun);
        assert_eq!(*EPOCH_DATE, NaiveDate::from_ymd_opt(2005, 2, 13).unwrap());
        assert_eq!(date_of_week(0).timestamp(), EPOCH_UNIX_SECONDS);
    }

    #[test]
    fn test_week_spacing() {
        assert_eq!(
            timestamp_of_week(1) - timestamp_of_week(0),
            MILLIS_PER_WEEK
        );
        assert_eq!(
            date_of_week(1).date_naive(),
            NaiveDate::from_ymd_opt(2005, 2, 20).unwrap()
        );
        assert_eq!(unix_seconds_of_week(52) - unix_seconds_of_week(0), 52 * SECONDS_PER_WEEK);
    }

    #[test]
    fn test_round_trip() {
        for week in [0, 1, 2, 51, 52, 100, 520, 1000, 10_000] {
            assert_eq!(week_index_of(date_of_week(week)), week);
            assert_eq!(week_index_of_millis(timestamp_of_week(week)), week);
        }
    }

    #[test]
    fn test_negative_weeks() {
        assert_eq!(
            date_of_week(-1).date_naive(),
            NaiveDate::from_ymd_opt(2005, 2, 6).unwrap()
        );
        assert_eq!(week_index_of(date_of_week(-3)), -3);
        assert_eq!(timestamp_of_week(-1), (EPOCH_UNIX_SECONDS - SECONDS_PER_WEEK) * 1000);
    }

    #[test]
    fn test_week_index_of_mid_week_floors() {
        let mid_week = date_of_week(4) + Duration::days(3);
        assert_eq!(week_index_of(mid_week), 4);
    }

    #[test]
    fn test_first_sunday_on_or_after() {
        // The epoch itself and anything earlier maps to 0.
        assert_eq!(first_sunday_on_or_after(*EPOCH_DATE), 0);
        assert_eq!(
            first_sunday_on_or_after(NaiveDate::from_ymd_opt(2004, 6, 1).unwrap()),
            0
        );
        // An exact week boundary stays put, a day past it rounds up.
        assert_eq!(
            first_sunday_on_or_after(NaiveDate::from_ymd_opt(2005, 2, 20).unwrap()),
            1
        );
        assert_eq!(
            first_sunday_on_or_after(NaiveDate::from_ymd_opt(2005, 2, 21).unwrap()),
            2
        );
    }

    #[test]
    fn test_first_sunday_on_or_before() {
        assert_eq!(first_sunday_on_or_before(*EPOCH_DATE).unwrap(), 0);
        assert_eq!(
            first_sunday_on_or_before(NaiveDate::from_ymd_opt(2005, 2, 19).unwrap()).unwrap(),
            0
        );
        assert_eq!(
            first_sunday_on_or_before(NaiveDate::from_ymd_opt(2005, 2, 20).unwrap()).unwrap(),
            1
        );
        assert!(
            first_sunday_on_or_before(NaiveDate::from_ymd_opt(2005, 2, 12).unwrap()).is_err()
        );
    }

    #[test]
    fn test_year_bounds() {
        // The epoch year is clamped to start at 0.
        let (start, end) = year_bounds(2005).unwrap();
        assert_eq!(start, 0);
        assert_eq!(end, first_sunday_on_or_after(NaiveDate::from_ymd_opt(2005, 12, 31).unwrap()));

        let (start, end) = year_bounds(2006).unwrap();
        assert_eq!(
            start,
            first_sunday_on_or_before(NaiveDate::from_ymd_opt(2006, 1, 1).unwrap()).unwrap()
        );
        assert!(end > start);

        assert!(year_bounds(2004).is_err());
    }
}
