//! Puzzle epoch handling: calendar date plus 3-hour bucket.
//!
//! The day string (`YYYY-MM-DD-b`) is the seed root for city selection and
//! the key under which guesses are archived. A new puzzle opens every three
//! hours and at midnight.

use chrono::{Duration, Local, NaiveDateTime, Timelike};

use crate::constants::DAY_BUCKET_HOURS;

/// Day string for the given wall-clock time, optionally shifted by whole
/// days. The bucket always tracks the real clock; shifting only moves the
/// calendar date.
#[must_use]
pub fn day_string_at(now: NaiveDateTime, shift_days: i64) -> String {
    let date = (now + Duration::days(shift_days)).date();
    let bucket = now.hour() / DAY_BUCKET_HOURS;
    format!("{}-{bucket}", date.format("%Y-%m-%d"))
}

/// Day string for the current local time.
#[must_use]
pub fn current_day_string(shift_days: i64) -> String {
    day_string_at(Local::now().naive_local(), shift_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 4, 12)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn stable_within_a_bucket() {
        assert_eq!(day_string_at(at(6, 0), 0), day_string_at(at(8, 59), 0));
        assert_eq!(day_string_at(at(7, 30), 0), "2022-04-12-2");
    }

    #[test]
    fn changes_at_bucket_boundaries_and_midnight() {
        assert_eq!(day_string_at(at(0, 0), 0), "2022-04-12-0");
        assert_eq!(day_string_at(at(2, 59), 0), "2022-04-12-0");
        assert_eq!(day_string_at(at(3, 0), 0), "2022-04-12-1");
        assert_eq!(day_string_at(at(23, 59), 0), "2022-04-12-7");

        let next_midnight = NaiveDate::from_ymd_opt(2022, 4, 13)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(day_string_at(next_midnight, 0), "2022-04-13-0");
    }

    #[test]
    fn shift_moves_the_date_but_not_the_bucket() {
        assert_eq!(day_string_at(at(7, 30), 2), "2022-04-14-2");
        assert_eq!(day_string_at(at(22, 0), 1), "2022-04-13-7");
    }

    #[test]
    fn shift_crosses_month_boundaries() {
        let end_of_month = NaiveDate::from_ymd_opt(2022, 4, 30)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(day_string_at(end_of_month, 1), "2022-05-01-4");
    }
}
