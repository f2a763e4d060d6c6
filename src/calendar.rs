//! Calendar-day and weekday arithmetic used by the pacing engine.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Which days of the calendar count toward a campaign's remaining window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayCount {
    /// Monday through Friday only.
    #[default]
    Weekdays,
    /// Every calendar day, weekends included.
    AllDays,
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the days in the inclusive range `[start, end]` that match `mode`.
/// Returns `0` when `start > end`. A same-day range counts as one day.
pub fn count_days(start: NaiveDate, end: NaiveDate, mode: DayCount) -> u32 {
    let mut count = 0;
    let mut cursor = start;
    while cursor <= end {
        if mode == DayCount::AllDays || is_weekday(cursor) {
            count += 1;
        }
        cursor = cursor + Days::new(1);
    }
    count
}

/// Counts Monday–Friday days in the inclusive range `[start, end]`.
pub fn count_weekdays(start: NaiveDate, end: NaiveDate) -> u32 {
    count_days(start, end, DayCount::Weekdays)
}

/// Returns the date of the `n`-th weekday strictly after `date`.
/// Leap years and month/year boundaries fall out of plain day stepping.
pub fn add_weekdays(date: NaiveDate, n: u32) -> NaiveDate {
    let mut cursor = date;
    let mut remaining = n;
    while remaining > 0 {
        cursor = cursor + Days::new(1);
        if is_weekday(cursor) {
            remaining -= 1;
        }
    }
    cursor
}

/// Returns the date of the `n`-th weekday strictly before `date`.
pub fn sub_weekdays(date: NaiveDate, n: u32) -> NaiveDate {
    let mut cursor = date;
    let mut remaining = n;
    while remaining > 0 {
        cursor = cursor - Days::new(1);
        if is_weekday(cursor) {
            remaining -= 1;
        }
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn inverted_range_counts_zero() {
        assert_eq!(count_weekdays(date(2025, 3, 10), date(2025, 3, 7)), 0);
    }

    #[test]
    fn same_day_weekday_counts_one() {
        // 2025-03-10 is a Monday.
        assert_eq!(count_weekdays(date(2025, 3, 10), date(2025, 3, 10)), 1);
    }

    #[test]
    fn same_day_weekend_counts_zero() {
        // 2025-03-08 is a Saturday.
        assert_eq!(count_weekdays(date(2025, 3, 8), date(2025, 3, 8)), 0);
    }

    #[test]
    fn full_week_counts_five() {
        assert_eq!(count_weekdays(date(2025, 3, 10), date(2025, 3, 16)), 5);
    }

    #[test]
    fn all_days_mode_counts_weekends() {
        assert_eq!(
            count_days(date(2025, 3, 10), date(2025, 3, 16), DayCount::AllDays),
            7
        );
    }

    #[test]
    fn count_after_add_weekdays_matches_n() {
        let start = date(2025, 3, 12);
        for n in 1..=20 {
            let end = add_weekdays(start, n);
            let next = start + Days::new(1);
            assert_eq!(count_weekdays(next, end), n, "n = {n}");
        }
    }

    #[test]
    fn add_and_sub_are_inverse_on_weekdays() {
        let start = date(2025, 3, 12); // Wednesday
        for n in 1..=15 {
            assert_eq!(sub_weekdays(add_weekdays(start, n), n), start);
        }
    }

    #[test]
    fn add_weekdays_crosses_leap_day() {
        // 2024-02-28 is a Wednesday; 2024 is a leap year.
        assert_eq!(add_weekdays(date(2024, 2, 28), 1), date(2024, 2, 29));
        assert_eq!(add_weekdays(date(2024, 2, 28), 2), date(2024, 3, 1));
    }

    #[test]
    fn add_weekdays_skips_weekends() {
        // 2025-03-14 is a Friday.
        assert_eq!(add_weekdays(date(2025, 3, 14), 1), date(2025, 3, 17));
    }

    #[test]
    fn add_weekdays_crosses_year_boundary() {
        // 2025-12-31 is a Wednesday.
        assert_eq!(add_weekdays(date(2025, 12, 31), 1), date(2026, 1, 1));
    }
}
