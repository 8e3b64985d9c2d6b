//! Month-granularity date arithmetic shared by the projection engines.

use chrono::{Datelike, Duration, NaiveDate};

/// Shifts a date by whole months, clamping the day to the target month's end.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let index = date.year() * 12 + date.month() as i32 - 1 + months;
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Whole months elapsed between two dates, truncating any partial month.
/// Negative when `to` precedes `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

/// Calendar month/year label, e.g. `"Mar 2027"`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 11, 15), 2), date(2026, 1, 15));
        assert_eq!(add_months(date(2025, 3, 15), -3), date(2024, 12, 15));
    }

    #[test]
    fn whole_months_truncate_partial_months() {
        assert_eq!(whole_months_between(date(2025, 1, 7), date(2025, 11, 7)), 10);
        assert_eq!(whole_months_between(date(2025, 1, 7), date(2025, 11, 20)), 10);
        assert_eq!(whole_months_between(date(2025, 1, 7), date(2025, 11, 1)), 9);
        assert_eq!(whole_months_between(date(2025, 6, 1), date(2025, 3, 1)), -3);
    }

    #[test]
    fn month_label_is_abbreviated() {
        assert_eq!(month_label(date(2027, 3, 9)), "Mar 2027");
    }
}
