use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::Record;
use crate::validation::format_date;

/// A birthday that falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The date to congratulate on. Weekend birthdays move to the next Monday.
    pub effective_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn formatted_date(&self) -> String {
        format_date(self.effective_date)
    }
}

/// Records whose next birthday is between `today` and `today + window_days`,
/// inclusive, in the order the records are given.
///
/// Inclusion is decided on the real birthday date; only the reported date is
/// moved off the weekend.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let next = next_occurrence(birthday, today);
            let days_until = (next - today).num_days();
            if !(0..=window_days).contains(&days_until) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                effective_date: shift_off_weekend(next),
            })
        })
        .collect()
}

/// The first anniversary of `birthday` on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// The anniversary of `birthday` in `year`. February 29 falls on March 1
/// in years without one.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birthday)
    })
}

/// Saturdays and Sundays move forward to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_occurrence_today_counts() {
        assert_eq!(next_occurrence(date(1990, 6, 10), date(2024, 6, 10)), date(2024, 6, 10));
    }

    #[test]
    fn next_occurrence_rolls_to_next_year_once_passed() {
        assert_eq!(next_occurrence(date(1990, 6, 9), date(2024, 6, 10)), date(2025, 6, 9));
    }

    #[test]
    fn leap_day_maps_to_march_first_in_common_years() {
        assert_eq!(anniversary_in(date(2000, 2, 29), 2025), date(2025, 3, 1));
        assert_eq!(anniversary_in(date(2000, 2, 29), 2028), date(2028, 2, 29));
    }

    #[test]
    fn leap_day_after_february_rolls_forward() {
        // 2024-03-01 is after Feb 29 2024, so the next one is 2025 (mapped to Mar 1).
        assert_eq!(next_occurrence(date(2000, 2, 29), date(2024, 3, 2)), date(2025, 3, 1));
    }

    #[test]
    fn weekend_dates_move_to_monday() {
        assert_eq!(shift_off_weekend(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(shift_off_weekend(date(2024, 6, 14)), date(2024, 6, 14));
    }
}
