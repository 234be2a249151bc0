// Calendar helpers for display and statistics.
//
// The current date is always a parameter; nothing in this crate reads the
// clock. The app passes its own "today" across the boundary.

use chrono::{Datelike, NaiveDate};

/// French month names, indexed by `month0`.
const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Age in completed years, at death when a death date exists, otherwise at
/// `today`. `None` without a birth date.
pub fn calculate_age(
    birth_date: Option<NaiveDate>,
    death_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<i32> {
    let birth = birth_date?;
    let end = death_date.unwrap_or(today);

    let mut age = end.year() - birth.year();
    if (end.month(), end.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// "15 mai 2023", the fr-FR long date format the app renders everywhere.
pub fn format_date_fr(date: NaiveDate) -> String {
    let month = MONTHS_FR[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Next anniversary of `birth` on or after `today`. A Feb 29 birth date
/// observes Mar 1 in non-leap years, matching JS `Date` rollover.
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday_in_year(birth, today.year());
    if this_year < today {
        birthday_in_year(birth, today.year() + 1)
    } else {
        this_year
    }
}

/// Whole days from `today` to the next anniversary of `birth`; 0 on the day.
pub fn days_until_birthday(birth: NaiveDate, today: NaiveDate) -> i64 {
    next_birthday(birth, today).signed_duration_since(today).num_days()
}

fn birthday_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_completed_years() {
        let today = date(2023, 1, 1);
        assert_eq!(calculate_age(Some(date(1990, 1, 1)), None, today), Some(33));
        assert_eq!(calculate_age(Some(date(1990, 12, 31)), None, today), Some(32));
        assert_eq!(calculate_age(Some(date(1990, 3, 15)), None, date(2023, 3, 15)), Some(33));
        assert_eq!(calculate_age(Some(date(1990, 3, 15)), None, date(2023, 3, 14)), Some(32));
    }

    #[test]
    fn test_age_stops_at_death() {
        let today = date(2023, 6, 1);
        let age = calculate_age(Some(date(1900, 5, 2)), Some(date(1980, 5, 1)), today);
        assert_eq!(age, Some(79));
        let age = calculate_age(Some(date(1900, 5, 2)), Some(date(1980, 5, 2)), today);
        assert_eq!(age, Some(80));
    }

    #[test]
    fn test_age_requires_birth_date() {
        assert_eq!(calculate_age(None, None, date(2023, 1, 1)), None);
    }

    #[test]
    fn test_format_date_fr() {
        assert_eq!(format_date_fr(date(2023, 5, 15)), "15 mai 2023");
        assert_eq!(format_date_fr(date(1961, 8, 5)), "5 août 1961");
        assert_eq!(format_date_fr(date(2010, 12, 1)), "1 décembre 2010");
    }

    #[test]
    fn test_next_birthday_rolls_over_the_year() {
        let birth = date(1990, 3, 15);
        assert_eq!(next_birthday(birth, date(2023, 3, 15)), date(2023, 3, 15));
        assert_eq!(next_birthday(birth, date(2023, 3, 16)), date(2024, 3, 15));
        assert_eq!(next_birthday(birth, date(2023, 1, 1)), date(2023, 3, 15));
    }

    #[test]
    fn test_leap_day_birthday_observed_march_first() {
        let birth = date(1992, 2, 29);
        assert_eq!(next_birthday(birth, date(2023, 1, 15)), date(2023, 3, 1));
        assert_eq!(next_birthday(birth, date(2024, 1, 15)), date(2024, 2, 29));
    }

    #[test]
    fn test_days_until_birthday() {
        let birth = date(1990, 3, 15);
        assert_eq!(days_until_birthday(birth, date(2023, 3, 15)), 0);
        assert_eq!(days_until_birthday(birth, date(2023, 3, 1)), 14);
        assert_eq!(days_until_birthday(birth, date(2023, 3, 16)), 365);
    }
}
