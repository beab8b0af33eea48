//! Utility date equations for the proleptic ISO 8601 calendar.
//!
//! All equations work on integers and are total over the `i32` year range.

// ==== Begin Date Equations ====

/// Days in a 400 year Gregorian cycle.
const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Day offset between 0000-03-01 and 1970-01-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

/// Mathematically determine whether a year is a leap year.
///
/// A year is a leap year when it is divisible by 4, except for century
/// years that are not divisible by 400.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns either 1 (true) or 0 (false)
#[inline]
pub(crate) const fn mathematical_in_leap_year(year: i32) -> i32 {
    is_leap_year(year) as i32
}

/// Mathematically determine the days in a year.
#[inline]
pub(crate) const fn mathematical_days_in_year(year: i32) -> i32 {
    365 + mathematical_in_leap_year(year)
}

/// Returns the number of days since 1970-01-01 for an ISO date.
///
/// NOTE: Month should be in a range of 1-12
pub(crate) fn iso_date_to_epoch_days(year: i32, month: u8, day: u8) -> i64 {
    // Shift to a computational year starting on March 1st so the leap
    // day is the last day of the year.
    let j = i64::from(month <= 2);
    let computational_year = i64::from(year) - j;
    let computational_month = i64::from(month) + 12 * j;

    let cycle = computational_year.div_euclid(400);
    let year_of_cycle = computational_year.rem_euclid(400);
    let day_of_year = (153 * (computational_month - 3) + 2) / 5 + i64::from(day) - 1;
    let day_of_cycle =
        year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;

    cycle * DAYS_IN_A_400Y_CYCLE + day_of_cycle - EPOCH_COMPUTATIONAL_RATA_DIE
}

// ==== End Date Equations ====

// ==== Begin Calendar Equations ====

/// `ISODaysInMonth ( year, month )`
///
/// Returns 0 for a month outside of 1..=12.
pub(crate) const fn iso_days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + mathematical_in_leap_year(year),
        _ => 0,
    }
}

/// `ToISODayOfYear ( year, month, day )`
pub(crate) fn iso_day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let days = iso_date_to_epoch_days(year, month, day) - iso_date_to_epoch_days(year, 1, 1);
    // The difference is bounded by the days in a year.
    (days + 1) as u16
}

/// `ToISODayOfWeek ( year, month, day )`
///
/// Monday is 1 and Sunday is 7.
pub(crate) fn iso_day_of_week(year: i32, month: u8, day: u8) -> u16 {
    // 1970-01-01 was a Thursday.
    ((iso_date_to_epoch_days(year, month, day) + 3).rem_euclid(7) + 1) as u16
}

/// Returns the number of ISO weeks in a week calendar year.
fn iso_weeks_in_year(year: i32) -> u16 {
    let jan_first = iso_day_of_week(year, 1, 1);
    if jan_first == 4 || (jan_first == 3 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

/// `ToISOWeekOfYear ( year, month, day )`
///
/// Returns the week number along with the week calendar year it belongs to.
pub(crate) fn iso_week_of_year(year: i32, month: u8, day: u8) -> (u16, i32) {
    let day_of_year = i32::from(iso_day_of_year(year, month, day));
    let day_of_week = i32::from(iso_day_of_week(year, month, day));
    let week = (day_of_year - day_of_week + 10).div_euclid(7);

    if week < 1 {
        let previous = year.saturating_sub(1);
        return (iso_weeks_in_year(previous), previous);
    }
    if week > i32::from(iso_weeks_in_year(year)) {
        return (1, year.saturating_add(1));
    }
    (week as u16, year)
}

// ==== End Calendar Equations ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days_alignment() {
        assert_eq!(iso_date_to_epoch_days(1970, 1, 1), 0);
        assert_eq!(iso_date_to_epoch_days(1969, 12, 31), -1);
        assert_eq!(iso_date_to_epoch_days(2000, 3, 1), 11_017);
        assert_eq!(iso_date_to_epoch_days(1, 1, 1), -719_162);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2001));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn days_in_month() {
        assert_eq!(iso_days_in_month(2001, 1), 31);
        assert_eq!(iso_days_in_month(2001, 2), 28);
        assert_eq!(iso_days_in_month(2000, 2), 29);
        assert_eq!(iso_days_in_month(1900, 2), 28);
        assert_eq!(iso_days_in_month(2001, 4), 30);
        assert_eq!(iso_days_in_month(2001, 13), 0);
        assert_eq!(iso_days_in_month(2001, 0), 0);
    }

    #[test]
    fn day_of_week_and_year() {
        // 2024-02-29 was a Thursday.
        assert_eq!(iso_day_of_week(2024, 2, 29), 4);
        // 2023-01-01 was a Sunday.
        assert_eq!(iso_day_of_week(2023, 1, 1), 7);
        assert_eq!(iso_day_of_year(2024, 12, 31), 366);
        assert_eq!(iso_day_of_year(2023, 12, 31), 365);
        assert_eq!(iso_day_of_year(2023, 3, 1), 60);
    }

    #[test]
    fn week_of_year_edges() {
        // 2021-01-03 belongs to week 53 of 2020.
        assert_eq!(iso_week_of_year(2021, 1, 3), (53, 2020));
        // 2019-12-30 belongs to week 1 of 2020.
        assert_eq!(iso_week_of_year(2019, 12, 30), (1, 2020));
        assert_eq!(iso_week_of_year(2024, 6, 15), (24, 2024));
    }
}
