//! Day-number arithmetic for the proleptic Gregorian calendar.
//!
//! Days are counted from the Unix epoch (1970-01-01 = day 0). The
//! conversions follow Howard Hinnant's `days_from_civil` /
//! `civil_from_days` algorithms, which work in 400-year eras starting on
//! March 1 so that the leap day is always the last day of a shifted year.
//!
//! Ref: <http://howardhinnant.github.io/date_algorithms.html>

/// Days from 0000-03-01 (start of era 0) to 1970-01-01.
const DAYS_FROM_ERA_START_TO_UNIX_EPOCH: i64 = 719_468;

/// Days in one 400-year Gregorian cycle.
const DAYS_IN_ERA: i64 = 146_097;

/// Days from 0001-01-01 to 1970-01-01.
pub(crate) const DAYS_FROM_0001_01_01_TO_UNIX_EPOCH: i64 = 719_162;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the length of `month` (1..=12) in `year`.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Converts a `(year, month, day)` triple to days since the Unix epoch.
///
/// `month` must already be in 1..=12; `day` may be any value and is added
/// linearly, so `day = 0` is the last day of the previous month and
/// `day = 32` spills into the next one.
pub(crate) fn days_from_civil(year: i128, month: u8, day: i128) -> i128 {
    let month = i128::from(month);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * i128::from(DAYS_IN_ERA) + day_of_era - i128::from(DAYS_FROM_ERA_START_TO_UNIX_EPOCH)
}

/// Converts days since the Unix epoch back to `(year, month, day)`.
///
/// The caller guarantees `days` lies within the range of [`crate::Date`],
/// so the year always fits in an `i32`.
pub(crate) fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let days = days + DAYS_FROM_ERA_START_TO_UNIX_EPOCH;
    let era = days.div_euclid(DAYS_IN_ERA);
    let day_of_era = days - era * DAYS_IN_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / (DAYS_IN_ERA - 1))
            / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as u8, day as u8)
}

/// Returns the weekday of a Unix epoch day as an offset from Monday (0..=6).
///
/// 1970-01-01 was a Thursday.
pub(crate) fn weekday_from_days(days: i64) -> u8 {
    (days + 3).rem_euclid(7) as u8
}

/// Carries out-of-range `month` and `day` values into the neighbouring
/// months and years and returns the resulting Unix epoch day.
pub(crate) fn normalize(year: i128, month: i128, day: i128) -> i128 {
    let month0 = month - 1;
    let year = year + month0.div_euclid(12);
    let month = (month0.rem_euclid(12) + 1) as u8;
    days_from_civil(year, month, day)
}
