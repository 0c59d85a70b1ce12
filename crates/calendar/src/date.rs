//! Calendar date without time-of-day or offset.

use std::fmt;

use chrono::Weekday;

use crate::civil;

/// A day on the proleptic Gregorian calendar.
///
/// A `Date` always holds a valid calendar day. Constructors and arithmetic
/// never reject out-of-range fields: they carry them into the neighbouring
/// month or year, so `Date::new(2000, 13, 1)` is January 1, 2001 and
/// `Date::new(2000, 2, 30)` is March 1, 2000. Results beyond
/// [`Date::MIN`]..=[`Date::MAX`] saturate at those bounds.
///
/// The default value is [`Date::ZERO`] (January 1, year 1), which doubles
/// as the "unset" sentinel tested by [`Date::is_zero`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// The earliest representable date, matching `chrono::NaiveDate::MIN`.
    pub const MIN: Date = Date {
        year: -262_143,
        month: 1,
        day: 1,
    };

    /// The latest representable date, matching `chrono::NaiveDate::MAX`.
    pub const MAX: Date = Date {
        year: 262_142,
        month: 12,
        day: 31,
    };

    /// January 1 of year 1, the zero value.
    pub const ZERO: Date = Date {
        year: 1,
        month: 1,
        day: 1,
    };

    /// Creates a date from year, month and day.
    ///
    /// Fields outside their usual ranges are normalized by calendar carry:
    /// month 0 is December of the previous year, day 32 of January is
    /// February 1, and so on.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// assert_eq!(Date::new(2000, 1, 32), Date::new(2000, 2, 1));
    /// assert_eq!(Date::new(2000, 13, 1), Date::new(2001, 1, 1));
    /// ```
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self::from_unix_days(civil::normalize(
            i128::from(year),
            i128::from(month),
            i128::from(day),
        ))
    }

    /// Builds a date from days since 1970-01-01, saturating at the bounds.
    pub(crate) fn from_unix_days(days: i128) -> Self {
        let min = i128::from(Self::MIN.unix_days());
        let max = i128::from(Self::MAX.unix_days());
        let (year, month, day) = civil::civil_from_days(days.clamp(min, max) as i64);
        Self { year, month, day }
    }

    /// Days since 1970-01-01.
    pub(crate) fn unix_days(self) -> i64 {
        civil::days_from_civil(
            i128::from(self.year),
            self.month,
            i128::from(self.day),
        ) as i64
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` in one call.
    pub fn deconstruct(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        match civil::weekday_from_days(self.unix_days()) {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Returns the day of the year: 1..=365, or 1..=366 in leap years.
    pub fn year_day(self) -> u16 {
        let jan1 = civil::days_from_civil(i128::from(self.year), 1, 1) as i64;
        (self.unix_days() - jan1 + 1) as u16
    }

    /// Returns the ISO 8601 week-numbering year and week (1..=53).
    ///
    /// January 1 to 3 may belong to week 52 or 53 of the previous year, and
    /// December 29 to 31 may belong to week 1 of the next.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// assert_eq!(Date::new(2000, 1, 1).iso_week(), (1999, 52));
    /// assert_eq!(Date::new(2000, 1, 3).iso_week(), (2000, 1));
    /// ```
    pub fn iso_week(self) -> (i32, u8) {
        // The week belongs to the year its Thursday falls in.
        let days = self.unix_days();
        let thursday = days + 3 - i64::from(civil::weekday_from_days(days));
        let (year, _, _) = civil::civil_from_days(thursday);
        let jan1 = civil::days_from_civil(i128::from(year), 1, 1) as i64;
        (year, ((thursday - jan1) / 7 + 1) as u8)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        civil::days_in_month(self.year, self.month)
    }

    /// Reports whether this date's year is a leap year.
    pub fn in_leap_year(self) -> bool {
        civil::is_leap_year(self.year)
    }

    /// Reports whether this is the zero date, January 1 of year 1.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Adds years, months and days with calendar carry.
    ///
    /// This is `Date::new(year + years, month + months, day + days)`: the
    /// result is never clamped to the end of a month, so January 31 plus one
    /// month is March 2 in a leap year and March 3 otherwise.
    pub fn add_date(self, years: i64, months: i64, days: i64) -> Self {
        Self::from_unix_days(civil::normalize(
            i128::from(self.year) + i128::from(years),
            i128::from(self.month) + i128::from(months),
            i128::from(self.day) + i128::from(days),
        ))
    }

    /// Adds whole years; February 29 carries to March 1 in common years.
    pub fn add_years(self, years: i64) -> Self {
        self.add_date(years, 0, 0)
    }

    /// Adds whole months with calendar carry.
    pub fn add_months(self, months: i64) -> Self {
        self.add_date(0, months, 0)
    }

    /// Adds days.
    pub fn add_days(self, days: i64) -> Self {
        self.add_date(0, 0, days)
    }

    /// Reports whether `self` is strictly before `other`.
    pub fn before(self, other: Date) -> bool {
        self < other
    }

    /// Reports whether `self` is strictly after `other`.
    pub fn after(self, other: Date) -> bool {
        self > other
    }

    /// Reports whether `self` and `other` are the same day.
    pub fn equal(self, other: Date) -> bool {
        self == other
    }

    /// Returns -1 if `self` is before `other`, +1 if after, 0 if equal.
    pub fn compare(self, other: Date) -> i32 {
        self.cmp(&other) as i32
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Renders as the constructor call that rebuilds the value.
impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date::new({}, {}, {})", self.year, self.month, self.day)
    }
}
