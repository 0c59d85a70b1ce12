//! Boundary between [`Date`] and full instants.
//!
//! A date stands for the instant of its UTC midnight whenever it meets a
//! `chrono::DateTime`: adding elapsed time, measuring elapsed time, or
//! ordering against an instant. The wall clock is read only by
//! [`Date::today`], [`since`] and [`until`].

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use tracing::debug;

use crate::civil::SECONDS_PER_DAY;
use crate::date::Date;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

impl Date {
    /// Returns the current calendar day of the local time zone.
    ///
    /// The day boundary is the local one: shortly after local midnight in
    /// UTC+2 this is already "tomorrow" in UTC terms. The stored value is
    /// the plain `(year, month, day)`, so at the instant boundary it stands
    /// for UTC midnight of the local day.
    pub fn today() -> Self {
        let now = Local::now();
        let date = Self::from(now.date_naive());
        debug!(%date, offset = %now.offset(), "observed local calendar day");
        date
    }

    /// Returns the `chrono` equivalent of this date.
    pub fn to_naive(self) -> NaiveDate {
        // Date::MIN..=Date::MAX is chrono's own range.
        NaiveDate::from_ymd_opt(self.year(), u32::from(self.month()), u32::from(self.day()))
            .expect("every Date is representable as a NaiveDate")
    }

    /// Returns the instant at which this day starts in UTC.
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.to_naive().and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns UTC midnight of this day plus `duration`.
    ///
    /// The result is an instant rather than a `Date`, since a fraction of a
    /// day is not a calendar day. It saturates at the range of
    /// `DateTime<Utc>`.
    pub fn add(self, duration: TimeDelta) -> DateTime<Utc> {
        self.midnight_utc()
            .checked_add_signed(duration)
            .unwrap_or(if duration < TimeDelta::zero() {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }

    /// Returns the time elapsed from `instant` to UTC midnight of this day.
    ///
    /// Saturates at [`TimeDelta::MIN`] / [`TimeDelta::MAX`]. To step back
    /// from the date by a duration use `date.add(-duration)`.
    pub fn sub<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> TimeDelta {
        saturating_delta(self.nanos_since(instant))
    }

    /// Reports whether UTC midnight of this day is before `instant`.
    pub fn before_instant<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> bool {
        self.nanos_since(instant) < 0
    }

    /// Reports whether UTC midnight of this day is after `instant`.
    pub fn after_instant<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> bool {
        self.nanos_since(instant) > 0
    }

    /// Seconds since 1970-01-01T00:00:00Z of UTC midnight of this day.
    pub fn unix(self) -> i64 {
        self.unix_days() * SECONDS_PER_DAY
    }

    /// Milliseconds since the Unix epoch of UTC midnight of this day.
    pub fn unix_milli(self) -> i64 {
        self.unix() * 1_000
    }

    /// Microseconds since the Unix epoch of UTC midnight of this day.
    pub fn unix_micro(self) -> i64 {
        self.unix() * 1_000_000
    }

    /// Nanoseconds since the Unix epoch of UTC midnight of this day.
    ///
    /// Returns `None` outside roughly 1677-09-21..=2262-04-11, where the
    /// count no longer fits in an `i64`.
    pub fn unix_nano(self) -> Option<i64> {
        self.unix().checked_mul(1_000_000_000)
    }

    fn nanos_since<Tz: TimeZone>(self, instant: &DateTime<Tz>) -> i128 {
        let seconds = i128::from(self.unix()) - i128::from(instant.timestamp());
        seconds * NANOS_PER_SECOND - i128::from(instant.timestamp_subsec_nanos())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.to_naive()
    }
}

/// Returns the current local calendar day. Shorthand for [`Date::today`].
pub fn today() -> Date {
    Date::today()
}

/// Returns the time elapsed from `instant` to the start of today.
///
/// Shorthand for `Date::today().sub(instant)`.
pub fn since<Tz: TimeZone>(instant: &DateTime<Tz>) -> TimeDelta {
    Date::today().sub(instant)
}

/// Returns the time from the start of today until `instant`.
///
/// Shorthand for `instant - Date::today().midnight_utc()`.
pub fn until<Tz: TimeZone>(instant: &DateTime<Tz>) -> TimeDelta {
    saturating_delta(-Date::today().nanos_since(instant))
}

fn saturating_delta(nanos: i128) -> TimeDelta {
    let seconds = nanos.div_euclid(NANOS_PER_SECOND);
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as u32;
    i64::try_from(seconds)
        .ok()
        .and_then(|s| TimeDelta::new(s, subsec))
        .unwrap_or(if nanos < 0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        })
}
