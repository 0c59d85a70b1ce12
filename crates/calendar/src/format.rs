//! Layout-driven formatting and parsing, and the fixed `YYYY-MM-DD` text form.
//!
//! Layouts use `chrono`'s strftime syntax (`%Y-%m-%d`, `%A, %B %e`, ...).
//! A date is rendered as the instant of its UTC midnight, so time-of-day
//! specifiers print zeros and `%Z` prints `UTC`.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::format::{Item, ParseError, ParseResult, Parsed, StrftimeItems};

use crate::date::Date;
use crate::error::DateError;

/// Layout of the canonical text form, `YYYY-MM-DD`.
pub const DATE_ONLY: &str = "%Y-%m-%d";

impl Date {
    /// Renders the date with a strftime `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidLayout`] if `layout` contains an unknown
    /// specifier.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// let date = Date::new(2000, 1, 2);
    /// assert_eq!(date.format("%d.%m.%Y").unwrap(), "02.01.2000");
    /// ```
    pub fn format(self, layout: &str) -> Result<String, DateError> {
        let mut out = String::new();
        self.append_format(&mut out, layout)?;
        Ok(out)
    }

    /// Like [`Date::format`], but appends to a caller-owned buffer.
    ///
    /// On error `buf` is left as it was.
    pub fn append_format(self, buf: &mut String, layout: &str) -> Result<(), DateError> {
        let items = checked_layout(layout)?;
        let start = buf.len();
        if write!(buf, "{}", self.midnight_utc().format_with_items(items)).is_err() {
            buf.truncate(start);
            return Err(DateError::Format {
                layout: layout.to_string(),
            });
        }
        Ok(())
    }

    /// Parses `value` with a strftime `layout` and keeps only the day.
    ///
    /// Fields the layout leaves out take their first value: a missing month
    /// or day is 1 and a missing time of day is midnight, so `%Y-%m` reads
    /// `2000-03` as March 1. Time-of-day fields are accepted and discarded.
    /// When the layout carries an offset (`%z`, `%:z`, ...), the parsed
    /// instant is moved to UTC first, so `2000-01-01T23:00:00-05:00` is
    /// January 2 and `2000-01-02 +0500` is January 1.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if `value` does not match `layout`.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// assert_eq!(Date::parse("%Y-%m", "2000-03"), Ok(Date::new(2000, 3, 1)));
    /// ```
    pub fn parse(layout: &str, value: &str) -> Result<Self, DateError> {
        let fail = |e: ParseError| parse_error(value, layout, e);
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, value, StrftimeItems::new(layout)).map_err(fail)?;
        fill_missing_fields(&mut parsed).map_err(fail)?;

        let date = if parsed.offset().is_some() || parsed.timestamp().is_some() {
            parsed.to_datetime().map_err(fail)?.naive_utc().date()
        } else {
            parsed.to_naive_date().map_err(fail)?
        };
        Ok(Self::from(date))
    }

    /// Appends the `YYYY-MM-DD` form to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FormatRange`] for years outside 0..=9999.
    pub fn append_text(self, buf: &mut Vec<u8>) -> Result<(), DateError> {
        let year = self.year();
        if !(0..=9999).contains(&year) {
            return Err(DateError::FormatRange { year });
        }
        push_padded(buf, year as u32, 4);
        buf.push(b'-');
        push_padded(buf, u32::from(self.month()), 2);
        buf.push(b'-');
        push_padded(buf, u32::from(self.day()), 2);
        Ok(())
    }

    /// Returns the `YYYY-MM-DD` form as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FormatRange`] for years outside 0..=9999.
    pub fn marshal_text(self) -> Result<Vec<u8>, DateError> {
        let mut buf = Vec::with_capacity(DATE_ONLY_LEN);
        self.append_text(&mut buf)?;
        Ok(buf)
    }

    /// Replaces `self` with the date in `data`, which must be `YYYY-MM-DD`.
    ///
    /// On error `self` is left unchanged.
    pub fn unmarshal_text(&mut self, data: &[u8]) -> Result<(), DateError> {
        *self = parse_date_only(data)?;
        Ok(())
    }
}

/// Length of `YYYY-MM-DD`.
const DATE_ONLY_LEN: usize = 10;

/// Parses exactly `YYYY-MM-DD`: four-digit year, two-digit month and day.
pub(crate) fn parse_date_only(data: &[u8]) -> Result<Date, DateError> {
    let value = std::str::from_utf8(data)
        .map_err(|_| parse_error(&String::from_utf8_lossy(data), DATE_ONLY, "invalid UTF-8"))?;
    let shape_ok = data.len() == DATE_ONLY_LEN
        && data.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(parse_error(value, DATE_ONLY, "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, DATE_ONLY)
        .map(Date::from)
        .map_err(|e| parse_error(value, DATE_ONLY, e))
}

pub(crate) fn parse_error(value: &str, layout: &str, reason: impl fmt::Display) -> DateError {
    DateError::Parse {
        value: value.to_string(),
        layout: layout.to_string(),
        reason: reason.to_string(),
    }
}

/// Defaults the month and day to 1 and the time of day to midnight.
///
/// Dates given by ordinal, week or timestamp are left alone; filling in a
/// month there would conflict with the fields that were parsed.
fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
    let by_other_fields = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some()
        || parsed.timestamp().is_some();
    if !by_other_fields {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }
    if parsed.timestamp().is_none() {
        if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
            parsed.set_hour(0)?;
        }
        if parsed.minute().is_none() {
            parsed.set_minute(0)?;
        }
    }
    Ok(())
}

fn checked_layout(layout: &str) -> Result<StrftimeItems<'_>, DateError> {
    let items = StrftimeItems::new(layout);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::InvalidLayout {
            layout: layout.to_string(),
        });
    }
    Ok(items)
}

fn push_padded(buf: &mut Vec<u8>, value: u32, width: u32) {
    for exp in (0..width).rev() {
        buf.push(b'0' + (value / 10u32.pow(exp) % 10) as u8);
    }
}

/// `YYYY-MM-DD`. Years outside 0..=9999 get an explicit sign
/// (`-0044-03-15`, `+10000-01-01`). Meant for humans; use
/// [`Date::marshal_text`] for a stable form.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.deconstruct();
        if (0..=9999).contains(&year) {
            write!(f, "{year:04}-{month:02}-{day:02}")
        } else {
            write!(f, "{year:+05}-{month:02}-{day:02}")
        }
    }
}

/// Parses the `YYYY-MM-DD` form.
impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_only(s.as_bytes())
    }
}
