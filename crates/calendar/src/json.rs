//! JSON encoding and `serde` support.
//!
//! Dates are JSON strings in the `YYYY-MM-DD` form. [`Date::unmarshal_json`]
//! treats a literal `null` as "nothing to decode" and leaves the target as
//! it was, which lets a field already holding [`Date::ZERO`] stand for
//! "unset" without wrapping it in an `Option`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::date::Date;
use crate::error::DateError;
use crate::format::parse_date_only;

impl Date {
    /// Returns the date as a quoted JSON string, `"YYYY-MM-DD"`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::FormatRange`] for years outside 0..=9999.
    pub fn marshal_json(self) -> Result<Vec<u8>, DateError> {
        let mut buf = Vec::with_capacity(12);
        buf.push(b'"');
        self.append_text(&mut buf)?;
        buf.push(b'"');
        Ok(buf)
    }

    /// Replaces `self` with the date in a JSON token.
    ///
    /// The token `null` is a no-op. On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::MalformedJson`] if `data` is not a JSON string
    /// literal, and [`DateError::Parse`] if the string is not `YYYY-MM-DD`.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// let mut date = Date::new(2000, 1, 1);
    /// date.unmarshal_json(b"null").unwrap();
    /// assert_eq!(date, Date::new(2000, 1, 1));
    ///
    /// date.unmarshal_json(br#""2024-02-29""#).unwrap();
    /// assert_eq!(date, Date::new(2024, 2, 29));
    /// ```
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), DateError> {
        if data == b"null" {
            return Ok(());
        }
        // Escapes are not unescaped: no valid date needs them.
        let inner = data
            .strip_prefix(b"\"")
            .and_then(|rest| rest.strip_suffix(b"\""))
            .ok_or_else(|| DateError::MalformedJson {
                input: String::from_utf8_lossy(data).into_owned(),
            })?;
        *self = parse_date_only(inner)?;
        Ok(())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let year = self.year();
        if !(0..=9999).contains(&year) {
            return Err(ser::Error::custom(DateError::FormatRange { year }));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DateVisitor)
    }
}

struct DateVisitor;

impl de::Visitor<'_> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a date string in the YYYY-MM-DD form")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
        parse_date_only(value.as_bytes()).map_err(E::custom)
    }
}

/// (De)serialize a `Date` field where `null` means [`Date::ZERO`].
///
/// Use with `#[serde(with = "dateonly_calendar::nullable")]`. Serialization
/// is the plain string form; `Option<Date>` is the alternative when the
/// absence should stay visible in the type.
pub mod nullable {
    use std::fmt;

    use serde::{Deserializer, Serialize, Serializer, de};

    use super::DateVisitor;
    use crate::date::Date;

    struct NullableVisitor;

    impl<'de> de::Visitor<'de> for NullableVisitor {
        type Value = Date;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a date string in the YYYY-MM-DD form or null")
        }

        fn visit_some<D: Deserializer<'de>>(self, de: D) -> Result<Date, D::Error> {
            de.deserialize_str(DateVisitor)
        }

        fn visit_none<E: de::Error>(self) -> Result<Date, E> {
            Ok(Date::ZERO)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Date, E> {
            Ok(Date::ZERO)
        }
    }

    /// Serializes the date as its string form.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        date.serialize(serializer)
    }

    /// Deserializes a date string, or `null` as [`Date::ZERO`].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        deserializer.deserialize_option(NullableVisitor)
    }
}
