//! Error types for the dateonly-calendar crate.

/// Error type for all fallible operations on [`Date`](crate::Date).
///
/// Construction and arithmetic never fail (out-of-range fields carry into
/// the neighbouring month or year), so every variant here comes from a
/// text, JSON or binary boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when text does not match the layout it is parsed with.
    #[error("cannot parse {value:?} as {layout:?}: {reason}")]
    Parse {
        /// The input that failed to parse.
        value: String,
        /// The layout the input was parsed with.
        layout: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Returned when a JSON token is neither a string literal nor `null`.
    #[error("input is not a JSON string: {input}")]
    MalformedJson {
        /// The offending token, lossily decoded as UTF-8.
        input: String,
    },

    /// Returned when a binary payload cannot be decoded.
    #[error(transparent)]
    BinaryDecode(#[from] BinaryDecodeError),

    /// Returned when a date cannot be written as a four-digit-year text form.
    #[error("year {year} is outside the range 0..=9999 of the YYYY-MM-DD form")]
    FormatRange {
        /// The year that does not fit.
        year: i32,
    },

    /// Returned when a layout contains an unknown or malformed specifier.
    #[error("invalid layout: {layout:?}")]
    InvalidLayout {
        /// The rejected layout.
        layout: String,
    },

    /// Returned when a well-formed layout cannot be rendered for a date.
    #[error("cannot format date with layout {layout:?}")]
    Format {
        /// The layout that failed to render.
        layout: String,
    },
}

/// Reasons a binary payload is rejected by
/// [`Date::unmarshal_binary`](crate::Date::unmarshal_binary).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BinaryDecodeError {
    /// The payload holds no bytes at all.
    #[error("binary date: no data")]
    Empty,

    /// The leading version byte is not a known encoding.
    #[error("binary date: unsupported version {version}")]
    UnsupportedVersion {
        /// The version byte that was found.
        version: u8,
    },

    /// The payload length does not match its version.
    #[error("binary date: invalid length {actual} (version {version} expects {expected})")]
    InvalidLength {
        /// The version byte that was found.
        version: u8,
        /// Length required by that version.
        expected: usize,
        /// Length of the payload.
        actual: usize,
    },

    /// The encoded instant falls outside [`Date::MIN`](crate::Date::MIN)..=[`Date::MAX`](crate::Date::MAX).
    #[error("binary date: {seconds}s since 0001-01-01 is outside the supported range")]
    OutOfRange {
        /// Encoded seconds since `0001-01-01T00:00:00`, offset applied.
        seconds: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_parse() {
        let err = DateError::Parse {
            value: "ala ma kota".to_string(),
            layout: "%Y-%m-%d".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse \"ala ma kota\" as \"%Y-%m-%d\": input contains invalid characters"
        );
    }

    #[test]
    fn error_malformed_json() {
        let err = DateError::MalformedJson {
            input: "42".to_string(),
        };
        assert_eq!(err.to_string(), "input is not a JSON string: 42");
    }

    #[test]
    fn error_format_range() {
        let err = DateError::FormatRange { year: 10000 };
        assert_eq!(
            err.to_string(),
            "year 10000 is outside the range 0..=9999 of the YYYY-MM-DD form"
        );
    }

    #[test]
    fn error_binary_is_transparent() {
        let err: DateError = BinaryDecodeError::UnsupportedVersion { version: 9 }.into();
        assert_eq!(err.to_string(), "binary date: unsupported version 9");
        assert_eq!(
            err,
            DateError::BinaryDecode(BinaryDecodeError::UnsupportedVersion { version: 9 })
        );
    }

    #[test]
    fn error_binary_invalid_length() {
        let err = BinaryDecodeError::InvalidLength {
            version: 1,
            expected: 15,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "binary date: invalid length 3 (version 1 expects 15)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
        assert_impl::<BinaryDecodeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
