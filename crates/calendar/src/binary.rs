//! Fixed-width binary encoding.
//!
//! A date is written as the instant of its UTC midnight in a fixed-width,
//! versioned instant layout:
//!
//! | Bytes | Content |
//! |-------|---------|
//! | 0     | version (`1`) |
//! | 1..9  | seconds since 0001-01-01T00:00:00Z, big-endian `i64` |
//! | 9..13 | nanoseconds, big-endian `i32` (always 0 when encoding) |
//! | 13..15| zone offset in minutes, big-endian `i16`; `-1` means UTC |
//!
//! Version 2 payloads append one byte of offset seconds and are accepted
//! when decoding.

use tracing::debug;

use crate::civil::{DAYS_FROM_0001_01_01_TO_UNIX_EPOCH, SECONDS_PER_DAY};
use crate::date::Date;
use crate::error::{BinaryDecodeError, DateError};

const VERSION_V1: u8 = 1;
const VERSION_V2: u8 = 2;
const LEN_V1: usize = 15;
const LEN_V2: usize = 16;

/// Offset field value marking a UTC instant.
const UTC_OFFSET_MINUTES: i16 = -1;

impl Date {
    /// Appends the binary encoding of this date to `buf`.
    ///
    /// ```
    /// use dateonly_calendar::Date;
    ///
    /// let mut buf = b"X".to_vec();
    /// Date::new(2000, 1, 1).append_binary(&mut buf);
    /// assert_eq!(buf, [88, 1, 0, 0, 0, 14, 175, 255, 58, 128, 0, 0, 0, 0, 255, 255]);
    /// ```
    pub fn append_binary(self, buf: &mut Vec<u8>) {
        let seconds = (self.unix_days() + DAYS_FROM_0001_01_01_TO_UNIX_EPOCH) * SECONDS_PER_DAY;
        buf.push(VERSION_V1);
        buf.extend_from_slice(&seconds.to_be_bytes());
        buf.extend_from_slice(&0i32.to_be_bytes());
        buf.extend_from_slice(&UTC_OFFSET_MINUTES.to_be_bytes());
    }

    /// Returns the binary encoding of this date.
    pub fn marshal_binary(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(LEN_V1);
        self.append_binary(&mut buf);
        buf
    }

    /// Decodes a binary payload.
    ///
    /// Payloads carrying a zone offset decode to the calendar day at that
    /// offset; sub-day parts are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::BinaryDecode`] if the payload is empty, has an
    /// unknown version or the wrong length, or lies outside
    /// [`Date::MIN`]..=[`Date::MAX`].
    pub fn from_binary(data: &[u8]) -> Result<Self, DateError> {
        let (&version, _) = data.split_first().ok_or(BinaryDecodeError::Empty)?;
        let expected = match version {
            VERSION_V1 => LEN_V1,
            VERSION_V2 => LEN_V2,
            _ => return Err(BinaryDecodeError::UnsupportedVersion { version }.into()),
        };
        if data.len() != expected {
            return Err(BinaryDecodeError::InvalidLength {
                version,
                expected,
                actual: data.len(),
            }
            .into());
        }

        let seconds = i64::from_be_bytes(be_bytes(data, 1));
        let offset_minutes = i16::from_be_bytes(be_bytes(data, 13));
        let extra = if version == VERSION_V2 { data[15] } else { 0 };
        // The UTC marker is the combined offset, so -1 minute plus extra
        // seconds is a real offset.
        let mut offset_seconds = i64::from(offset_minutes) * 60 + i64::from(extra);
        if offset_seconds == i64::from(UTC_OFFSET_MINUTES) * 60 {
            offset_seconds = 0;
        } else {
            debug!(offset_seconds, "binary date carries a zone offset");
        }

        let wall_seconds = i128::from(seconds) + i128::from(offset_seconds);
        let days = wall_seconds.div_euclid(i128::from(SECONDS_PER_DAY))
            - i128::from(DAYS_FROM_0001_01_01_TO_UNIX_EPOCH);
        let in_range = i128::from(Date::MIN.unix_days())..=i128::from(Date::MAX.unix_days());
        if !in_range.contains(&days) {
            return Err(BinaryDecodeError::OutOfRange { seconds }.into());
        }
        Ok(Date::from_unix_days(days))
    }

    /// Replaces `self` with the date decoded from `data`.
    ///
    /// On error `self` is left unchanged.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), DateError> {
        *self = Self::from_binary(data)?;
        Ok(())
    }
}

/// Copies `N` bytes starting at `at`; the caller has checked the length.
fn be_bytes<const N: usize>(data: &[u8], at: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&data[at..at + N]);
    out
}
