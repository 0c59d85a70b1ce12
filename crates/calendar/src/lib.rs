//! # dateonly-calendar
//!
//! A calendar date without time-of-day or offset, on the proleptic
//! Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"Date::new() (carry)"| B["Date"]
//!     B -->|".add_date()"| B
//!     B -->|".add() / .sub()"| C["DateTime&lt;Utc&gt;"]
//!     D["&quot;YYYY-MM-DD&quot; / layout"] -->|"Date::parse()"| B
//!     B -->|".format() / Display"| D
//!     B -->|".marshal_json() / serde"| E["JSON"]
//!     B -->|".marshal_binary()"| F["15-byte instant"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use dateonly_calendar::Date;
//!
//! // Out-of-range fields carry instead of failing.
//! let date = Date::new(2000, 1, 31).add_months(1);
//! assert_eq!(date, Date::new(2000, 3, 2));
//!
//! assert_eq!(Date::new(2000, 1, 1).iso_week(), (1999, 52));
//! assert_eq!(date.to_string(), "2000-03-02");
//! assert_eq!(date.marshal_json().unwrap(), br#""2000-03-02""#);
//! assert!(Date::default().is_zero());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `civil` | Day-number arithmetic (days since 1970-01-01) |
//! | `date` | The `Date` type: construction, accessors, arithmetic, comparison |
//! | `instant` | UTC-midnight boundary with `chrono` instants and the wall clock |
//! | `format` | strftime layouts and the `YYYY-MM-DD` text form |
//! | `json` | JSON encoding and `serde` support |
//! | `binary` | Fixed-width binary encoding |
//! | `error` | Error types |

mod binary;
mod civil;
mod date;
mod error;
mod format;
mod instant;
mod json;

pub use chrono::{TimeDelta, Weekday};
pub use date::Date;
pub use error::{BinaryDecodeError, DateError};
pub use format::DATE_ONLY;
pub use instant::{since, today, until};
pub use json::nullable;
