//! Pure conversion functions between command-line text and library types.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};

use dateonly_calendar::Date;

use crate::config::{InputConfig, OutputConfig};

/// Serialized forms accepted by `encode` and `decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Text,
    Json,
    /// Binary payload, written as lowercase hex.
    Binary,
}

/// Parses an encoding name string into the corresponding enum variant.
pub fn parse_encoding(s: &str) -> Result<Encoding> {
    match s.to_lowercase().as_str() {
        "text" => Ok(Encoding::Text),
        "json" => Ok(Encoding::Json),
        "binary" | "hex" => Ok(Encoding::Binary),
        other => bail!("unknown encoding: {other:?}"),
    }
}

/// Resolves `--as`, falling back to `[output].encoding`.
pub fn resolve_encoding(flag: Option<&str>, output: &OutputConfig) -> Result<Encoding> {
    parse_encoding(flag.unwrap_or(&output.encoding))
}

/// Parses a `<DATE>` argument with the configured input layout.
pub fn parse_date(arg: &str, input: &InputConfig) -> Result<Date> {
    Date::parse(&input.layout, arg)
        .with_context(|| format!("invalid date argument {arg:?}"))
}

/// Renders a date with the configured output layout.
pub fn render_date(date: Date, output: &OutputConfig) -> Result<String> {
    date.format(&output.layout)
        .context("invalid [output].layout in config")
}

/// Parses an RFC 3339 instant, keeping its offset.
pub fn parse_instant(arg: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(arg)
        .with_context(|| format!("invalid RFC 3339 instant {arg:?}"))
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decodes hex text; whitespace between bytes is ignored.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.is_ascii() {
        bail!("hex input contains non-ASCII characters");
    }
    if digits.len() % 2 != 0 {
        bail!("hex input has an odd number of digits ({})", digits.len());
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?}", &digits[i..i + 2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encoding() {
        assert_eq!(parse_encoding("text").unwrap(), Encoding::Text);
        assert_eq!(parse_encoding("JSON").unwrap(), Encoding::Json);
        assert_eq!(parse_encoding("binary").unwrap(), Encoding::Binary);
        assert_eq!(parse_encoding("hex").unwrap(), Encoding::Binary);
        assert!(parse_encoding("xml").is_err());
    }

    #[test]
    fn test_resolve_encoding_prefers_flag() {
        let output = OutputConfig {
            encoding: "json".to_string(),
            ..OutputConfig::default()
        };
        assert_eq!(resolve_encoding(None, &output).unwrap(), Encoding::Json);
        assert_eq!(
            resolve_encoding(Some("binary"), &output).unwrap(),
            Encoding::Binary
        );
    }

    #[test]
    fn test_parse_date_uses_input_layout() {
        let input = InputConfig {
            layout: "%d.%m.%Y".to_string(),
        };
        assert_eq!(parse_date("29.02.2024", &input).unwrap(), Date::new(2024, 2, 29));
        let err = parse_date("2024-02-29", &input).unwrap_err();
        assert!(format!("{err:#}").contains("invalid date argument"));
    }

    #[test]
    fn test_render_date_uses_output_layout() {
        let output = OutputConfig {
            layout: "%Y/%j".to_string(),
            ..OutputConfig::default()
        };
        assert_eq!(render_date(Date::new(2000, 12, 31), &output).unwrap(), "2000/366");
    }

    #[test]
    fn test_parse_instant_keeps_offset() {
        let instant = parse_instant("2000-01-01T00:30:00+01:00").unwrap();
        assert_eq!(instant.offset().local_minus_utc(), 3600);
        assert!(parse_instant("2000-01-01").is_err());
    }

    #[test]
    fn test_hex() {
        let bytes = Date::new(2000, 1, 1).marshal_binary();
        let hex = to_hex(&bytes);
        assert_eq!(hex, "010000000eafff3a8000000000ffff");
        assert_eq!(from_hex(&hex).unwrap(), bytes);
        assert_eq!(from_hex("01 ff\n0A").unwrap(), [1, 255, 10]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(from_hex("abc").is_err());
        assert!(from_hex("zz").is_err());
        assert!(from_hex("é0").is_err());
    }
}
