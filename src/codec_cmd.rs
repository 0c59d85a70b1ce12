use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use dateonly_calendar::Date;

use crate::cli::{DecodeArgs, EncodeArgs, FormatArgs, ParseArgs};
use crate::config::DateonlyConfig;
use crate::convert::{self, Encoding};

/// Render a date with a layout given on the command line.
pub fn format(args: FormatArgs, config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("format", layout = %args.layout).entered();
    let date = convert::parse_date(&args.date, &config.input)?;
    let text = date
        .format(&args.layout)
        .with_context(|| format!("cannot format {date} as {:?}", args.layout))?;
    info!(%date, "formatted date");
    println!("{text}");
    Ok(())
}

/// Parse a value with a layout given on the command line.
pub fn parse(args: ParseArgs, config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("parse", layout = %args.layout).entered();
    let date = Date::parse(&args.layout, &args.value)?;
    info!(%date, "parsed date");
    println!("{}", convert::render_date(date, &config.output)?);
    Ok(())
}

pub fn encode(args: EncodeArgs, config: &DateonlyConfig) -> Result<()> {
    let encoding = convert::resolve_encoding(args.encoding.as_deref(), &config.output)?;
    let _span = info_span!("encode", ?encoding).entered();
    let date = convert::parse_date(&args.date, &config.input)?;
    let encoded = encode_date(date, encoding)?;
    info!(%date, len = encoded.len(), "encoded date");
    println!("{encoded}");
    Ok(())
}

pub fn decode(args: DecodeArgs, config: &DateonlyConfig) -> Result<()> {
    let encoding = convert::resolve_encoding(args.encoding.as_deref(), &config.output)?;
    let _span = info_span!("decode", ?encoding).entered();
    let date = decode_date(&args.data, encoding)?;
    info!(%date, "decoded date");
    println!("{}", convert::render_date(date, &config.output)?);
    Ok(())
}

fn encode_date(date: Date, encoding: Encoding) -> Result<String> {
    let encoded = match encoding {
        Encoding::Text => String::from_utf8(date.marshal_text()?)?,
        Encoding::Json => String::from_utf8(date.marshal_json()?)?,
        Encoding::Binary => convert::to_hex(&date.marshal_binary()),
    };
    Ok(encoded)
}

fn decode_date(data: &str, encoding: Encoding) -> Result<Date> {
    let data = data.trim();
    let mut date = Date::default();
    match encoding {
        Encoding::Text => date.unmarshal_text(data.as_bytes())?,
        Encoding::Json => {
            date.unmarshal_json(data.as_bytes())?;
            if data == "null" {
                debug!("JSON null leaves the zero date");
            }
        }
        Encoding::Binary => {
            let bytes = convert::from_hex(data).context("binary input must be hex")?;
            date.unmarshal_binary(&bytes)?;
        }
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_date() {
        let date = Date::new(2000, 1, 1);
        assert_eq!(encode_date(date, Encoding::Text).unwrap(), "2000-01-01");
        assert_eq!(encode_date(date, Encoding::Json).unwrap(), "\"2000-01-01\"");
        assert_eq!(
            encode_date(date, Encoding::Binary).unwrap(),
            "010000000eafff3a8000000000ffff"
        );
    }

    #[test]
    fn test_encode_out_of_range_year() {
        let err = encode_date(Date::new(10000, 1, 1), Encoding::Text).unwrap_err();
        assert!(err.to_string().contains("outside the range"), "{err}");
        assert!(encode_date(Date::new(10000, 1, 1), Encoding::Binary).is_ok());
    }

    #[test]
    fn test_decode_inverts_encode() {
        let date = Date::new(2024, 2, 29);
        for encoding in [Encoding::Text, Encoding::Json, Encoding::Binary] {
            let encoded = encode_date(date, encoding).unwrap();
            assert_eq!(decode_date(&encoded, encoding).unwrap(), date, "{encoding:?}");
        }
    }

    #[test]
    fn test_decode_json_null() {
        assert!(decode_date("null", Encoding::Json).unwrap().is_zero());
    }

    #[test]
    fn test_decode_errors() {
        assert!(decode_date("ala ma kota", Encoding::Text).is_err());
        assert!(decode_date("2000-01-01", Encoding::Json).is_err());
        let err = decode_date("0102", Encoding::Binary).unwrap_err();
        assert!(format!("{err:#}").contains("invalid length"), "{err:#}");
        let err = decode_date("xyz", Encoding::Binary).unwrap_err();
        assert!(format!("{err:#}").contains("must be hex"), "{err:#}");
    }
}
