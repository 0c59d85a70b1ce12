use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use dateonly_calendar::Date;

use crate::cli::InfoArgs;
use crate::config::DateonlyConfig;
use crate::convert;

/// Everything `info` reports about a date.
#[derive(Debug, Serialize)]
struct DateInfo {
    date: String,
    year: i32,
    month: u8,
    day: u8,
    weekday: String,
    year_day: u16,
    iso_year: i32,
    iso_week: u8,
    days_in_month: u8,
    leap_year: bool,
    is_zero: bool,
    unix: i64,
    debug: String,
}

impl DateInfo {
    fn new(date: Date) -> Self {
        let (iso_year, iso_week) = date.iso_week();
        Self {
            date: date.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            weekday: date.weekday().to_string(),
            year_day: date.year_day(),
            iso_year,
            iso_week,
            days_in_month: date.days_in_month(),
            leap_year: date.in_leap_year(),
            is_zero: date.is_zero(),
            unix: date.unix(),
            debug: format!("{date:?}"),
        }
    }
}

/// Print today's local date.
pub fn today(config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("today").entered();
    let date = Date::today();
    info!(%date, "read local calendar day");
    println!("{}", convert::render_date(date, &config.output)?);
    Ok(())
}

/// Describe a date.
pub fn info(args: InfoArgs, config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("info", date = %args.date).entered();
    let date = convert::parse_date(&args.date, &config.input)?;
    let report = DateInfo::new(date);
    info!(?report, "described date");

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize date info")?;
        println!("{json}");
        return Ok(());
    }

    println!("date:          {}", report.date);
    println!("weekday:       {}", report.weekday);
    println!("day of year:   {}", report.year_day);
    println!("ISO week:      {}-W{:02}", report.iso_year, report.iso_week);
    println!("days in month: {}", report.days_in_month);
    println!("leap year:     {}", report.leap_year);
    println!("zero:          {}", report.is_zero);
    println!("unix:          {}", report.unix);
    println!("debug:         {}", report.debug);
    Ok(())
}
