use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::{AddArgs, SubArgs};
use crate::config::DateonlyConfig;
use crate::convert;

/// Add years, months and days to a date.
pub fn add(args: AddArgs, config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("add", date = %args.date).entered();
    let start = convert::parse_date(&args.date, &config.input)?;
    let end = start.add_date(args.years, args.months, args.days);
    info!(
        %start,
        %end,
        years = args.years,
        months = args.months,
        days = args.days,
        "added calendar offset"
    );
    println!("{}", convert::render_date(end, &config.output)?);
    Ok(())
}

/// Print the elapsed time from an instant to a date's UTC midnight, as an
/// ISO 8601 duration.
pub fn sub(args: SubArgs, config: &DateonlyConfig) -> Result<()> {
    let _span = info_span!("sub", date = %args.date, instant = %args.instant).entered();
    let date = convert::parse_date(&args.date, &config.input)?;
    let instant = convert::parse_instant(&args.instant)?;
    let elapsed = date.sub(&instant);
    info!(%date, seconds = elapsed.num_seconds(), "measured elapsed time");
    println!("{elapsed}");
    Ok(())
}
