use tracing_subscriber::EnvFilter;

/// Log targets of the binary and the calendar library.
const CRATE_TARGETS: &[&str] = &["dateonly", "dateonly_calendar"];

/// Maps a `-v` count to a filter level: none shows warnings only, then
/// info, debug and trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the default directive string, one `target=level` per crate.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr.
///
/// A set `RUST_LOG` replaces the directives derived from `-v`. Stdout is
/// left to command output, which scripts parse.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
