mod arith_cmd;
mod cli;
mod codec_cmd;
mod config;
mod convert;
mod inspect_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Today => inspect_cmd::today(&config),
        Command::Info(args) => inspect_cmd::info(args, &config),
        Command::Add(args) => arith_cmd::add(args, &config),
        Command::Sub(args) => arith_cmd::sub(args, &config),
        Command::Format(args) => codec_cmd::format(args, &config),
        Command::Parse(args) => codec_cmd::parse(args, &config),
        Command::Encode(args) => codec_cmd::encode(args, &config),
        Command::Decode(args) => codec_cmd::decode(args, &config),
    }
}
