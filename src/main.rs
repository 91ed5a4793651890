#[macro_use]
extern crate failure;

#[macro_use]
extern crate log;

use crate::config::ScenarioConfig;
use clap::Parser;
use colored::Colorize;
use env_logger::Builder;
use failure::Error;
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod report;
mod taps;

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Scenario JSON file, `config.json` is used when present.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[clap(long)]
    json: bool,

    /// Log every bottle as it is filled.
    #[clap(long)]
    debug: bool,
}

fn init_logger(level: LevelFilter) {
    Builder::new()
        .filter(None, LevelFilter::Warn)
        .filter(Some("tap_queue"), level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn load_scenario(path: Option<&Path>) -> Result<ScenarioConfig, Error> {
    match path {
        Some(path) => config::get_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => config::get_config(DEFAULT_CONFIG),
        None => Ok(ScenarioConfig::default()),
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let scenario = load_scenario(args.config.as_deref())?;

    debug!("running scenario {:?}", scenario);

    let report = report::run_scenario(&scenario);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.outcomes.iter().for_each(|outcome| outcome.print());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    if let Err(error) = run(&args) {
        eprintln!("{} {}", "Error:".red().bold(), error);
        process::exit(1);
    }
}
