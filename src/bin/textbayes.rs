//! `textbayes` command line entry point.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use textbayes::cli::{TextBayesArgs, execute_command};

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = TextBayesArgs::parse();

    // TEXTBAYES_LOG, when set, refines the level chosen by -v/-q.
    Builder::new()
        .filter_level(level_for(args.verbosity()))
        .parse_env("TEXTBAYES_LOG")
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
