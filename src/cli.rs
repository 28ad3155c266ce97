// src/cli.rs
use std::env;

use crate::{
    config::options::AppOptions,
    progress::StdoutProgress,
    runner::{self, RunSummary},
};

const HELP: &str = "\
Usage: cli [-h | --help]

Scrapes up to 4 catalogue pages / 49 books from books.toscrape.com
and writes books_data_limited_output.csv in the current directory.";

pub enum Command {
    Help,
    Scrape,
}

/// There are no options; anything but -h/--help is rejected.
pub fn parse_args() -> Result<Command, String> {
    let mut cmd = Command::Scrape;
    for a in env::args().skip(1) {
        match a.as_str() {
            "-h" | "--help" => cmd = Command::Help,
            _ => return Err(format!("Unknown arg: {a}")),
        }
    }
    Ok(cmd)
}

pub fn print_help() {
    eprintln!("{HELP}");
}

pub fn run() -> RunSummary {
    let opts = AppOptions::default();
    tracing::info!(?opts, "CLI: run");
    runner::run_default(&opts, &mut StdoutProgress)
}
