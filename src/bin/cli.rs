// src/bin/cli.rs
use book_scrape::cli::{self, Command};
use color_eyre::eyre::{eyre, WrapErr};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args().map_err(|e| eyre!(e))? {
        Command::Help => {
            cli::print_help();
            Ok(())
        }
        Command::Scrape => {
            book_scrape::log::init().wrap_err("could not start debug log")?;
            let summary = cli::run();
            if summary.output.is_none() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
