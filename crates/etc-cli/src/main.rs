//! ETC Dashboard - vehicle and toll tag administration
//!
//! Lists vehicles from the toll system API with client-side filtering,
//! sorting and paging, and carries the account sign-up/sign-in actions.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    etc_app::logging::init_logging(if cli.verbose { "debug" } else { "warn" });

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
