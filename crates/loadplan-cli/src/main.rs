//! Loadplan - truck capacity allocation planner
//!
//! A CLI tool that computes how many trucks a set of line items needs,
//! reports utilization, and suggests improvements for light loads.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
