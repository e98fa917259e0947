mod agents;
mod cli;
mod error;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(agents::VERBOSE_ENV, "1");
        }
    }

    if let Err(e) = workflow::execute_patch(&cli.path, cli.dry_run) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
