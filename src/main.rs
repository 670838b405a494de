//! section-import - theme section importer
//!
//! Copies a named section (template, script, stylesheet) from one project tree
//! into another and registers it in the target's aggregator files.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod hash;
mod installer;
mod operations;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import(args) => commands::import::run(args, cli.verbose, cli.quiet),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
