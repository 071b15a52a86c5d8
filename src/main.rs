//! Docsite - configuration toolkit for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod sidebar;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Check { args } => cli::check::check_site(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
