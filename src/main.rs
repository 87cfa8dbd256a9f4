//! Sidra - configuration front-end for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check => cli::check::run_check(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
