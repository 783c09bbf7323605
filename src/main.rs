//! docsite - typed site descriptor for static documentation sites.

mod cli;
mod config;
mod core;
mod embed;
mod logger;
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
    logger::set_verbose(cli.verbose);

    // Init runs before any config exists
    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&cli, name.as_deref(), *dry),
        Commands::Export { args } => cli::export::export_site(&SiteConfig::load(&cli)?, args),
        Commands::Validate { .. } => cli::validate::validate_site(&SiteConfig::load(&cli)?),
        Commands::Resolve { path, json } => {
            cli::resolve::resolve_page(&SiteConfig::load(&cli)?, path, *json)
        }
    }
}
