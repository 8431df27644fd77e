//! Homestead - a personal site server for blog, talks, gallery and feeds.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod generator;
mod logger;
mod markdown;
mod render;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use markdown::CmarkRenderer;
use site::Site;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    cli::serve::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    // Everything is loaded and rendered up front; serving never touches
    // the content files again.
    let renderer = CmarkRenderer::with_all_extensions();
    let site = Site::build(config, &renderer)?;

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve(site),
        Commands::Check { .. } => cli::check::run(&site),
    }
}
