//! Strata CLI - sitemap-driven static site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Sitemap-driven static site generator")]
#[command(version)]
pub struct Cli {
    /// Path to the strata.toml config file
    #[arg(default_value = "strata.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    commands::build::run(&cli.config)
}
