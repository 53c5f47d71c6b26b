//! Baranada docs CLI - site definition tooling.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "baranada-docs")]
#[command(about = "Site definition tooling for the Baranada documentation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter site file
    Init {
        /// Overwrite an existing site file
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the site file
    Check,

    /// Resolve the site definition and print it as JSON
    Print {
        /// Assemble for production regardless of BARANADA_ENV
        #[arg(long)]
        production: bool,
    },
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

    // Execute command
    match cli.command {
        Commands::Init { yes } => commands::init::run(&cli.config, yes),
        Commands::Check => commands::check::run(&cli.config),
        Commands::Print { production } => commands::print::run(&cli.config, production),
    }
}
