// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Instagram media resolver CLI
#[derive(Parser, Debug)]
#[command(name = "instagram-media-cli")]
#[command(version)]
#[command(about = "Resolve Instagram post URLs to direct media links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a post page and print its media
    Resolve(commands::ResolveArgs),

    /// Run extraction over a saved HTML page
    Extract(commands::ExtractArgs),

    /// Check a URL without fetching it
    Validate(commands::ValidateArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => commands::resolve(args).await,
        Commands::Extract(args) => commands::extract(args).await,
        Commands::Validate(args) => commands::validate(args).await,
    }
}
