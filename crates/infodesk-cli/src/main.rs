//! Infodesk CLI Application
//!
//! Command-line interface for the hospital facility directory.

mod args;
mod cli;
mod menu;
mod renderer;

use std::{io, time::Duration};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use infodesk_core::DirectoryBuilder;
use log::info;
use renderer::{OutputFormat, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        busy_timeout,
        command,
    } = Args::parse();

    let directory = DirectoryBuilder::new()
        .with_database_path(database_file)
        .with_busy_timeout(Duration::from_secs(busy_timeout))
        .build()
        .await
        .context("Failed to open facility database")?;

    info!(
        "Infodesk started with database {}",
        directory.database_path().display()
    );

    let cli = Cli::new(directory, TerminalRenderer::new(OutputFormat::from_flags(no_color, json)));

    match command {
        Some(command) => cli.handle(command).await,
        None => cli.run_menu(io::stdin().lock(), io::stdout()).await,
    }
}
