//! Command dispatch for the Infodesk CLI.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use infodesk_core::{
    params::{LoadScript, PathQuery, ProviderLookup, ServiceLookup, UpdateServiceLocation},
    Directory, OperationStatus, UpdateResult,
};
use log::{error, info};

use crate::{args::Commands, menu::Menu, renderer::TerminalRenderer};

/// Runs commands against a directory and renders their results.
pub struct Cli {
    directory: Directory,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(directory: Directory, renderer: TerminalRenderer) -> Self {
        Self {
            directory,
            renderer,
        }
    }

    /// Executes one command.
    pub async fn handle(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Provider(args) => self.provider(&ProviderLookup::from(args)).await,
            Commands::Service(args) => self.service(&ServiceLookup::from(args)).await,
            Commands::Path(args) => self.path(&PathQuery::from(args)).await,
            Commands::UpdateService(args) => {
                self.update_service(&UpdateServiceLocation::from(args)).await
            }
            Commands::Load(args) => self.load(&LoadScript::from(args)).await,
        }
    }

    /// Runs the interactive menu until the user quits or input ends.
    ///
    /// A failed operation is reported and the menu continues.
    pub async fn run_menu<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<()> {
        let mut menu = Menu::new(input, output);
        while let Some(command) = menu.next_command()? {
            if let Err(e) = self.handle(command).await {
                error!("Operation failed: {e:#}");
                eprintln!("Error: {e:#}");
            }
        }
        info!("Menu closed");
        Ok(())
    }

    async fn provider(&self, params: &ProviderLookup) -> Result<()> {
        match self
            .directory
            .provider_info(params)
            .await
            .context("Failed to report provider")?
        {
            Some(provider) => self.renderer.render(&provider),
            None => self.renderer.render(&OperationStatus::not_found(format!(
                "No provider found with ID {}.",
                params.id
            ))),
        }
    }

    async fn service(&self, params: &ServiceLookup) -> Result<()> {
        match self
            .directory
            .service_info(params)
            .await
            .context("Failed to report service")?
        {
            Some(service) => self.renderer.render(&service),
            None => self.renderer.render(&OperationStatus::not_found(format!(
                "No service found named '{}'.",
                params.name
            ))),
        }
    }

    async fn path(&self, params: &PathQuery) -> Result<()> {
        let outcome = self
            .directory
            .shortest_path(params)
            .await
            .with_context(|| {
                format!(
                    "Failed to determine shortest path from {} to {}",
                    params.start, params.end
                )
            })?;
        self.renderer.render(&outcome)
    }

    async fn update_service(&self, params: &UpdateServiceLocation) -> Result<()> {
        let service = self
            .directory
            .update_service_location(params)
            .await
            .context("Failed to update service location")?;
        self.renderer.render(&UpdateResult::new(service))
    }

    async fn load(&self, params: &LoadScript) -> Result<()> {
        self.directory
            .load_script(params)
            .await
            .context("Failed to load SQL script")?;
        self.renderer.render(&OperationStatus::success(format!(
            "Loaded {}",
            params.path.display()
        )))
    }
}
