//! Deploy Wizard CLI Application
//!
//! Command-line interface for planning and tracking project deployments.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use deploy_wizard_core::{WizardBuilder, WizardError};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        model,
        command,
    } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_database_path(database_file)
        .with_api_key(api_key)
        .with_model(model)
        .build()
        .await
        .context("Failed to initialize wizard")?;

    let cli = Cli::new(wizard, TerminalRenderer::new(!no_color));

    info!("Deploy Wizard started");

    match cli.run(command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<WizardError>() {
            Some(wizard_error) => {
                cli.report(wizard_error)?;
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
