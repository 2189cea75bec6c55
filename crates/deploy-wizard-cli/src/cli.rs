//! Command handlers for the Deploy Wizard CLI
//!
//! Each handler calls one [`Wizard`] operation and renders the outcome as
//! markdown through the [`TerminalRenderer`]. Errors are returned to
//! `main`, which reports wizard errors via [`Cli::report`] and everything
//! else through anyhow.

use anyhow::{Context, Result};
use deploy_wizard_core::{
    display::{CreateResult, DeleteResult, OperationStatus, ToggleResult},
    params::{DeleteProject, Id, NewProject, ToggleStep},
    Wizard, WizardError,
};
use log::debug;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Executes CLI commands against a wizard instance
pub struct Cli {
    wizard: Wizard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: Wizard, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    /// Dispatches a parsed command. No command shows the project list.
    pub async fn run(&self, command: Option<Commands>) -> Result<()> {
        match command {
            None | Some(Commands::List) => self.list_projects().await,
            Some(Commands::New(args)) => self.create_project(&args.into()).await,
            Some(Commands::Show(args)) => self.show_project(&args.into()).await,
            Some(Commands::Toggle(args)) => self.toggle_step(&args.into()).await,
            Some(Commands::Delete(args)) => self.delete_project(&args.into()).await,
        }
    }

    /// Renders a wizard error with its follow-up hint.
    pub fn report(&self, error: &WizardError) -> Result<()> {
        self.renderer.render(&OperationStatus::from(error).to_string())
    }

    async fn list_projects(&self) -> Result<()> {
        let summaries = self
            .wizard
            .list_summaries()
            .await
            .context("Failed to list projects")?;

        debug!("Listing {} projects", summaries.len());
        if summaries.is_empty() {
            self.renderer.render(&summaries.to_string())
        } else {
            self.renderer.render(&format!("# Projects\n\n{summaries}"))
        }
    }

    async fn create_project(&self, params: &NewProject) -> Result<()> {
        params.validate()?;

        self.renderer.render("*Generating deployment plan...*\n\n")?;
        let project = self.wizard.create_project(params).await?;

        self.renderer.render(&CreateResult::new(project).to_string())
    }

    /// Shows a project, falling back to the project list for unknown IDs.
    async fn show_project(&self, params: &Id) -> Result<()> {
        let project = self
            .wizard
            .get_project(params)
            .await
            .context("Failed to load project")?;

        match project {
            Some(project) => self.renderer.render(&project.to_string()),
            None => {
                let status = OperationStatus::failure(
                    WizardError::NotFound {
                        id: params.id.clone(),
                    }
                    .to_string(),
                )
                .with_hint("Showing all projects instead.");
                self.renderer.render(&format!("{status}\n"))?;
                self.list_projects().await
            }
        }
    }

    async fn toggle_step(&self, params: &ToggleStep) -> Result<()> {
        let project = self.wizard.toggle_step(params).await?;

        let result = ToggleResult {
            project: &project,
            step_id: &params.step_id,
        };
        self.renderer.render(&result.to_string())
    }

    async fn delete_project(&self, params: &DeleteProject) -> Result<()> {
        let status = match self.wizard.delete_project(params).await? {
            Some(project) => DeleteResult::new(project).to_string(),
            None => OperationStatus::success(format!(
                "No project with ID {} exists; nothing to delete",
                params.id
            ))
            .to_string(),
        };
        self.renderer.render(&status)
    }
}
