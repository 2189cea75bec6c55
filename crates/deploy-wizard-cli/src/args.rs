//! Command-line argument definitions using clap
//!
//! The argument structs carry clap derives and convert into the
//! framework-free parameter types of `deploy_wizard_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Wizard
//! ```
//!
//! Help text, flags and value parsing stay here; field validation stays in
//! the core so every interface enforces the same rules.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use deploy_wizard_core::{
    models::{DevOs, ProjectType},
    params::{DeleteProject, Id, NewProject, ToggleStep},
};

/// Plan and track the deployment of your projects
///
/// Describe a project once and get a step-by-step deployment checklist
/// tailored to its stack, hosting target and your operating system. Tick
/// steps off as you go; progress is saved locally.
#[derive(Parser)]
#[command(version, about, name = "dw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/deploy-wizard/wizard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Gemini API key. Defaults to $GEMINI_API_KEY or $API_KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Gemini model used for plan generation
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Deploy Wizard CLI
///
/// Running `dw` without a command shows the project list.
#[derive(Subcommand)]
pub enum Commands {
    /// List all projects, newest first
    #[command(alias = "ls")]
    List,
    /// Describe a new project and generate its deployment plan
    #[command(alias = "n")]
    New(NewProjectArgs),
    /// Show a project with its deployment checklist
    #[command(alias = "s")]
    Show(ShowProjectArgs),
    /// Mark a step as done, or as not done if it already is
    #[command(alias = "t")]
    Toggle(ToggleStepArgs),
    /// Delete a project permanently
    #[command(alias = "rm")]
    Delete(DeleteProjectArgs),
}

/// Create a new project
///
/// The plan is generated immediately; nothing is saved if generation fails.
#[derive(ClapArgs)]
pub struct NewProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: String,
    /// What the project does
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Kind of software
    #[arg(long = "type", value_enum, default_value_t = ProjectTypeArg::WebApp)]
    pub project_type: ProjectTypeArg,
    /// Main technologies, comma-separated (e.g. "React, Vite")
    #[arg(long)]
    pub tech_stack: String,
    /// Backend or API technology
    #[arg(long)]
    pub backend: Option<String>,
    /// Database technology
    #[arg(long)]
    pub database: Option<String>,
    /// Where to deploy (e.g. Vercel, AWS EC2, Netlify)
    #[arg(long = "hosting")]
    pub hosting_target: String,
    /// Your local operating system
    #[arg(long, value_enum, default_value_t = DevOsArg::Windows)]
    pub os: DevOsArg,
}

impl From<NewProjectArgs> for NewProject {
    fn from(val: NewProjectArgs) -> Self {
        NewProject {
            name: val.name,
            description: val.description,
            project_type: val.project_type.into(),
            tech_stack: val.tech_stack,
            backend: val.backend,
            database: val.database,
            hosting_target: val.hosting_target,
            os: val.os.into(),
        }
    }
}

/// Show details of a project
#[derive(ClapArgs)]
pub struct ShowProjectArgs {
    /// ID of the project to display
    pub id: String,
}

impl From<ShowProjectArgs> for Id {
    fn from(val: ShowProjectArgs) -> Self {
        Id { id: val.id }
    }
}

/// Toggle the completion of a step
#[derive(ClapArgs)]
pub struct ToggleStepArgs {
    /// ID of the project
    pub project_id: String,
    /// ID of the step, as shown next to its title
    pub step_id: String,
}

impl From<ToggleStepArgs> for ToggleStep {
    fn from(val: ToggleStepArgs) -> Self {
        ToggleStep {
            project_id: val.project_id,
            step_id: val.step_id,
        }
    }
}

/// Delete a project permanently
#[derive(ClapArgs)]
pub struct DeleteProjectArgs {
    /// ID of the project to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteProjectArgs> for DeleteProject {
    fn from(val: DeleteProjectArgs) -> Self {
        DeleteProject {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Command-line representation of project types
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProjectTypeArg {
    WebApp,
    MobileApp,
    DesktopApp,
    LandingPage,
    #[value(alias = "api", alias = "backend")]
    ApiService,
    Game,
    Other,
}

impl From<ProjectTypeArg> for ProjectType {
    fn from(val: ProjectTypeArg) -> Self {
        match val {
            ProjectTypeArg::WebApp => ProjectType::WebApp,
            ProjectTypeArg::MobileApp => ProjectType::MobileApp,
            ProjectTypeArg::DesktopApp => ProjectType::DesktopApp,
            ProjectTypeArg::LandingPage => ProjectType::LandingPage,
            ProjectTypeArg::ApiService => ProjectType::ApiService,
            ProjectTypeArg::Game => ProjectType::Game,
            ProjectTypeArg::Other => ProjectType::Other,
        }
    }
}

/// Command-line representation of developer operating systems
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DevOsArg {
    Windows,
    #[value(name = "macos", alias = "mac", alias = "osx")]
    MacOs,
    Linux,
}

impl From<DevOsArg> for DevOs {
    fn from(val: DevOsArg) -> Self {
        match val {
            DevOsArg::Windows => DevOs::Windows,
            DevOsArg::MacOs => DevOs::MacOs,
            DevOsArg::Linux => DevOs::Linux,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_new_project_conversion() {
        let args = Args::parse_from([
            "dw",
            "new",
            "--name",
            "Blog",
            "--tech-stack",
            "React, Vite",
            "--hosting",
            "Vercel",
            "--type",
            "api",
            "--os",
            "mac",
        ]);
        let Some(Commands::New(new)) = args.command else {
            panic!("Expected the new command");
        };
        let params = NewProject::from(new);
        assert_eq!(params.name, "Blog");
        assert_eq!(params.tech_stack_list(), vec!["React", "Vite"]);
        assert_eq!(params.project_type, ProjectType::ApiService);
        assert_eq!(params.os, DevOs::MacOs);
        assert!(params.description.is_empty());
    }

    #[test]
    fn test_delete_defaults_to_unconfirmed() {
        let args = Args::parse_from(["dw", "delete", "abc"]);
        let Some(Commands::Delete(delete)) = args.command else {
            panic!("Expected the delete command");
        };
        assert!(!DeleteProject::from(delete).confirmed);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["dw", "list", "--no-color", "--model", "test-model"]);
        assert!(args.no_color);
        assert_eq!(args.model.as_deref(), Some("test-model"));
    }
}
