//! Parameter structures for Deploy Wizard operations
//!
//! These structures carry user input from an interface (the CLI today) into
//! the [`Wizard`](crate::Wizard) without framework-specific derives. The CLI
//! defines clap wrappers and converts them with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│     Wizard      │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WizardError},
    models::{DevOs, ProjectType},
};

/// Project identifier parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// Project ID
    pub id: String,
}

/// The new-project form.
///
/// `tech_stack` is the raw comma-separated input; use
/// [`NewProject::tech_stack_list`] for the cleaned sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name (required)
    pub name: String,
    /// What the project does
    #[serde(default)]
    pub description: String,
    /// Kind of software
    #[serde(default)]
    pub project_type: ProjectType,
    /// Comma-separated technologies, e.g. "React, Vite" (required)
    pub tech_stack: String,
    /// Backend or API technology
    #[serde(default)]
    pub backend: Option<String>,
    /// Database technology
    #[serde(default)]
    pub database: Option<String>,
    /// Deploy target (required)
    pub hosting_target: String,
    /// Developer's local OS
    #[serde(default)]
    pub os: DevOs,
}

impl NewProject {
    /// Splits the tech stack input on commas, trimming entries and dropping
    /// empty ones.
    ///
    /// ```rust
    /// use deploy_wizard_core::params::NewProject;
    ///
    /// let form = NewProject {
    ///     tech_stack: " React, ,Vite ,".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(form.tech_stack_list(), vec!["React", "Vite"]);
    /// ```
    pub fn tech_stack_list(&self) -> Vec<String> {
        self.tech_stack
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    /// Validates the required fields of the form.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Validation` naming the first missing field:
    /// `name`, `tech_stack` or `hosting_target`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WizardError::validation("name").with_reason("Project name is required"));
        }
        if self.tech_stack_list().is_empty() {
            return Err(WizardError::validation("tech_stack")
                .with_reason("At least one technology is required"));
        }
        if self.hosting_target.trim().is_empty() {
            return Err(WizardError::validation("hosting_target")
                .with_reason("Hosting target is required"));
        }
        Ok(())
    }
}

/// Toggle the completion of one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleStep {
    /// Project ID
    pub project_id: String,
    /// Step ID within the project's plan
    pub step_id: String,
}

/// Delete a project, requiring explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProject {
    /// Project ID
    pub id: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Trims optional free text, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}
