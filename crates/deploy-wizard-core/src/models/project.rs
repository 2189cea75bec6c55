//! Project model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{derive_status, DeployPlan, DevOs, ProjectStatus, ProjectType};
use crate::error::{Result, WizardError};

/// A user's software project and, once generated, its deployment plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Project name
    pub name: String,

    /// Free-text description of what the project does
    #[serde(default)]
    pub description: String,

    /// Kind of software
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    /// Main technologies, trimmed and without empty entries
    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Backend or API technology
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,

    /// Database technology
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Where the project will be deployed (Vercel, AWS EC2, ...)
    pub hosting_target: String,

    /// Developer's local operating system
    pub os: DevOs,

    /// Creation time in epoch milliseconds
    pub created_at: i64,

    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,

    /// Generated deployment plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<DeployPlan>,
}

impl Project {
    /// Attaches a freshly generated plan and moves the project out of
    /// planning.
    pub fn attach_plan(&mut self, plan: DeployPlan) {
        self.status = derive_status(&plan);
        self.plan = Some(plan);
    }

    /// Toggles a step of the plan and recomputes the project status.
    ///
    /// Returns the new completion flag of the step.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::NoPlan` if the project has no plan and
    /// `WizardError::StepNotFound` if the step does not exist.
    pub fn toggle_step(&mut self, step_id: &str) -> Result<bool> {
        let plan = self
            .plan
            .as_mut()
            .ok_or_else(|| WizardError::NoPlan { id: self.id.clone() })?;
        let completed = plan.toggle_step(step_id)?;
        self.status = derive_status(plan);
        Ok(completed)
    }

    /// Completed and total step counts, zero without a plan.
    pub fn progress(&self) -> (usize, usize) {
        self.plan
            .as_ref()
            .map(|plan| (plan.completed_count(), plan.steps.len()))
            .unwrap_or((0, 0))
    }
}
