//! Project status and its derivation from plan progress.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DeployPlan;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Project exists but planning has not started
    Draft,

    /// Plan generation has been requested
    #[default]
    Planning,

    /// A plan exists and at least one step is still open
    InProgress,

    /// Every step of the plan is completed
    Completed,
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ProjectStatus::Draft),
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" | "inprogress" | "in_progress" => Ok(ProjectStatus::InProgress),
            "completed" | "done" => Ok(ProjectStatus::Completed),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl ProjectStatus {
    /// Serialized token, as stored in the project collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "Draft",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Derives the status of a project that has a plan.
///
/// A plan is [`ProjectStatus::Completed`] when every step is completed and
/// [`ProjectStatus::InProgress`] otherwise. Generated plans always carry at
/// least one step; an empty plan is reported as in progress.
pub fn derive_status(plan: &DeployPlan) -> ProjectStatus {
    if !plan.steps.is_empty() && plan.steps.iter().all(|step| step.is_completed) {
        ProjectStatus::Completed
    } else {
        ProjectStatus::InProgress
    }
}
