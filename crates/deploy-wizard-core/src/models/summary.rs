//! Project summary types for list views.

use serde::{Deserialize, Serialize};

use super::{DevOs, Project, ProjectStatus, ProjectType};

/// Summary information about a project with step statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Project ID
    pub id: String,
    /// Project name
    pub name: String,
    /// Description, may be empty
    pub description: String,
    /// Kind of software
    pub project_type: ProjectType,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Deploy target
    pub hosting_target: String,
    /// Developer OS
    pub os: DevOs,
    /// Main technologies
    pub tech_stack: Vec<String>,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
    /// Total number of steps
    pub total_steps: usize,
    /// Number of completed steps
    pub completed_steps: usize,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        let (completed_steps, total_steps) = project.progress();

        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            project_type: project.project_type,
            status: project.status,
            hosting_target: project.hosting_target.clone(),
            os: project.os,
            tech_stack: project.tech_stack.clone(),
            created_at: project.created_at,
            total_steps,
            completed_steps,
        }
    }
}
