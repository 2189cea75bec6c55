//! Deployment plan generation.
//!
//! A [`PlanGenerator`] turns the descriptive fields of a project into a
//! [`DeployPlan`]. The production implementation is [`GeminiClient`], which
//! sends one prompt plus a JSON response schema to the Gemini
//! `generateContent` endpoint. Whatever comes back is treated as untrusted
//! and passed through [`normalize_plan`] before it reaches the caller.
//!
//! ```text
//! ProjectBrief ──▶ build_prompt ──▶ GeminiClient ──▶ RawPlan ──▶ normalize_plan ──▶ DeployPlan
//!                  response_schema ─┘
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{DeployPlan, DevOs, Project, ProjectType},
};

pub mod gemini;
pub mod normalize;
pub mod prompt;
pub mod schema;

pub use gemini::{GeminiClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use normalize::{normalize_plan, parse_raw_plan, RawPlan, RawStep};
pub use prompt::build_prompt;
pub use schema::response_schema;

/// The descriptive fields of a project sent to the generator.
#[derive(Debug, Clone, Copy)]
pub struct ProjectBrief<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub project_type: ProjectType,
    pub tech_stack: &'a [String],
    pub backend: Option<&'a str>,
    pub database: Option<&'a str>,
    pub hosting_target: &'a str,
    pub os: DevOs,
}

impl<'a> From<&'a Project> for ProjectBrief<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            name: &project.name,
            description: &project.description,
            project_type: project.project_type,
            tech_stack: &project.tech_stack,
            backend: project.backend.as_deref(),
            database: project.database.as_deref(),
            hosting_target: &project.hosting_target,
            os: project.os,
        }
    }
}

/// Produces deployment plans for project briefs.
///
/// Implementations perform a single request without retries. Every failure
/// is reported as `WizardError::PlanGenerationFailed`, and every returned
/// plan has at least one step, unique step IDs and no completed steps.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generates a plan for the given brief.
    async fn generate(&self, brief: &ProjectBrief<'_>) -> Result<DeployPlan>;
}
