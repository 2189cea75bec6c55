//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Project;

/// Result of creating a project: confirmation plus the full detail view.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self.resource.plan.as_ref().map_or(0, |plan| plan.steps.len());
        writeln!(
            f,
            "Created project with ID: {} ({steps} steps)",
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Result of toggling a step, naming the step and its new state.
pub struct ToggleResult<'a> {
    pub project: &'a Project,
    pub step_id: &'a str,
}

impl fmt::Display for ToggleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self
            .project
            .plan
            .as_ref()
            .and_then(|plan| plan.step(self.step_id));
        match step {
            Some(step) => writeln!(
                f,
                "Marked step '{}' as {}",
                step.title,
                if step.is_completed { "done" } else { "not done" }
            )?,
            None => writeln!(f, "Updated step {}", self.step_id)?,
        }
        writeln!(f)?;
        write!(f, "{}", self.project)
    }
}

/// Result of a delete operation.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Project> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted project '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}
