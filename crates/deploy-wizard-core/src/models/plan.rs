//! Deployment plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::DeployStep;
use crate::error::{Result, WizardError};

/// Ordered steps, prerequisites and warnings generated for a project.
///
/// The shape of a plan is fixed once generated; only the completion flag of
/// its steps changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeployPlan {
    /// Steps in execution order
    pub steps: Vec<DeployStep>,

    /// Things that must be in place before starting
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Pitfalls worth knowing about
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl DeployPlan {
    /// Number of completed steps.
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_completed).count()
    }

    /// Rounded percentage of completed steps, 0 for an empty plan.
    pub fn progress_percent(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        let percent = (self.completed_count() as f64 / self.steps.len() as f64) * 100.0;
        percent.round() as u8
    }

    /// Looks up a step by its ID.
    pub fn step(&self, id: &str) -> Option<&DeployStep> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Looks up a step by its ID for modification.
    pub fn step_mut(&mut self, id: &str) -> Option<&mut DeployStep> {
        self.steps.iter_mut().find(|step| step.id == id)
    }

    /// Flips the completion flag of a step and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StepNotFound` if no step has the given ID.
    pub fn toggle_step(&mut self, id: &str) -> Result<bool> {
        let step = self
            .step_mut(id)
            .ok_or_else(|| WizardError::StepNotFound { id: id.to_string() })?;
        step.is_completed = !step.is_completed;
        Ok(step.is_completed)
    }
}
