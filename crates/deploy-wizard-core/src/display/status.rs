//! Status messages for operation feedback.

use std::fmt;

use crate::error::WizardError;

/// Wrapper type for displaying operation outcomes as a one-line message,
/// optionally followed by a hint telling the user what to do next.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub hint: Option<String>,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            hint: None,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            hint: None,
        }
    }

    /// Attach a follow-up hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<&WizardError> for OperationStatus {
    fn from(error: &WizardError) -> Self {
        let status = Self::failure(error.to_string());
        match error {
            WizardError::Validation { field, .. } if field == "confirmed" => {
                status.with_hint("Re-run with --confirm to delete the project permanently.")
            }
            WizardError::Validation { .. } => {
                status.with_hint("Fix the highlighted field and submit again.")
            }
            WizardError::PlanGenerationFailed { .. } => {
                status.with_hint("Nothing was saved. You can retry the submission.")
            }
            WizardError::NotFound { .. } => {
                status.with_hint("Run `dw list` to see all projects.")
            }
            WizardError::StorageCorruption { .. } => status
                .with_hint("The stored data was left untouched. Repair or remove it to continue."),
            _ => status,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)?;
        if let Some(hint) = &self.hint {
            writeln!(f)?;
            writeln!(f, "*{hint}*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Project deleted");
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Plan generation failed");
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_generation_failure_hint() {
        let error = WizardError::plan_generation("timeout");
        let output = OperationStatus::from(&error).to_string();
        assert!(output.contains("Error: Plan generation failed: timeout"));
        assert!(output.contains("Nothing was saved"));
    }

    #[test]
    fn test_delete_confirmation_hint() {
        let error = WizardError::validation("confirmed").with_reason("Deletion must be confirmed");
        let output = OperationStatus::from(&error).to_string();
        assert!(output.contains("--confirm"));
        assert!(!output.contains("highlighted field"));
    }
}
