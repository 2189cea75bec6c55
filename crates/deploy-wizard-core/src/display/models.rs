//! Display implementations for domain models.
//!
//! Everything renders as markdown for the terminal renderer:
//! - [`Project`] is the detail view with the full checklist
//! - [`ProjectSummary`] is one dashboard card
//! - [`StepView`] is one checklist entry, numbered and OS-aware

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{DeployStep, DevOs, Project, ProjectStatus, ProjectSummary, ProjectType};

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for DevOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A step rendered at its position in the checklist.
///
/// Commands, config files and notes are only shown while the step is open.
pub struct StepView<'a> {
    pub position: usize,
    pub step: &'a DeployStep,
    pub os: DevOs,
}

impl StepView<'_> {
    fn shell_language(&self) -> &'static str {
        match self.os {
            DevOs::Windows => "powershell",
            DevOs::MacOs | DevOs::Linux => "bash",
        }
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.step;
        let icon = if step.is_completed { "✓" } else { "○" };
        writeln!(
            f,
            "### {icon} Step {}. {} (id: {})",
            self.position, step.title, step.id
        )?;
        writeln!(f)?;

        if !step.description.is_empty() {
            writeln!(f, "{}", step.description)?;
            writeln!(f)?;
        }

        if step.is_completed {
            return Ok(());
        }

        if !step.commands().is_empty() {
            writeln!(f, "#### Terminal ({})", self.os)?;
            writeln!(f)?;
            writeln!(f, "```{}", self.shell_language())?;
            for command in step.commands() {
                writeln!(f, "$ {command}")?;
            }
            writeln!(f, "```")?;
            writeln!(f)?;
        }

        for file in step.config_files() {
            writeln!(f, "#### {}", file.file_name)?;
            writeln!(f)?;
            writeln!(f, "```{}", file.language)?;
            writeln!(f, "{}", file.content.trim_end())?;
            writeln!(f, "```")?;
            writeln!(f)?;
        }

        if let Some(notes) = &step.notes {
            writeln!(f, "> Note: {notes}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Deploy to: **{}** ({})",
            self.hosting_target, self.project_type
        )?;
        writeln!(f, "- Status: {}", self.status)?;
        if !self.tech_stack.is_empty() {
            writeln!(f, "- Tech stack: {}", self.tech_stack.join(", "))?;
        }
        if let Some(backend) = &self.backend {
            writeln!(f, "- Backend: {backend}")?;
        }
        if let Some(database) = &self.database {
            writeln!(f, "- Database: {database}")?;
        }
        writeln!(f, "- Developer OS: {}", self.os)?;
        writeln!(f, "- Created: {}", LocalDateTime(self.created_at))?;

        let Some(plan) = &self.plan else {
            if !self.description.is_empty() {
                writeln!(f)?;
                writeln!(f, "{}", self.description)?;
            }
            writeln!(f, "\nNo deployment plan yet.")?;
            return Ok(());
        };

        writeln!(
            f,
            "- Progress: {}% ({}/{} steps)",
            plan.progress_percent(),
            plan.completed_count(),
            plan.steps.len()
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if !plan.prerequisites.is_empty() {
            writeln!(f, "\n## Prerequisites")?;
            writeln!(f)?;
            for prerequisite in &plan.prerequisites {
                writeln!(f, "- {prerequisite}")?;
            }
        }

        if !plan.warnings.is_empty() {
            writeln!(f, "\n## Warnings")?;
            writeln!(f)?;
            for warning in &plan.warnings {
                writeln!(f, "- ⚠ {warning}")?;
            }
        }

        writeln!(f, "\n## Deployment Checklist")?;
        writeln!(f)?;
        for (index, step) in plan.steps.iter().enumerate() {
            write!(
                f,
                "{}",
                StepView {
                    position: index + 1,
                    step,
                    os: self.os,
                }
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.completed_steps, self.total_steps)
        } else {
            String::new()
        };

        writeln!(f, "## {} [{}]{progress}", self.name, self.status)?;
        writeln!(f)?;

        if self.description.is_empty() {
            writeln!(f, "- **Description**: No description.")?;
        } else {
            writeln!(f, "- **Description**: {}", self.description)?;
        }
        if !self.tech_stack.is_empty() {
            writeln!(f, "- **Stack**: {} on {}", self.tech_stack.join(", "), self.os)?;
        }
        writeln!(f, "- **Hosting**: {}", self.hosting_target)?;
        writeln!(f, "- **Created**: {}", LocalDate(self.created_at))?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f)?;

        Ok(())
    }
}
