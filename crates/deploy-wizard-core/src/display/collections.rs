//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ProjectSummary;

/// Newtype wrapper for displaying the dashboard's project summaries.
///
/// Handles the empty dashboard gracefully.
///
/// # Examples
///
/// ```rust
/// use deploy_wizard_core::{
///     display::ProjectSummaries,
///     models::{DevOs, ProjectStatus, ProjectSummary, ProjectType},
/// };
///
/// let summary = ProjectSummary {
///     id: "1".to_string(),
///     name: "Blog".to_string(),
///     description: String::new(),
///     project_type: ProjectType::WebApp,
///     status: ProjectStatus::InProgress,
///     hosting_target: "Vercel".to_string(),
///     os: DevOs::Linux,
///     tech_stack: vec!["React".to_string()],
///     created_at: 0,
///     total_steps: 4,
///     completed_steps: 1,
/// };
///
/// let output = format!("{}", ProjectSummaries(vec![summary]));
/// assert!(output.contains("Blog [In Progress] (1/4)"));
/// ```
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects yet.")?;
            writeln!(f)?;
            writeln!(
                f,
                "Create one with `dw new` and describe your stack to get a tailored deployment guide."
            )
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
