//! Project operations for the Wizard.

use std::cmp::Reverse;

use jiff::Timestamp;
use log::{info, warn};
use uuid::Uuid;

use super::Wizard;
use crate::{
    display::ProjectSummaries,
    error::{Result, WizardError},
    generator::ProjectBrief,
    models::{Project, ProjectStatus, ProjectSummary},
    params::{non_blank, DeleteProject, Id, NewProject, ToggleStep},
};

impl Wizard {
    /// Lists all projects, newest first.
    ///
    /// A corrupted project collection is logged and reported as empty so the
    /// dashboard still renders; the corrupted data itself is left untouched.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = match self.with_store(|store| store.list()).await {
            Ok(projects) => projects,
            Err(err @ WizardError::StorageCorruption { .. }) => {
                warn!("{err}; showing an empty project list");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        projects.sort_by_key(|project| Reverse(project.created_at));
        Ok(projects)
    }

    /// Lists all projects as summaries for the dashboard, newest first.
    pub async fn list_summaries(&self) -> Result<ProjectSummaries> {
        let projects = self.list_projects().await?;
        Ok(ProjectSummaries(
            projects.iter().map(ProjectSummary::from).collect(),
        ))
    }

    /// Retrieves a project by its ID.
    pub async fn get_project(&self, params: &Id) -> Result<Option<Project>> {
        let id = params.id.clone();
        self.with_store(move |store| store.get(&id)).await
    }

    /// Creates a project from the new-project form.
    ///
    /// The form is validated before any network call. The project is only
    /// persisted once a plan has been generated; on failure nothing is
    /// stored and the error is returned for display.
    ///
    /// # Errors
    ///
    /// * `WizardError::Validation` - a required field is missing
    /// * `WizardError::PlanGenerationFailed` - the AI service failed
    pub async fn create_project(&self, params: &NewProject) -> Result<Project> {
        params.validate()?;

        let mut project = Project {
            id: Uuid::new_v4().to_string(),
            name: params.name.trim().to_string(),
            description: params.description.trim().to_string(),
            project_type: params.project_type,
            tech_stack: params.tech_stack_list(),
            backend: non_blank(params.backend.as_deref()),
            database: non_blank(params.database.as_deref()),
            hosting_target: params.hosting_target.trim().to_string(),
            os: params.os,
            created_at: Timestamp::now().as_millisecond(),
            status: ProjectStatus::Planning,
            plan: None,
        };

        let plan = self
            .generator
            .generate(&ProjectBrief::from(&project))
            .await
            .inspect_err(|e| warn!("Plan generation for '{}' failed: {e}", project.name))?;

        project.attach_plan(plan);

        let stored = project.clone();
        self.with_store(move |store| store.upsert(&stored)).await?;
        info!("Created project {} ({})", project.name, project.id);

        Ok(project)
    }

    /// Toggles one step of a project's plan and persists immediately.
    ///
    /// # Errors
    ///
    /// * `WizardError::NotFound` - no project has the given ID
    /// * `WizardError::NoPlan` - the project has no plan
    /// * `WizardError::StepNotFound` - the plan has no such step
    pub async fn toggle_step(&self, params: &ToggleStep) -> Result<Project> {
        let project_id = params.project_id.clone();
        let step_id = params.step_id.clone();

        self.with_store(move |store| {
            let mut project = store
                .get(&project_id)?
                .ok_or_else(|| WizardError::NotFound { id: project_id.clone() })?;
            let completed = project.toggle_step(&step_id)?;
            store.upsert(&project)?;
            info!(
                "Step {step_id} of project {project_id} marked {}; project is {}",
                if completed { "completed" } else { "open" },
                project.status.label()
            );
            Ok(project)
        })
        .await
    }

    /// Permanently deletes a project after explicit confirmation.
    ///
    /// Returns the deleted project, or `None` if no project had the ID.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Validation` if `confirmed` is false.
    pub async fn delete_project(&self, params: &DeleteProject) -> Result<Option<Project>> {
        if !params.confirmed {
            return Err(WizardError::validation("confirmed")
                .with_reason("Deletion must be confirmed"));
        }

        let id = params.id.clone();
        let removed = self.with_store(move |store| store.delete(&id)).await?;
        match &removed {
            Some(project) => info!("Deleted project {} ({})", project.name, project.id),
            None => info!("No project with ID {} to delete", params.id),
        }
        Ok(removed)
    }
}
