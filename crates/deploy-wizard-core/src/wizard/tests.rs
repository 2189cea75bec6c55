//! Tests for the wizard module.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;

use super::*;
use crate::{
    generator::ProjectBrief,
    models::{DeployPlan, DeployStep, ProjectStatus},
    params::{DeleteProject, Id, NewProject, ToggleStep},
    storage::{KeyValueStore, MemoryStore, PROJECTS_KEY},
};

/// Generator returning a fixed number of steps, or failing.
struct StubGenerator {
    steps: usize,
    fail: bool,
    calls: AtomicUsize,
}

impl StubGenerator {
    fn with_steps(steps: usize) -> Arc<Self> {
        Arc::new(Self {
            steps,
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            steps: 0,
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    async fn generate(&self, brief: &ProjectBrief<'_>) -> Result<DeployPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(WizardError::plan_generation("service unavailable"));
        }
        Ok(DeployPlan {
            steps: (1..=self.steps)
                .map(|n| DeployStep {
                    id: format!("step-{n}"),
                    title: format!("Step {n} for {}", brief.name),
                    description: "Do it".to_string(),
                    commands: None,
                    config_files: None,
                    is_completed: false,
                    notes: None,
                })
                .collect(),
            prerequisites: vec![],
            warnings: vec![],
        })
    }
}

fn create_test_wizard(generator: Arc<StubGenerator>) -> Wizard {
    let store = ProjectStore::new(Arc::new(MemoryStore::new()));
    Wizard::new(store, generator)
}

fn blog_form() -> NewProject {
    NewProject {
        name: "Blog".to_string(),
        tech_stack: "React, Vite".to_string(),
        hosting_target: "Vercel".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_project_persists_generated_plan() {
    let wizard = create_test_wizard(StubGenerator::with_steps(3));

    let project = wizard
        .create_project(&blog_form())
        .await
        .expect("Failed to create project");

    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.tech_stack, vec!["React", "Vite"]);
    assert_eq!(project.plan.as_ref().map(|plan| plan.steps.len()), Some(3));

    let stored = wizard
        .get_project(&Id {
            id: project.id.clone(),
        })
        .await
        .expect("Failed to get project")
        .expect("Project should exist");
    assert_eq!(stored, project);
}

#[tokio::test]
async fn test_create_project_validates_before_generating() {
    let generator = StubGenerator::with_steps(1);
    let wizard = create_test_wizard(generator.clone());

    let err = wizard
        .create_project(&NewProject {
            hosting_target: "  ".to_string(),
            ..blog_form()
        })
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    assert!(wizard.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_generation_persists_nothing() {
    let wizard = create_test_wizard(StubGenerator::failing());

    let err = wizard.create_project(&blog_form()).await.unwrap_err();

    assert!(matches!(err, WizardError::PlanGenerationFailed { .. }));
    assert!(wizard.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_toggle_step_updates_status() {
    let wizard = create_test_wizard(StubGenerator::with_steps(2));
    let project = wizard.create_project(&blog_form()).await.unwrap();

    let toggle = |step_id: &str| ToggleStep {
        project_id: project.id.clone(),
        step_id: step_id.to_string(),
    };

    let updated = wizard.toggle_step(&toggle("step-1")).await.unwrap();
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.progress(), (1, 2));

    let updated = wizard.toggle_step(&toggle("step-2")).await.unwrap();
    assert_eq!(updated.status, ProjectStatus::Completed);

    let updated = wizard.toggle_step(&toggle("step-1")).await.unwrap();
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.progress(), (1, 2));
}

#[tokio::test]
async fn test_toggle_step_unknown_ids() {
    let wizard = create_test_wizard(StubGenerator::with_steps(1));
    let project = wizard.create_project(&blog_form()).await.unwrap();

    let err = wizard
        .toggle_step(&ToggleStep {
            project_id: "missing".to_string(),
            step_id: "step-1".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::NotFound { .. }));

    let err = wizard
        .toggle_step(&ToggleStep {
            project_id: project.id.clone(),
            step_id: "step-9".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::StepNotFound { .. }));

    let stored = wizard.get_project(&Id { id: project.id }).await.unwrap();
    assert_eq!(stored.map(|p| p.progress()), Some((0, 1)));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let wizard = create_test_wizard(StubGenerator::with_steps(1));
    let project = wizard.create_project(&blog_form()).await.unwrap();

    let err = wizard
        .delete_project(&DeleteProject {
            id: project.id.clone(),
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(wizard.list_projects().await.unwrap().len(), 1);

    let removed = wizard
        .delete_project(&DeleteProject {
            id: project.id.clone(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(removed.map(|p| p.id), Some(project.id));
    assert!(wizard.list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_projects_recovers_from_corruption() {
    let backend = Arc::new(MemoryStore::with_slot(PROJECTS_KEY, "{not json"));
    let wizard = Wizard::new(
        ProjectStore::new(backend.clone()),
        StubGenerator::with_steps(1),
    );

    assert!(wizard.list_projects().await.unwrap().is_empty());
    assert_eq!(
        backend.read(PROJECTS_KEY).unwrap().as_deref(),
        Some("{not json")
    );

    // Writes refuse to clobber the unreadable collection.
    let err = wizard.create_project(&blog_form()).await.unwrap_err();
    assert!(matches!(err, WizardError::StorageCorruption { .. }));
}

#[tokio::test]
async fn test_list_summaries_counts_steps() {
    let wizard = create_test_wizard(StubGenerator::with_steps(4));
    let project = wizard.create_project(&blog_form()).await.unwrap();
    wizard
        .toggle_step(&ToggleStep {
            project_id: project.id.clone(),
            step_id: "step-3".to_string(),
        })
        .await
        .unwrap();

    let summaries = wizard.list_summaries().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_steps, 4);
    assert_eq!(summaries[0].completed_steps, 1);
}
