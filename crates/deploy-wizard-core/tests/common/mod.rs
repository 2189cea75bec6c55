use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use deploy_wizard_core::{
    generator::ProjectBrief, DeployPlan, DeployStep, PlanGenerator, Result, Wizard,
    WizardBuilder, WizardError,
};
use tempfile::TempDir;

/// Plan generator that answers without touching the network.
///
/// Produces `steps` open steps named after the project, or fails with a
/// generation error when `steps` is zero.
pub struct StubGenerator {
    steps: usize,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(steps: usize) -> Arc<Self> {
        Arc::new(Self {
            steps,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    async fn generate(&self, brief: &ProjectBrief<'_>) -> Result<DeployPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.steps == 0 {
            return Err(WizardError::plan_generation("stub generator is offline"));
        }
        Ok(DeployPlan {
            steps: (1..=self.steps)
                .map(|n| DeployStep {
                    id: format!("step-{n}"),
                    title: format!("Deploy {} to {} ({n})", brief.name, brief.hosting_target),
                    description: "Follow the instructions".to_string(),
                    commands: Some(vec![format!("echo {n}")]),
                    config_files: None,
                    is_completed: false,
                    notes: None,
                })
                .collect(),
            prerequisites: vec!["A hosting account".to_string()],
            warnings: vec![],
        })
    }
}

/// Helper function to create a test wizard backed by a temporary database
pub async fn create_test_wizard(generator: Arc<StubGenerator>) -> (TempDir, Wizard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let wizard = WizardBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create wizard");
    (temp_dir, wizard)
}
