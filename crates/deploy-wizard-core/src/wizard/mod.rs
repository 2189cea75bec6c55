//! High-level wizard API tying the project store to the plan generator.
//!
//! The [`Wizard`] implements the contract the views depend on: list the
//! dashboard, create a project (validate, generate, persist), toggle steps
//! and delete projects.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI views     │───▶│     Wizard      │───▶│  PlanGenerator  │
//! │ (list/new/show) │    │ (project_ops)   │───▶│  ProjectStore   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Storage is synchronous and runs on tokio's blocking pool; plan generation
//! is the only operation that waits on the network.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use deploy_wizard_core::{params::NewProject, WizardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let wizard = WizardBuilder::new()
//!     .with_database_path(Some("/tmp/wizard.db"))
//!     .with_api_key(Some("my-key"))
//!     .build()
//!     .await?;
//!
//! let project = wizard
//!     .create_project(&NewProject {
//!         name: "Blog".to_string(),
//!         tech_stack: "React, Vite".to_string(),
//!         hosting_target: "Vercel".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{project}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tokio::task;

use crate::{
    error::{Result, WizardError},
    generator::PlanGenerator,
    storage::ProjectStore,
};

pub mod builder;
pub mod project_ops;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;

/// Main wizard interface for managing projects and their plans.
#[derive(Clone)]
pub struct Wizard {
    store: ProjectStore,
    generator: Arc<dyn PlanGenerator>,
}

impl Wizard {
    /// Creates a wizard over an existing store and generator.
    pub fn new(store: ProjectStore, generator: Arc<dyn PlanGenerator>) -> Self {
        Self { store, generator }
    }

    /// The underlying project store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Runs a store operation on the blocking pool.
    async fn with_store<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(ProjectStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || operation(store))
            .await
            .map_err(|e| WizardError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
