//! Core library for the Deploy Wizard application.
//!
//! This crate turns a short description of a software project into a
//! step-by-step deployment checklist and keeps track of the user's progress
//! through it. It provides the data models, the persistent project store, the
//! AI plan generator and the [`Wizard`] service the views are built on.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): projects, plans and steps, serialized as
//!   camelCase JSON
//! - **Storage** ([`storage`]): the whole project collection lives in a single
//!   key-value slot, persisted to SQLite by default
//! - **Generator** ([`generator`]): a single structured-output request to
//!   Gemini, normalized before use
//! - **Display** ([`display`]): markdown formatting for the terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use deploy_wizard_core::{
//!     params::{NewProject, ToggleStep},
//!     WizardBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let wizard = WizardBuilder::new()
//!     .with_database_path(Some("wizard.db"))
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
//!
//! if let Some(first) = project.plan.as_ref().and_then(|plan| plan.steps.first()) {
//!     let updated = wizard
//!         .toggle_step(&ToggleStep {
//!             project_id: project.id.clone(),
//!             step_id: first.id.clone(),
//!         })
//!         .await?;
//!     println!("{updated}");
//! }
//!
//! for summary in &wizard.list_summaries().await? {
//!     println!("{} ({})", summary.name, summary.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod storage;
pub mod wizard;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDate, LocalDateTime, OperationStatus, ProjectSummaries,
    ToggleResult,
};
pub use error::{Result, WizardError};
pub use generator::{GeminiClient, PlanGenerator, ProjectBrief};
pub use models::{
    ConfigFile, DeployPlan, DeployStep, DevOs, Project, ProjectStatus, ProjectSummary,
    ProjectType,
};
pub use params::{DeleteProject, Id, NewProject, ToggleStep};
pub use storage::{KeyValueStore, MemoryStore, ProjectStore, SqliteStore};
pub use wizard::{Wizard, WizardBuilder};
