//! Data models for projects and their deployment plans.
//!
//! This module contains the shared schema that the project store, the plan
//! generator and every view depend on. Display implementations live in
//! [`crate::display::models`].
//!
//! # JSON Layout
//!
//! Models serialize with camelCase field names so the persisted collection
//! and the AI response share one shape:
//!
//! ```json
//! {
//!   "id": "6f0c...",
//!   "name": "Blog",
//!   "type": "web-app",
//!   "techStack": ["React", "Vite"],
//!   "hostingTarget": "Vercel",
//!   "os": "Linux",
//!   "createdAt": 1735689600000,
//!   "status": "in-progress",
//!   "plan": { "steps": [ { "id": "step-1", "isCompleted": false, "...": "..." } ] }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use deploy_wizard_core::models::{derive_status, DeployPlan, DeployStep, ProjectStatus};
//!
//! let mut plan = DeployPlan {
//!     steps: vec![DeployStep {
//!         id: "step-1".to_string(),
//!         title: "Push to Vercel".to_string(),
//!         description: "Connect the repository".to_string(),
//!         commands: None,
//!         config_files: None,
//!         is_completed: false,
//!         notes: None,
//!     }],
//!     prerequisites: vec![],
//!     warnings: vec![],
//! };
//! assert_eq!(derive_status(&plan), ProjectStatus::InProgress);
//!
//! plan.toggle_step("step-1").unwrap();
//! assert_eq!(derive_status(&plan), ProjectStatus::Completed);
//! ```

pub mod kind;
pub mod plan;
pub mod project;
pub mod status;
pub mod step;
pub mod summary;

#[cfg(test)]
mod tests;

pub use kind::{DevOs, ProjectType};
pub use plan::DeployPlan;
pub use project::Project;
pub use status::{derive_status, ProjectStatus};
pub use step::{ConfigFile, DeployStep};
pub use summary::ProjectSummary;
