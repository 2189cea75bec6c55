//! Display formatting for projects and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and operation outcomes. All output
//! is markdown, rendered by the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Project, ...)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: the dashboard list ([`ProjectSummaries`])
//! - [`results`]: create, toggle and delete outcomes
//! - [`status`]: one-line success and error messages
//! - [`datetime`]: epoch-millisecond formatting
//! - [`models`]: detail view and checklist entries

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::ProjectSummaries;
pub use datetime::{LocalDate, LocalDateTime};
pub use models::StepView;
pub use results::{CreateResult, DeleteResult, ToggleResult};
pub use status::OperationStatus;
