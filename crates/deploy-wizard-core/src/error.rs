//! Error types for the deploy wizard library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// A required field of the new-project form is missing or invalid
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The AI service could not produce a usable deployment plan
    #[error("Plan generation failed: {message}")]
    PlanGenerationFailed { message: String },

    /// The persisted project collection could not be deserialized
    #[error("Stored data under '{key}' is corrupted: {source}")]
    StorageCorruption {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    NotFound { id: String },

    /// Step not found in the project's plan
    #[error("Step with ID {id} not found")]
    StepNotFound { id: String },

    /// The project has no deployment plan yet
    #[error("Project with ID {id} has no deployment plan")]
    NoPlan { id: String },

    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

    /// Serialization errors while writing the project collection
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WizardError {
        WizardError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for form validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a plan generation failure with a human-readable message.
    pub fn plan_generation(message: impl Into<String>) -> Self {
        WizardError::PlanGenerationFailed {
            message: message.into(),
        }
    }

    /// Returns true for errors the user fixes by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, WizardError::Validation { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::database(message).with_source(e))
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
