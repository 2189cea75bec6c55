//! Builder for creating and configuring Wizard instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Wizard;
use crate::{
    error::{Result, WizardError},
    generator::{GeminiClient, PlanGenerator},
    storage::{KeyValueStore, ProjectStore, SqliteStore},
};

/// Builder for creating and configuring Wizard instances.
///
/// Unset pieces fall back to defaults: a SQLite store at the XDG data path
/// and a [`GeminiClient`] configured from the environment, with explicit
/// API key, model and endpoint taking precedence.
#[derive(Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn KeyValueStore>>,
    generator: Option<Arc<dyn PlanGenerator>>,
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/deploy-wizard/wizard.db` or
    /// `~/.local/share/deploy-wizard/wizard.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given slot storage instead of a SQLite file.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses the given plan generator instead of Gemini.
    pub fn with_generator(mut self, generator: Arc<dyn PlanGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Overrides the API key of the default generator.
    pub fn with_api_key<S: Into<String>>(mut self, api_key: Option<S>) -> Self {
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key.into());
        }
        self
    }

    /// Overrides the model of the default generator.
    pub fn with_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.model = Some(model.into());
        }
        self
    }

    /// Overrides the API base URL of the default generator.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: Option<S>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.into());
        }
        self
    }

    /// Builds the configured wizard instance.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::XdgDirectory` if no default data path can be
    /// determined, `WizardError::FileSystem` if the database directory
    /// cannot be created and `WizardError::Database` if database
    /// initialization fails
    pub async fn build(self) -> Result<Wizard> {
        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                debug!("Using database at {}", db_path.display());

                let store = task::spawn_blocking(move || SqliteStore::open(db_path))
                    .await
                    .map_err(|e| WizardError::Configuration {
                        message: format!("Task join error: {e}"),
                    })??;
                Arc::new(store) as Arc<dyn KeyValueStore>
            }
        };

        let generator = match self.generator {
            Some(generator) => generator,
            None => {
                let mut client = GeminiClient::from_env();
                if let Some(api_key) = self.api_key {
                    client = client.with_api_key(api_key);
                }
                if let Some(model) = self.model {
                    client = client.with_model(model);
                }
                if let Some(endpoint) = self.endpoint {
                    client = client.with_endpoint(endpoint);
                }
                debug!("Using Gemini model {}", client.model());
                Arc::new(client) as Arc<dyn PlanGenerator>
            }
        };

        Ok(Wizard::new(ProjectStore::new(store), generator))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("deploy-wizard")
            .place_data_file("wizard.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}
