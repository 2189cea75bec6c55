//! Project collection persisted as one JSON array in a single slot.

use std::sync::Arc;

use log::debug;

use super::KeyValueStore;
use crate::{
    error::{Result, WizardError},
    models::Project,
};

/// Key of the slot holding the serialized project collection.
pub const PROJECTS_KEY: &str = "deploy_wizard_projects";

/// Durable mapping from project ID to [`Project`].
///
/// Every mutation rewrites the whole collection. Concurrent writers race
/// with last-write-wins semantics.
#[derive(Clone)]
pub struct ProjectStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProjectStore {
    /// Creates a store over the given slot storage using [`PROJECTS_KEY`].
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, PROJECTS_KEY)
    }

    /// Creates a store persisting under a custom key.
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Returns all stored projects in storage order.
    ///
    /// An absent or blank slot yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StorageCorruption` if the slot does not hold a
    /// valid project array.
    pub fn list(&self) -> Result<Vec<Project>> {
        match self.backend.read(&self.key)? {
            Some(blob) if !blob.trim().is_empty() => {
                serde_json::from_str(&blob).map_err(|source| WizardError::StorageCorruption {
                    key: self.key.clone(),
                    source,
                })
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Looks up a project by ID. A missing project is not an error.
    pub fn get(&self, id: &str) -> Result<Option<Project>> {
        Ok(self.list()?.into_iter().find(|project| project.id == id))
    }

    /// Replaces the project with the same ID in place, or appends it.
    pub fn upsert(&self, project: &Project) -> Result<()> {
        let mut projects = self.list()?;

        match projects.iter_mut().find(|existing| existing.id == project.id) {
            Some(existing) => {
                debug!("Replacing project {}", project.id);
                *existing = project.clone();
            }
            None => {
                debug!("Appending project {}", project.id);
                projects.push(project.clone());
            }
        }

        self.save(&projects)
    }

    /// Removes the project with the given ID if present.
    ///
    /// Returns the removed project. Deleting an absent ID is a no-op.
    pub fn delete(&self, id: &str) -> Result<Option<Project>> {
        let mut projects = self.list()?;
        let removed = projects
            .iter()
            .position(|project| project.id == id)
            .map(|index| projects.remove(index));

        self.save(&projects)?;
        Ok(removed)
    }

    fn save(&self, projects: &[Project]) -> Result<()> {
        let blob = serde_json::to_string(projects)?;
        self.backend.write(&self.key, &blob)
    }
}
