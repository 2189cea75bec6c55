//! Deployment step model definition.

use serde::{Deserialize, Serialize};

/// A configuration file the user has to create during a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// File name or relative path, e.g. `vercel.json`
    pub file_name: String,

    /// Full file contents
    pub content: String,

    /// Language tag used for highlighting (yaml, json, dockerfile, ...)
    pub language: String,
}

/// One actionable unit of a deployment plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeployStep {
    /// Identifier, unique within the plan
    pub id: String,

    /// Short title of the step
    pub title: String,

    /// What to do and why
    pub description: String,

    /// Shell commands to run, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,

    /// Configuration files to create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_files: Option<Vec<ConfigFile>>,

    /// Whether the user has ticked the step off
    #[serde(default)]
    pub is_completed: bool,

    /// Advisory notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DeployStep {
    /// Commands of the step, empty when none were provided.
    pub fn commands(&self) -> &[String] {
        self.commands.as_deref().unwrap_or_default()
    }

    /// Config files of the step, empty when none were provided.
    pub fn config_files(&self) -> &[ConfigFile] {
        self.config_files.as_deref().unwrap_or_default()
    }
}
