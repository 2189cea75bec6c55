//! Validation and normalization of upstream plan responses.

use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

use crate::{
    error::{Result, WizardError},
    models::{ConfigFile, DeployPlan, DeployStep},
    params::non_blank,
};

/// Plan exactly as returned by the AI service.
///
/// Only `steps` is mandatory; anything the model claims about completion is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlan {
    pub steps: Vec<RawStep>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Step exactly as returned by the AI service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub commands: Option<Vec<String>>,
    #[serde(default)]
    pub config_files: Option<Vec<ConfigFile>>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parses the JSON text of a response into a [`RawPlan`].
///
/// # Errors
///
/// Returns `WizardError::PlanGenerationFailed` if the text is not JSON or
/// does not match the plan schema.
pub fn parse_raw_plan(text: &str) -> Result<RawPlan> {
    serde_json::from_str(strip_code_fence(text)).map_err(|e| {
        WizardError::plan_generation(format!("AI response does not match the plan schema: {e}"))
    })
}

/// Turns an untrusted upstream plan into a [`DeployPlan`].
///
/// - every step gets a unique ID: upstream IDs are kept on first use,
///   missing, blank or duplicate ones are replaced by `step-<n>`
/// - `is_completed` starts out false
/// - empty command and config file lists become absent, blank notes too
///
/// # Errors
///
/// Returns `WizardError::PlanGenerationFailed` if the plan has no steps or a
/// step has a blank title.
pub fn normalize_plan(raw: RawPlan) -> Result<DeployPlan> {
    if raw.steps.is_empty() {
        return Err(WizardError::plan_generation(
            "AI response contained no deployment steps",
        ));
    }

    let upstream_ids: HashSet<String> = raw
        .steps
        .iter()
        .filter_map(|step| non_blank(step.id.as_deref()))
        .collect();
    let mut used = HashSet::new();
    let mut counter = 0usize;

    let mut steps = Vec::with_capacity(raw.steps.len());
    for (index, step) in raw.steps.into_iter().enumerate() {
        if step.title.trim().is_empty() {
            return Err(WizardError::plan_generation(format!(
                "AI response step {} has no title",
                index + 1
            )));
        }

        let id = match non_blank(step.id.as_deref()) {
            Some(id) if used.insert(id.clone()) => id,
            rejected => {
                let generated = loop {
                    counter += 1;
                    let candidate = format!("step-{counter}");
                    if !upstream_ids.contains(&candidate) && used.insert(candidate.clone()) {
                        break candidate;
                    }
                };
                warn!(
                    "Assigning id '{generated}' to step {} (upstream id: {rejected:?})",
                    index + 1
                );
                generated
            }
        };

        steps.push(DeployStep {
            id,
            title: step.title.trim().to_string(),
            description: step.description,
            commands: step.commands.filter(|commands| !commands.is_empty()),
            config_files: step.config_files.filter(|files| !files.is_empty()),
            is_completed: false,
            notes: non_blank(step.notes.as_deref()),
        });
    }

    Ok(DeployPlan {
        steps,
        prerequisites: raw.prerequisites,
        warnings: raw.warnings,
    })
}

/// Models occasionally wrap JSON in a markdown fence despite the schema.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|inner| inner.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
