//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Configuration is via environment variables when using
//! [`GeminiClient::from_env`]:
//! - `GEMINI_API_KEY` (or `API_KEY`) - API key, required to generate
//! - `DEPLOY_WIZARD_MODEL` - model name (default: [`DEFAULT_MODEL`])
//! - `DEPLOY_WIZARD_ENDPOINT` - API base URL (default: [`DEFAULT_ENDPOINT`])

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    normalize::{normalize_plan, parse_raw_plan},
    prompt::build_prompt,
    schema::response_schema,
    PlanGenerator, ProjectBrief,
};
use crate::{
    error::{Result, WizardError},
    models::DeployPlan,
};

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for plan generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const INVALID_KEY_MESSAGE: &str =
    "invalid or missing API key; check GEMINI_API_KEY or pass --api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Plan generator backed by Gemini.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl GeminiClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        let model =
            std::env::var("DEPLOY_WIZARD_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint = std::env::var("DEPLOY_WIZARD_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint, model, api_key)
    }

    /// Create with explicit configuration.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client: Client::new(),
        }
    }

    /// Replaces the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.trim().is_empty()).then_some(api_key);
        self
    }

    /// Replaces the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replaces the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Model used for generation.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Sends the prompt and returns the JSON text of the first candidate.
    async fn request_plan_text(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| WizardError::plan_generation(INVALID_KEY_MESSAGE))?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        debug!("POST {}", self.url());
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                WizardError::plan_generation(format!("Could not reach the AI service: {e}"))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| {
                WizardError::plan_generation(format!("Failed to read AI response: {e}"))
            })?;

        if !status.is_success() {
            return Err(error_for_status(status, &text));
        }

        extract_candidate_text(&text)
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, brief: &ProjectBrief<'_>) -> Result<DeployPlan> {
        info!(
            "Requesting deployment plan for '{}' from {}",
            brief.name, self.model
        );
        let prompt = build_prompt(brief);
        let text = self.request_plan_text(&prompt).await?;
        let plan = normalize_plan(parse_raw_plan(&text)?)?;
        info!("Received plan with {} steps", plan.steps.len());
        Ok(plan)
    }
}

/// Maps a non-2xx response to a user-facing error.
fn error_for_status(status: StatusCode, body: &str) -> WizardError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
    let invalid_key = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => true,
        StatusCode::BAD_REQUEST => detail.as_ref().is_some_and(|d| {
            d.message.contains("API key") || d.message.contains("API_KEY_INVALID")
        }),
        _ => false,
    };

    if invalid_key {
        return WizardError::plan_generation(INVALID_KEY_MESSAGE);
    }

    let message = match detail {
        Some(d) if !d.status.is_empty() => format!("{} ({})", d.message, d.status),
        Some(d) => d.message,
        None => body.chars().take(200).collect(),
    };
    WizardError::plan_generation(format!("AI service returned {status}: {message}"))
}

/// Concatenates the text parts of the first candidate.
fn extract_candidate_text(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| WizardError::plan_generation(format!("Unexpected AI response: {e}")))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(WizardError::plan_generation(format!(
            "AI service returned no plan ({reason})"
        )));
    };

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "empty".to_string());
        return Err(WizardError::plan_generation(format!(
            "AI service returned an empty response ({reason})"
        )));
    }

    Ok(text)
}
