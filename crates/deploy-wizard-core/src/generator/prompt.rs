//! Prompt template for plan generation.

use super::ProjectBrief;

const NOT_SPECIFIED: &str = "Not specified";

/// Builds the natural-language instruction for one project.
///
/// Every descriptive field of the brief is embedded; absent optional fields
/// are rendered as "Not specified".
pub fn build_prompt(brief: &ProjectBrief<'_>) -> String {
    let description = if brief.description.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        brief.description
    };
    let tech_stack = if brief.tech_stack.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        brief.tech_stack.join(", ")
    };

    let os = brief.os.as_str();

    format!(
        "You are a senior DevOps engineer. Create a detailed, step-by-step deployment \
         checklist for the following project.

Project name: {name}
Description: {description}
Project type: {project_type}
Tech stack: {tech_stack}
Backend / API: {backend}
Database: {database}
Hosting target: {hosting_target}
Developer operating system: {os}

Requirements:
- Order the steps exactly as they must be executed, from local setup to a live deployment.
- Give exact shell commands for a {os} terminal wherever a command is needed.
- Include the full contents of every configuration file the user must create \
  (for example Dockerfile, vercel.json, .env.example, CI workflows).
- List prerequisites (accounts, tools, versions) and warnings about common pitfalls \
  such as secrets, environment variables, CORS and build settings.
- Give every step a short unique id and set isCompleted to false.
Respond only with JSON matching the provided schema.",
        name = brief.name,
        project_type = brief.project_type.label(),
        backend = brief.backend.unwrap_or(NOT_SPECIFIED),
        database = brief.database.unwrap_or(NOT_SPECIFIED),
        hosting_target = brief.hosting_target,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DevOs, ProjectType};

    fn brief<'a>(tech_stack: &'a [String]) -> ProjectBrief<'a> {
        ProjectBrief {
            name: "Blog",
            description: "",
            project_type: ProjectType::WebApp,
            tech_stack,
            backend: None,
            database: Some("Postgres"),
            hosting_target: "Vercel",
            os: DevOs::MacOs,
        }
    }

    #[test]
    fn test_prompt_embeds_every_field() {
        let stack = vec!["React".to_string(), "Vite".to_string()];
        let prompt = build_prompt(&brief(&stack));

        assert!(prompt.contains("Project name: Blog"));
        assert!(prompt.contains("Project type: Web App"));
        assert!(prompt.contains("Tech stack: React, Vite"));
        assert!(prompt.contains("Database: Postgres"));
        assert!(prompt.contains("Hosting target: Vercel"));
        assert!(prompt.contains("Developer operating system: macOS"));
        assert!(prompt.contains("macOS terminal"));
        assert!(prompt.contains("isCompleted to false"));
    }

    #[test]
    fn test_prompt_marks_missing_fields() {
        let prompt = build_prompt(&brief(&[]));
        assert!(prompt.contains("Description: Not specified"));
        assert!(prompt.contains("Backend / API: Not specified"));
        assert!(prompt.contains("Tech stack: Not specified"));
    }
}
