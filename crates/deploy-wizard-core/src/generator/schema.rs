//! JSON schema constraining the generated plan.
//!
//! Written in the OpenAPI subset accepted by Gemini's `responseSchema`
//! (upper-case type names, no `$ref`).

use serde_json::{json, Value};

/// Schema of one configuration file entry.
fn config_file_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "fileName": { "type": "STRING", "description": "File name or relative path" },
            "content": { "type": "STRING", "description": "Complete file contents" },
            "language": { "type": "STRING", "description": "Language for syntax highlighting" }
        },
        "required": ["fileName", "content", "language"]
    })
}

/// Schema of one deployment step.
fn step_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "STRING", "description": "Short unique identifier" },
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "commands": { "type": "ARRAY", "items": { "type": "STRING" } },
            "configFiles": { "type": "ARRAY", "items": config_file_schema() },
            "isCompleted": { "type": "BOOLEAN" },
            "notes": { "type": "STRING" }
        },
        "required": ["id", "title", "description", "isCompleted"]
    })
}

/// Response schema of a full deployment plan.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "steps": { "type": "ARRAY", "items": step_schema() },
            "prerequisites": { "type": "ARRAY", "items": { "type": "STRING" } },
            "warnings": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["steps", "prerequisites", "warnings"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_plan_sections() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["steps", "prerequisites", "warnings"]));
    }

    #[test]
    fn test_step_schema_matches_model_fields() {
        let schema = response_schema();
        let step = &schema["properties"]["steps"]["items"];
        for field in [
            "id",
            "title",
            "description",
            "commands",
            "configFiles",
            "isCompleted",
            "notes",
        ] {
            assert!(step["properties"].get(field).is_some(), "missing {field}");
        }
        assert_eq!(
            step["required"],
            json!(["id", "title", "description", "isCompleted"])
        );
        let file = &step["properties"]["configFiles"]["items"];
        assert_eq!(file["required"], json!(["fileName", "content", "language"]));
    }
}
