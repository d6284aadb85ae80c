use crate::config::Config;
use crate::{LayerHostError, LayerHostResult};
use schemars::{schema_for, Schema};
use std::collections::HashMap;

/// Render the config as YAML with each field preceded by its documentation,
/// pulled from the field descriptions in the JSON schema.
pub fn render_documented_yaml(config: &Config) -> LayerHostResult<String> {
    let yaml_string =
        serde_yaml::to_string(config).map_err(|e| LayerHostError::Config(e.to_string()))?;

    let schema = schema_for!(Config);
    let field_docs = extract_field_documentation(&schema);

    let mut output = String::new();
    output.push_str("# LayerHost Configuration File\n");
    output.push_str("# Missing fields fall back to their defaults\n");
    output.push_str(&add_comments_to_yaml(&yaml_string, &field_docs));
    Ok(output)
}

fn extract_field_documentation(schema: &Schema) -> HashMap<String, String> {
    let mut field_docs = HashMap::new();
    if let Some(schema_obj) = schema.as_object() {
        if let Some(props_obj) = schema_obj.get("properties").and_then(|p| p.as_object()) {
            for (key, prop_value) in props_obj {
                if let Some(description) = prop_value.get("description").and_then(|d| d.as_str()) {
                    field_docs.insert(key.clone(), description.to_owned());
                }
            }
        }
    }
    field_docs
}

fn add_comments_to_yaml(yaml: &str, field_docs: &HashMap<String, String>) -> String {
    let mut result = String::new();
    for line in yaml.lines() {
        if let Some(doc) = top_level_field(line).and_then(|field| field_docs.get(field)) {
            result.push('\n');
            result.push_str(&format!("# {doc}\n"));
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

// Indented lines belong to a parent field and keep its comment.
fn top_level_field(line: &str) -> Option<&str> {
    if line.starts_with(' ') || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let before_colon = line.split(':').next()?;
    if before_colon.is_empty() {
        None
    } else {
        Some(before_colon)
    }
}
