use crate::registry::{list_tools, ParamLocation, ToolSpec};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static TOOL_CATALOG: Lazy<Vec<ToolDef>> = Lazy::new(|| list_tools().iter().map(tool_def).collect());

pub fn tool_catalog() -> &'static [ToolDef] {
    &TOOL_CATALOG
}

pub fn tool_def(spec: &ToolSpec) -> ToolDef {
    ToolDef {
        name: spec.name.to_string(),
        description: spec.description.to_string(),
        input_schema: input_schema(spec),
    }
}

/// JSON Schema for a tool's arguments. Path, query and body parameters share
/// one flat object, as callers send them.
pub fn input_schema(spec: &ToolSpec) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for param in spec.parameters {
        let mut property = Map::new();
        property.insert("type".to_string(), Value::from(param.kind.json_type()));
        if !param.description.is_empty() {
            property.insert("description".to_string(), Value::from(param.description));
        }
        if param.location == ParamLocation::Path {
            property.insert("minLength".to_string(), Value::from(1));
        }
        properties.insert(param.name.to_string(), Value::Object(property));
        if param.required {
            required.push(Value::from(param.name));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::from("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    Value::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tool_by_name;
    use serde_json::json;

    #[test]
    fn catalog_lists_every_tool() {
        assert_eq!(tool_catalog().len(), list_tools().len());
        let names: Vec<&str> = tool_catalog().iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"post_projects_projectId_quicktest_url"));
    }

    #[test]
    fn schema_marks_required_parameters() {
        let schema = input_schema(tool_by_name("post_projects_projectId_tags").expect("tool"));
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["projectId", "name"]));
        assert_eq!(schema["properties"]["projectId"]["minLength"], 1);
        assert_eq!(schema["properties"]["type"]["type"], "string");
    }

    #[test]
    fn schema_without_parameters_has_no_required_list() {
        let schema = input_schema(tool_by_name("get_projects").expect("tool"));
        assert_eq!(schema, json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn blank_descriptions_are_omitted() {
        let schema =
            input_schema(tool_by_name("post_projects_projectId_predictions_query").expect("tool"));
        assert_eq!(schema["properties"]["maxCount"], json!({"type": "number"}));
    }

    #[test]
    fn serializes_input_schema_in_camel_case() {
        let value = serde_json::to_value(&tool_catalog()[0]).expect("serialize");
        assert!(value.get("inputSchema").is_some());
    }
}
