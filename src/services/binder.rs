use crate::errors::ToolError;
use crate::registry::ToolSpec;
use serde_json::{Map, Value};

/// Arguments split by where they travel on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundRequest {
    /// Placeholder name to raw (unescaped) value, in declaration order.
    pub path_values: Vec<(&'static str, String)>,
    /// Rendered query pairs, in declaration order.
    pub query_pairs: Vec<(&'static str, String)>,
    /// The full argument mapping, present only when the tool sends a body.
    pub body_arguments: Option<Map<String, Value>>,
}

impl BoundRequest {
    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path_values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Null or absent arguments count as an empty mapping.
pub fn argument_map(args: &Value) -> Result<Map<String, Value>, ToolError> {
    match args {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => Ok(map.clone()),
        other => Err(ToolError::validation("Invalid arguments object")
            .with_details(serde_json::json!({ "expected": "object", "received": json_kind(other) }))),
    }
}

pub fn bind(tool: &ToolSpec, args: &Value) -> Result<BoundRequest, ToolError> {
    let map = argument_map(args)?;

    let mut path_values = Vec::new();
    for param in tool.path_parameters() {
        let value = map.get(param.name).ok_or_else(|| {
            ToolError::validation(format!(
                "Missing required path parameter: {}",
                param.name
            ))
            .with_details(serde_json::json!({ "parameter": param.name }))
        })?;
        let text = match value {
            Value::String(text) if is_path_segment(text) => text.clone(),
            _ => return Err(invalid_path_parameter(param.name)),
        };
        path_values.push((param.name, text));
    }

    let query_pairs = tool
        .query_parameters()
        .filter_map(|param| match map.get(param.name) {
            None | Some(Value::Null) => None,
            Some(value) => Some((param.name, render_query_value(value))),
        })
        .collect();

    let body_arguments = if tool.expects_body() { Some(map) } else { None };

    Ok(BoundRequest {
        path_values,
        query_pairs,
        body_arguments,
    })
}

/// A value usable as one path segment: not blank, and not a dot segment the
/// URL parser would fold away.
pub fn is_path_segment(text: &str) -> bool {
    !text.trim().is_empty() && text != "." && text != ".."
}

pub fn invalid_path_parameter(name: &str) -> ToolError {
    ToolError::validation(format!("Invalid path parameter: {}", name)).with_details(
        serde_json::json!({
            "parameter": name,
            "expected": "non-empty string other than '.' or '..'",
        }),
    )
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Stringifies any JSON value for a query string. Arrays use the service's
/// comma-separated collection format.
pub fn render_query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_query_value)
            .collect::<Vec<_>>()
            .join(","),
    }
}
