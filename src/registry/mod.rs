//! Static declarations of every Custom Vision Training tool.
//!
//! Each tool is a [`ToolSpec`]: a name, an HTTP method, a path template and the
//! parameters that feed it. The generic engine in `managers::training` turns a
//! spec plus an argument mapping into one HTTP exchange.

mod domains;
mod images;
mod predictions;
mod projects;
pub mod spec;
mod tags;

pub use spec::{HttpMethod, ParamKind, ParamLocation, ParameterSpec, ToolSpec};

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static TOOL_SPECS: Lazy<Vec<ToolSpec>> = Lazy::new(|| {
    [
        projects::TOOLS,
        images::TOOLS,
        tags::TOOLS,
        predictions::TOOLS,
        domains::TOOLS,
    ]
    .concat()
});

static TOOL_MAP: Lazy<HashMap<&'static str, &'static ToolSpec>> =
    Lazy::new(|| TOOL_SPECS.iter().map(|tool| (tool.name, tool)).collect());

pub fn list_tools() -> &'static [ToolSpec] {
    &TOOL_SPECS
}

pub fn tool_by_name(name: &str) -> Option<&'static ToolSpec> {
    TOOL_MAP.get(name).copied()
}

/// Checks every declaration once at startup. A failure here is a programming
/// error in the tables above, so the server refuses to start.
pub fn validate_registry() -> Result<(), String> {
    let mut seen = HashSet::new();
    for tool in TOOL_SPECS.iter() {
        if !seen.insert(tool.name) {
            return Err(format!("duplicate tool name: {}", tool.name));
        }
        tool.check()?;
        let mut params = HashSet::new();
        for param in tool.parameters {
            if !params.insert(param.name) {
                return Err(format!(
                    "{}: parameter {} is declared twice",
                    tool.name, param.name
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyShape, ResponseShape};

    #[test]
    fn registry_declares_every_training_operation() {
        assert_eq!(list_tools().len(), 46);
        validate_registry().expect("registry is consistent");
    }

    #[test]
    fn lookup_by_name() {
        let tool = tool_by_name("post_projects").expect("post_projects");
        assert_eq!(tool.method, HttpMethod::Post);
        assert_eq!(tool.path_template, "/projects");
        assert!(tool.body_shape.is_none());
        assert_eq!(tool.response_shape, ResponseShape::Project);
        assert!(tool_by_name("post_project").is_none());
    }

    #[test]
    fn names_follow_method_and_path() {
        for tool in list_tools() {
            let expected = format!(
                "{}{}",
                tool.method.as_str().to_ascii_lowercase(),
                tool.path_template.replace(['{', '}'], "").replace('/', "_")
            );
            assert_eq!(tool.name, expected);
        }
    }

    #[test]
    fn body_tools_use_mutating_methods() {
        let with_body: Vec<&ToolSpec> = list_tools()
            .iter()
            .filter(|tool| tool.body_shape.is_some())
            .collect();
        assert!(with_body.iter().all(|tool| tool.expects_body()));
        let train = tool_by_name("post_projects_projectId_train").expect("train");
        assert_eq!(train.body_shape, Some(BodyShape::TrainingParameters));
    }

    #[test]
    fn deletes_answer_with_service_messages() {
        for tool in list_tools()
            .iter()
            .filter(|tool| tool.method == HttpMethod::Delete)
        {
            assert_eq!(tool.response_shape, ResponseShape::ServiceMessage, "{}", tool.name);
        }
    }
}
