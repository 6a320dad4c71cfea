use crate::models::{BodyShape, ResponseShape};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    pub fn json_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub location: ParamLocation,
    pub required: bool,
    pub kind: ParamKind,
    pub description: &'static str,
}

impl ParameterSpec {
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            required: true,
            kind: ParamKind::String,
            description,
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            required: false,
            kind,
            description,
        }
    }

    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Body,
            required: false,
            kind,
            description,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path_template: &'static str,
    pub parameters: &'static [ParameterSpec],
    pub body_shape: Option<BodyShape>,
    pub response_shape: ResponseShape,
}

impl ToolSpec {
    pub fn path_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters
            .iter()
            .filter(|param| param.location == ParamLocation::Path)
    }

    pub fn query_parameters(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters
            .iter()
            .filter(|param| param.location == ParamLocation::Query)
    }

    /// Body codec runs only for mutating methods that declare a body shape.
    pub fn expects_body(&self) -> bool {
        self.method.carries_body() && self.body_shape.is_some()
    }

    /// Placeholder names in `path_template`, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        template_placeholders(self.path_template)
    }

    /// Checks the declaration invariants: every `{param}` has exactly one
    /// required path parameter, every path parameter has a placeholder, and a
    /// body shape only appears on a mutating method.
    pub fn check(&self) -> Result<(), String> {
        let placeholders = self.placeholders();
        for placeholder in &placeholders {
            let matching: Vec<&ParameterSpec> = self
                .path_parameters()
                .filter(|param| param.name == *placeholder)
                .collect();
            if matching.len() != 1 {
                return Err(format!(
                    "{}: placeholder {{{}}} must map to exactly one path parameter (found {})",
                    self.name,
                    placeholder,
                    matching.len()
                ));
            }
            if !matching[0].required {
                return Err(format!(
                    "{}: path parameter {} must be required",
                    self.name, placeholder
                ));
            }
        }
        for param in self.path_parameters() {
            if !placeholders.contains(&param.name) {
                return Err(format!(
                    "{}: path parameter {} has no placeholder in {}",
                    self.name, param.name, self.path_template
                ));
            }
        }
        if self.body_shape.is_some() && !self.method.carries_body() {
            return Err(format!(
                "{}: {} requests cannot carry a {} body",
                self.name,
                self.method,
                self.body_shape.map(BodyShape::name).unwrap_or_default()
            ));
        }
        if !self.path_template.starts_with('/') {
            return Err(format!(
                "{}: path template must start with '/'",
                self.name
            ));
        }
        Ok(())
    }
}

pub(crate) fn template_placeholders(template: &'static str) -> Vec<&'static str> {
    template
        .split('/')
        .filter_map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParameterSpec] = &[
        ParameterSpec::path("projectId", "The project id."),
        ParameterSpec::path("tagId", "The tag id."),
        ParameterSpec::query("iterationId", ParamKind::String, "Iteration."),
    ];

    fn spec(template: &'static str, params: &'static [ParameterSpec]) -> ToolSpec {
        ToolSpec {
            name: "get_projects_projectId_tags_tagId",
            description: "Get a tag.",
            method: HttpMethod::Get,
            path_template: template,
            parameters: params,
            body_shape: None,
            response_shape: ResponseShape::Tag,
        }
    }

    #[test]
    fn placeholders_follow_template_order() {
        let tool = spec("/projects/{projectId}/tags/{tagId}", PARAMS);
        assert_eq!(tool.placeholders(), vec!["projectId", "tagId"]);
        assert!(tool.check().is_ok());
    }

    #[test]
    fn check_rejects_placeholder_without_parameter() {
        const ONLY_PROJECT: &[ParameterSpec] =
            &[ParameterSpec::path("projectId", "The project id.")];
        let tool = spec("/projects/{projectId}/tags/{tagId}", ONLY_PROJECT);
        let err = tool.check().expect_err("must fail");
        assert!(err.contains("{tagId}"));
    }

    #[test]
    fn check_rejects_dangling_path_parameter() {
        let tool = spec("/projects/{projectId}/tags", PARAMS);
        let err = tool.check().expect_err("must fail");
        assert!(err.contains("tagId"));
    }

    #[test]
    fn check_rejects_body_on_get() {
        let mut tool = spec("/projects/{projectId}/tags/{tagId}", PARAMS);
        tool.body_shape = Some(BodyShape::Tag);
        assert!(tool.check().is_err());
        tool.method = HttpMethod::Patch;
        assert!(tool.check().is_ok());
        assert!(tool.expects_body());
    }
}
