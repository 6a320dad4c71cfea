use crate::errors::ToolError;
use crate::services::decoder::Decoded;

/// Typed values render as 2-space indented JSON; raw text passes through.
pub fn format_result(decoded: Decoded) -> Result<String, ToolError> {
    match decoded {
        Decoded::Typed(payload) => payload
            .to_pretty_json()
            .map_err(|err| ToolError::serialization(format!("Failed to format JSON: {}", err))),
        Decoded::Raw(text) => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, ProjectSettings};

    #[test]
    fn typed_values_are_indented() {
        let project = Project {
            id: Some("abc".to_string()),
            name: "Widgets".to_string(),
            settings: ProjectSettings::default(),
            ..Default::default()
        };
        let text = format_result(Decoded::Typed(Box::new(project))).expect("format");
        assert!(text.starts_with("{\n  \"id\": \"abc\",\n  \"name\": \"Widgets\""));
    }

    #[test]
    fn raw_text_is_untouched() {
        let text = format_result(Decoded::Raw("  plain\n".to_string())).expect("format");
        assert_eq!(text, "  plain\n");
    }
}
