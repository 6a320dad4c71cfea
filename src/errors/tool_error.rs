use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// Layer an invocation failed in. Validation errors never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    Validation,
    Serialization,
    Transport,
    RemoteApi,
    /// Startup and wiring failures. Never produced by a single invocation.
    Internal,
}

impl ToolErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolErrorKind::Validation => "validation",
            ToolErrorKind::Serialization => "serialization",
            ToolErrorKind::Transport => "transport",
            ToolErrorKind::RemoteApi => "remote_api",
            ToolErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
            status: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Validation, "INVALID_PARAMS", message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Serialization, "SERIALIZATION", message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Transport, "TRANSPORT", message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Transport, "TIMEOUT", message)
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Transport, "CANCELLED", message)
    }

    pub fn remote_api(status: u16, message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::RemoteApi, "REMOTE_API", message).with_status(status)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ToolErrorKind::Transport && self.code == "CANCELLED"
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_api_error_carries_status() {
        let err = ToolError::remote_api(404, "API error: nope");
        assert_eq!(err.kind, ToolErrorKind::RemoteApi);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "API error: nope");
    }

    #[test]
    fn cancelled_is_a_transport_error() {
        let err = ToolError::cancelled("Request failed: request cancelled");
        assert_eq!(err.kind, ToolErrorKind::Transport);
        assert!(err.is_cancelled());
        assert!(!ToolError::timeout("late").is_cancelled());
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let err = ToolError::serialization("bad").with_hint("fix it");
        let value = serde_json::to_value(&err).expect("serialize");
        assert_eq!(value["kind"], "serialization");
        assert_eq!(value["hint"], "fix it");
        assert!(value.get("details").is_none());
    }
}
