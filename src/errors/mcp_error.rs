use std::fmt;

/// JSON-RPC 2.0 error codes the server answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
        }
    }
}

/// Protocol-level failure of a request line. Tool failures never surface as
/// these; they travel inside a `tools/call` result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpError {
    pub code: ErrorCode,
    pub message: String,
}

impl McpError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn parse_error() -> Self {
        Self::new(ErrorCode::ParseError, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::new(ErrorCode::InvalidRequest, "Invalid request")
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotFound,
            format!("Method not found: {}", method),
        )
    }
}

impl fmt::Display for McpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code.as_i32())
    }
}

impl std::error::Error for McpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_json_rpc() {
        assert_eq!(McpError::parse_error().code.as_i32(), -32700);
        assert_eq!(McpError::invalid_request().code.as_i32(), -32600);
        assert_eq!(ErrorCode::InvalidParams.as_i32(), -32602);
    }

    #[test]
    fn method_not_found_names_the_method() {
        let err = McpError::method_not_found("resources/list");
        assert_eq!(err.code, ErrorCode::MethodNotFound);
        assert_eq!(err.to_string(), "Method not found: resources/list (-32601)");
    }
}
