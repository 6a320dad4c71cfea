use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::constants::limits::SUGGESTION_COUNT;
use crate::errors::ToolError;
use crate::services::logger::Logger;
use crate::utils::suggest::suggest;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: Value, cancel: CancellationToken) -> Result<String, ToolError>;
}

/// What the caller sees. Failures are text too; there is no structured
/// error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Success(String),
    Failure(String),
}

impl ToolResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolResult::Failure(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ToolResult::Success(text) | ToolResult::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ToolResult::Success(text) | ToolResult::Failure(text) => text,
        }
    }
}

impl From<Result<String, ToolError>> for ToolResult {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => ToolResult::Success(text),
            Err(err) => ToolResult::Failure(match err.hint {
                Some(hint) => format!("{}\nHint: {}", err.message, hint),
                None => err.message,
            }),
        }
    }
}

#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: HashMap<String, Arc<dyn ToolHandler>>) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
        }
    }

    fn unknown_tool(&self, tool: &str) -> ToolError {
        let mut candidates: Vec<String> = self.handlers.keys().cloned().collect();
        candidates.sort();
        let suggestions = suggest(tool, &candidates, SUGGESTION_COUNT);
        let err = ToolError::validation(format!("Unknown tool: {}", tool));
        if suggestions.is_empty() {
            err.with_hint("Call tools/list to see the available tools.")
        } else {
            err.with_hint(format!("Did you mean: {}", suggestions.join(", ")))
                .with_details(serde_json::json!({ "suggestions": suggestions }))
        }
    }

    pub async fn execute(
        &self,
        tool: &str,
        args: Value,
        cancel: CancellationToken,
    ) -> Result<String, ToolError> {
        let handler = self
            .handlers
            .get(tool)
            .cloned()
            .ok_or_else(|| self.unknown_tool(tool))?;

        let trace_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();
        self.logger.debug(
            "call started",
            Some(&serde_json::json!({ "tool": tool, "trace_id": trace_id })),
        );

        let result = handler.handle(args, cancel).await;

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(text) => self.logger.info(
                "call finished",
                Some(&serde_json::json!({
                    "tool": tool,
                    "trace_id": trace_id,
                    "duration_ms": duration_ms,
                    "bytes": text.len(),
                })),
            ),
            Err(err) => self.logger.warn(
                "call failed",
                Some(&serde_json::json!({
                    "tool": tool,
                    "trace_id": trace_id,
                    "duration_ms": duration_ms,
                    "kind": err.kind.as_str(),
                    "code": err.code,
                    "status": err.status,
                })),
            ),
        }
        result
    }

    /// Runs one invocation and folds every error into a failure text.
    pub async fn invoke(&self, tool: &str, args: Value, cancel: CancellationToken) -> ToolResult {
        ToolResult::from(self.execute(tool, args, cancel).await)
    }
}
