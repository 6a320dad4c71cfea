use crate::errors::ToolError;
use crate::registry::ToolSpec;
use crate::services::binder::bind;
use crate::services::context::RequestContext;
use crate::services::decoder::decode_response;
use crate::services::dispatcher::{build_request, Dispatcher};
use crate::services::formatter::format_result;
use crate::services::tool_executor::ToolHandler;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Handler for one Training API operation. All 46 tools share this engine and
/// differ only in their [`ToolSpec`].
pub struct TrainingToolHandler {
    spec: &'static ToolSpec,
    context: Arc<RequestContext>,
    dispatcher: Dispatcher,
}

impl TrainingToolHandler {
    pub fn new(spec: &'static ToolSpec, context: Arc<RequestContext>, dispatcher: Dispatcher) -> Self {
        Self {
            spec,
            context,
            dispatcher,
        }
    }

    pub async fn run(&self, args: &Value, cancel: &CancellationToken) -> Result<String, ToolError> {
        let bound = bind(self.spec, args)?;
        let body = match (self.spec.body_shape, &bound.body_arguments) {
            (Some(shape), Some(arguments)) => Some(shape.encode(arguments)?),
            _ => None,
        };
        let request = build_request(&self.context, self.spec, &bound, body)?;
        let response = self.dispatcher.dispatch(&self.context, request, cancel).await?;
        let decoded = decode_response(self.spec.response_shape, &response)?;
        format_result(decoded)
    }
}

#[async_trait]
impl ToolHandler for TrainingToolHandler {
    async fn handle(&self, args: Value, cancel: CancellationToken) -> Result<String, ToolError> {
        self.run(&args, &cancel).await
    }
}
