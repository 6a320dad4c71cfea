use crate::constants::server::LOG_CONTEXT;
use crate::errors::ToolError;
use crate::managers::training::TrainingToolHandler;
use crate::registry::{list_tools, validate_registry};
use crate::services::config::ServiceConfig;
use crate::services::context::RequestContext;
use crate::services::dispatcher::{Dispatcher, ReqwestTransport, Transport};
use crate::services::logger::Logger;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub context: Arc<RequestContext>,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    fn validate_tool_wiring(handlers: &HashMap<String, Arc<dyn ToolHandler>>) -> Result<(), ToolError> {
        let mut missing: Vec<&str> = list_tools()
            .iter()
            .map(|tool| tool.name)
            .filter(|name| !handlers.contains_key(*name))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort_unstable();
        Err(ToolError::internal("Tool wiring is incomplete")
            .with_details(serde_json::json!({ "missing_tools": missing })))
    }

    pub fn initialize(config: &ServiceConfig) -> Result<Self, ToolError> {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new()?);
        Self::with_transport(config.request_context(), transport, Logger::new(LOG_CONTEXT))
    }

    /// Builds one handler per registered tool around the given transport.
    pub fn with_transport(
        context: RequestContext,
        transport: Arc<dyn Transport>,
        logger: Logger,
    ) -> Result<Self, ToolError> {
        validate_registry()
            .map_err(|err| ToolError::internal(format!("Tool registry is invalid: {}", err)))?;

        let context = Arc::new(context);
        let dispatcher = Dispatcher::new(transport, logger.clone());
        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        for spec in list_tools() {
            handlers.insert(
                spec.name.to_string(),
                Arc::new(TrainingToolHandler::new(
                    spec,
                    context.clone(),
                    dispatcher.clone(),
                )),
            );
        }
        Self::validate_tool_wiring(&handlers)?;

        logger.info(
            "initialized",
            Some(&serde_json::json!({
                "tools": handlers.len(),
                "base_url": context.base_url.as_str(),
                "credential": context.credential.is_some(),
                "timeout_ms": context.timeout.map(|t| t.as_millis() as u64),
            })),
        );

        Ok(Self {
            tool_executor: Arc::new(ToolExecutor::new(logger.clone(), handlers)),
            logger,
            context,
        })
    }
}
