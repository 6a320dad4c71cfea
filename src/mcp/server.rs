use crate::app::App;
use crate::constants::server::{NAME, PROTOCOL_VERSION, VERSION};
use crate::errors::{ErrorCode, McpError, ToolError};
use crate::mcp::catalog::tool_catalog;
use crate::mcp::protocol::{request_key, CallToolResult, JsonRpcRequest, JsonRpcResponse};
use crate::services::config::{CliArgs, ServiceConfig};
use crate::services::logger::Logger;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Request id to (call sequence number, token). The sequence number tells a
/// finishing call whether the entry is still its own when an id is reused.
type InFlight = Arc<Mutex<HashMap<String, (u64, CancellationToken)>>>;

enum Outcome {
    Reply(JsonRpcResponse),
    Spawned(JoinHandle<()>),
    Silent,
}

pub struct McpServer {
    app: Arc<App>,
    logger: Logger,
    in_flight: InFlight,
    next_call: AtomicU64,
}

impl McpServer {
    pub fn new(app: App) -> Self {
        let logger = app.logger.child("mcp");
        Self {
            app: Arc::new(app),
            logger,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            next_call: AtomicU64::new(0),
        }
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": NAME, "version": VERSION},
        })
    }

    fn handle_tools_list(&self) -> Value {
        serde_json::json!({ "tools": tool_catalog() })
    }

    fn handle_cancelled(&self, params: &Value) {
        let Some(request_id) = params.get("requestId") else {
            return;
        };
        let key = request_key(request_id);
        let token = self
            .in_flight
            .lock()
            .ok()
            .and_then(|guard| guard.get(&key).map(|(_, token)| token.clone()));
        match token {
            Some(token) => {
                self.logger.info(
                    "cancelling call",
                    Some(&serde_json::json!({ "request_id": request_id })),
                );
                token.cancel();
            }
            None => self.logger.debug(
                "cancel for unknown or finished call",
                Some(&serde_json::json!({ "request_id": request_id })),
            ),
        }
    }

    fn spawn_tools_call(
        &self,
        id: Value,
        params: &Value,
        out: mpsc::UnboundedSender<String>,
    ) -> Result<JoinHandle<()>, McpError> {
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| McpError::new(ErrorCode::InvalidParams, "Missing tool name"))?
            .to_string();
        let args = params.get("arguments").cloned().unwrap_or(Value::Null);

        let key = request_key(&id);
        let cancel = CancellationToken::new();
        let seq = self.next_call.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut guard) = self.in_flight.lock() {
            if guard.insert(key.clone(), (seq, cancel.clone())).is_some() {
                self.logger.warn(
                    "request id reused while a call is in flight",
                    Some(&serde_json::json!({ "request_id": id })),
                );
            }
        }

        let executor = self.app.tool_executor.clone();
        let in_flight = self.in_flight.clone();
        Ok(tokio::spawn(async move {
            let result = executor.invoke(&name, args, cancel).await;
            if let Ok(mut guard) = in_flight.lock() {
                if guard.get(&key).map(|(owner, _)| *owner) == Some(seq) {
                    guard.remove(&key);
                }
            }
            let body = serde_json::to_value(CallToolResult::from(result))
                .unwrap_or_else(|_| Value::Null);
            send_response(&out, &JsonRpcResponse::success(id, body));
        }))
    }

    fn handle_request(&self, request: JsonRpcRequest, out: &mpsc::UnboundedSender<String>) -> Outcome {
        let method = request.method.as_str();
        if method == "notifications/cancelled" {
            self.handle_cancelled(&request.params);
            return Outcome::Silent;
        }
        let Some(id) = request.id else {
            // Notifications (initialized and anything else) need no reply.
            return Outcome::Silent;
        };
        match method {
            "initialize" => Outcome::Reply(JsonRpcResponse::success(id, self.handle_initialize())),
            "ping" => Outcome::Reply(JsonRpcResponse::success(id, serde_json::json!({}))),
            "tools/list" => Outcome::Reply(JsonRpcResponse::success(id, self.handle_tools_list())),
            "tools/call" => match self.spawn_tools_call(id.clone(), &request.params, out.clone()) {
                Ok(handle) => Outcome::Spawned(handle),
                Err(err) => Outcome::Reply(JsonRpcResponse::failure(id, err)),
            },
            other => Outcome::Reply(JsonRpcResponse::failure(
                id,
                McpError::method_not_found(other),
            )),
        }
    }

    fn handle_line(&self, line: &str, out: &mpsc::UnboundedSender<String>) -> Outcome {
        let parsed: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(_) => {
                return Outcome::Reply(JsonRpcResponse::failure(
                    Value::Null,
                    McpError::parse_error(),
                ))
            }
        };
        match serde_json::from_value::<JsonRpcRequest>(parsed) {
            Ok(request) => self.handle_request(request, out),
            Err(_) => Outcome::Reply(JsonRpcResponse::failure(
                Value::Null,
                McpError::invalid_request(),
            )),
        }
    }

    /// Reads newline-delimited requests until EOF, then waits for calls still
    /// running before returning.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), ToolError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (out, mut rx) = mpsc::unbounded_channel::<String>();
        let writer_task = tokio::spawn(async move {
            let mut writer = BufWriter::new(writer);
            while let Some(payload) = rx.recv().await {
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<(), std::io::Error>(())
        });

        let mut lines = reader.lines();
        let mut calls: Vec<JoinHandle<()>> = Vec::new();
        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match self.handle_line(trimmed, &out) {
                Outcome::Reply(response) => send_response(&out, &response),
                Outcome::Spawned(handle) => {
                    calls.retain(|call| !call.is_finished());
                    calls.push(handle);
                }
                Outcome::Silent => {}
            }
        }

        for call in calls {
            if let Err(err) = call.await {
                self.logger.error(
                    "tool call task failed",
                    Some(&serde_json::json!({ "error": err.to_string() })),
                );
            }
        }
        drop(out);
        writer_task
            .await
            .map_err(|err| ToolError::internal(format!("writer task failed: {}", err)))??;
        Ok(())
    }

    pub async fn run_stdio(&self) -> Result<(), ToolError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}

fn send_response(out: &mpsc::UnboundedSender<String>, response: &JsonRpcResponse) {
    if let Ok(payload) = serde_json::to_string(response) {
        // The receiver only goes away once the server is shutting down.
        let _ = out.send(payload);
    }
}

pub async fn run_stdio(args: CliArgs) -> Result<(), ToolError> {
    let config = ServiceConfig::from_env_and_args(&args).map_err(ToolError::internal)?;
    let app = App::initialize(&config)?;
    let server = McpServer::new(app);
    server.run_stdio().await
}
