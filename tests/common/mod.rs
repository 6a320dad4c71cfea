#![allow(dead_code)]

use async_trait::async_trait;
use custom_vision_mcp::app::App;
use custom_vision_mcp::errors::ToolError;
use custom_vision_mcp::services::context::RequestContext;
use custom_vision_mcp::services::dispatcher::{OutboundRequest, RawResponse, Transport};
use custom_vision_mcp::services::logger::{LogLevel, Logger};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;
use url::Url;

pub static ENV_LOCK: Lazy<AsyncMutex<()>> = Lazy::new(|| AsyncMutex::new(()));

pub const BASE_URL: &str = "https://vision.test/customvision/v3.3/training";
pub const TRAINING_KEY: &str = "test-key";

type Responder = Box<dyn Fn(&OutboundRequest) -> RawResponse + Send + Sync>;

/// Counts calls, records requests and answers from a closure.
pub struct StubTransport {
    calls: AtomicUsize,
    requests: Mutex<Vec<OutboundRequest>>,
    delay: Option<Duration>,
    responder: Responder,
}

impl StubTransport {
    pub fn respond_with<F>(responder: F) -> Self
    where
        F: Fn(&OutboundRequest) -> RawResponse + Send + Sync + 'static,
    {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            delay: None,
            responder: Box::new(responder),
        }
    }

    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.as_bytes().to_vec();
        Self::respond_with(move |_| RawResponse {
            status,
            body: body.clone(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> OutboundRequest {
        self.requests().pop().expect("at least one request")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = (self.responder)(&request);
        self.requests.lock().expect("requests lock").push(request);
        Ok(response)
    }
}

pub fn quiet_logger() -> Logger {
    Logger::new("test").with_level(LogLevel::Error)
}

pub fn context(base_url: &str) -> RequestContext {
    RequestContext::new(
        Url::parse(base_url).expect("base url"),
        Some(TRAINING_KEY.to_string()),
    )
}

pub fn app_with(transport: Arc<dyn Transport>) -> App {
    App::with_transport(context(BASE_URL), transport, quiet_logger()).expect("app")
}
