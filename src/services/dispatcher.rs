use crate::constants::headers;
use crate::constants::limits::LOG_BODY_PREVIEW;
use crate::errors::ToolError;
use crate::registry::{HttpMethod, ToolSpec};
use crate::services::binder::{invalid_path_parameter, is_path_segment, BoundRequest};
use crate::services::context::RequestContext;
use crate::services::logger::Logger;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes one HTTP exchange. The real implementation is [`ReqwestTransport`];
/// tests substitute stubs.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ToolError>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ToolError> {
        let client = Client::builder().build().map_err(|err| {
            ToolError::transport(format!("Failed to build HTTP client: {}", err))
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, ToolError> {
        let method = Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|err| ToolError::transport(format!("Failed to create request: {}", err)))?;
        let mut header_map = HeaderMap::new();
        for (name, value) in &request.headers {
            let value = HeaderValue::from_str(value).map_err(|err| {
                ToolError::transport(format!("Failed to create request: {}", err))
            })?;
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                ToolError::transport(format!("Failed to create request: {}", err))
            })?;
            header_map.insert(name, value);
        }

        let mut req = self
            .client
            .request(method, request.url)
            .headers(header_map);
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await.map_err(|err| map_reqwest_error("Request failed", err))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| map_reqwest_error("Failed to read response body", err))?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

pub(crate) fn map_reqwest_error(prefix: &str, err: reqwest::Error) -> ToolError {
    if err.is_timeout() {
        return ToolError::timeout(format!("{}: {}", prefix, err));
    }
    ToolError::transport(format!("{}: {}", prefix, err))
}

/// Substitutes escaped path values into the template below the base URL's
/// path and appends the query. No `?` is written when there are no pairs.
pub fn build_url(
    base: &Url,
    template: &str,
    bound: &BoundRequest,
) -> Result<Url, ToolError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            ToolError::transport(format!(
                "Failed to create request: base URL {} cannot carry a path",
                base
            ))
        })?;
        segments.pop_if_empty();
        for segment in template.trim_start_matches('/').split('/') {
            let placeholder = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'));
            match placeholder {
                Some(name) => {
                    let value = bound.path_value(name).ok_or_else(|| {
                        ToolError::validation(format!(
                            "Missing required path parameter: {}",
                            name
                        ))
                    })?;
                    // `push` silently drops "." and "..".
                    if !is_path_segment(value) {
                        return Err(invalid_path_parameter(name));
                    }
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }
    if !bound.query_pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in &bound.query_pairs {
            query.append_pair(name, value);
        }
    }
    Ok(url)
}

pub fn build_request(
    ctx: &RequestContext,
    tool: &ToolSpec,
    bound: &BoundRequest,
    body: Option<Vec<u8>>,
) -> Result<OutboundRequest, ToolError> {
    let url = build_url(&ctx.base_url, tool.path_template, bound)?;
    let mut request_headers = vec![(headers::ACCEPT, headers::JSON.to_string())];
    if let Some(key) = &ctx.credential {
        request_headers.push((headers::TRAINING_KEY, key.clone()));
    }
    if body.is_some() {
        request_headers.push((headers::CONTENT_TYPE, headers::JSON.to_string()));
    }
    Ok(OutboundRequest {
        method: tool.method,
        url,
        headers: request_headers,
        body,
    })
}

#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    logger: Logger,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, logger: Logger) -> Self {
        Self {
            transport,
            logger: logger.child("dispatch"),
        }
    }

    /// Sends the request once. Cancellation and the optional timeout abort the
    /// wait; whatever the service already did is not undone.
    pub async fn dispatch(
        &self,
        ctx: &RequestContext,
        request: OutboundRequest,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ToolError> {
        let method = request.method;
        let url = request.url.to_string();
        let started = Instant::now();
        self.logger.debug(
            "request",
            Some(&serde_json::json!({ "method": method.as_str(), "url": url })),
        );

        let send = self.transport.send(request);
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                Err(ToolError::cancelled("Request failed: request cancelled"))
            }
            result = async {
                match ctx.timeout {
                    Some(limit) => tokio::time::timeout(limit, send).await.unwrap_or_else(|_| {
                        Err(ToolError::timeout(format!(
                            "Request failed: request timed out after {} ms",
                            limit.as_millis()
                        )))
                    }),
                    None => send.await,
                }
            } => result,
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(response) if !(200..300).contains(&response.status) => self.logger.warn(
                "error response",
                Some(&serde_json::json!({
                    "method": method.as_str(),
                    "url": url,
                    "status": response.status,
                    "body": body_preview(response),
                    "duration_ms": duration_ms,
                })),
            ),
            Ok(response) => self.logger.debug(
                "response",
                Some(&serde_json::json!({
                    "method": method.as_str(),
                    "url": url,
                    "status": response.status,
                    "bytes": response.body.len(),
                    "duration_ms": duration_ms,
                })),
            ),
            Err(err) => self.logger.warn(
                "request failed",
                Some(&serde_json::json!({
                    "method": method.as_str(),
                    "url": url,
                    "code": err.code,
                    "duration_ms": duration_ms,
                })),
            ),
        }
        result
    }
}

fn body_preview(response: &RawResponse) -> String {
    let text = response.text();
    match text.char_indices().nth(LOG_BODY_PREVIEW) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}
