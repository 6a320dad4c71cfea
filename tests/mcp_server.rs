mod common;
use common::{app_with, StubTransport};

use custom_vision_mcp::app::App;
use custom_vision_mcp::mcp::server::McpServer;
use custom_vision_mcp::registry::{list_tools, ParamKind};
use jsonschema::JSONSchema;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

/// Feeds `requests` to a server over an in-memory pipe and collects every
/// line it writes back.
async fn exchange(app: App, requests: &[Value]) -> Vec<Value> {
    let input: String = requests
        .iter()
        .map(|request| format!("{}\n", request))
        .collect();
    let (writer, mut reader) = tokio::io::duplex(1 << 20);
    let server = McpServer::new(app);
    server
        .serve(input.as_bytes(), writer)
        .await
        .expect("serve");

    let mut output = String::new();
    reader.read_to_string(&mut output).await.expect("read output");
    output
        .lines()
        .map(|line| serde_json::from_str(line).expect("response is JSON"))
        .collect()
}

fn reply_for(responses: &[Value], id: Value) -> Value {
    responses
        .iter()
        .find(|response| response["id"] == id)
        .cloned()
        .unwrap_or_else(|| panic!("no reply for id {}", id))
}

fn quiet_app() -> App {
    app_with(Arc::new(StubTransport::fixed(200, "[]")))
}

#[tokio::test]
async fn initialize_reports_server_identity() {
    let responses = exchange(
        quiet_app(),
        &[json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}})],
    )
    .await;
    assert_eq!(responses.len(), 1);
    let result = &responses[0]["result"];
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "custom-vision-mcp");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn notifications_get_no_reply() {
    let responses = exchange(
        quiet_app(),
        &[
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": 99}}),
            json!({"jsonrpc": "2.0", "id": "p", "method": "ping"}),
        ],
    )
    .await;
    assert_eq!(responses, vec![json!({"jsonrpc": "2.0", "id": "p", "result": {}})]);
}

#[tokio::test]
async fn tools_list_schemas_compile_and_accept_sample_arguments() {
    let responses = exchange(
        quiet_app(),
        &[json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})],
    )
    .await;
    let tools = responses[0]["result"]["tools"]
        .as_array()
        .expect("tools array")
        .clone();
    assert_eq!(tools.len(), 46);

    for (listed, spec) in tools.iter().zip(list_tools()) {
        assert_eq!(listed["name"], spec.name);
        assert!(!listed["description"].as_str().unwrap_or_default().is_empty());

        let schema = JSONSchema::compile(&listed["inputSchema"])
            .unwrap_or_else(|err| panic!("{} schema: {}", spec.name, err));

        let mut args = Map::new();
        for param in spec.parameters {
            let sample = match param.kind {
                ParamKind::String => json!("x"),
                ParamKind::Number => json!(1.5),
                ParamKind::Boolean => json!(false),
                ParamKind::Array => json!(["x"]),
                ParamKind::Object => json!({}),
            };
            args.insert(param.name.to_string(), sample);
        }
        assert!(schema.is_valid(&Value::Object(args)), "{}", spec.name);

        if let Some(first_path) = spec.path_parameters().next() {
            let mut blank = Map::new();
            blank.insert(first_path.name.to_string(), json!(""));
            assert!(!schema.is_valid(&Value::Object(blank)), "{}", spec.name);
        }
    }
}

#[tokio::test]
async fn protocol_errors_use_json_rpc_codes() {
    let app = quiet_app();
    let server = McpServer::new(app);
    let input = "{not json\n{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"resources/list\"}\n{\"jsonrpc\":\"2.0\",\"id\":4,\"method\":\"tools/call\",\"params\":{}}\n";
    let (writer, mut reader) = tokio::io::duplex(1 << 16);
    server.serve(input.as_bytes(), writer).await.expect("serve");
    let mut output = String::new();
    reader.read_to_string(&mut output).await.expect("read");
    let responses: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json"))
        .collect();

    assert_eq!(reply_for(&responses, Value::Null)["error"]["code"], -32700);
    assert_eq!(reply_for(&responses, json!(3))["error"]["code"], -32601);
    let missing_name = reply_for(&responses, json!(4));
    assert_eq!(missing_name["error"]["code"], -32602);
    assert_eq!(missing_name["error"]["message"], "Missing tool name");
}

#[tokio::test]
async fn unknown_tool_is_a_tool_level_error() {
    let responses = exchange(
        quiet_app(),
        &[json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "get_project", "arguments": {}}
        })],
    )
    .await;
    let result = &reply_for(&responses, json!(5))["result"];
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().expect("text");
    assert!(text.starts_with("Unknown tool: get_project"), "{}", text);
    assert!(text.contains("get_projects"), "{}", text);
}

#[tokio::test]
async fn tools_call_returns_formatted_payload() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        r#"[{"id":"d1","name":"General","type":"Classification","exportable":false,"enabled":true}]"#,
    ));
    let responses = exchange(
        app_with(transport.clone()),
        &[json!({
            "jsonrpc": "2.0",
            "id": "call-1",
            "method": "tools/call",
            "params": {"name": "get_domains"}
        })],
    )
    .await;
    let result = &reply_for(&responses, json!("call-1"))["result"];
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
    let text = result["content"][0]["text"].as_str().expect("text");
    let payload: Value = serde_json::from_str(text).expect("payload JSON");
    assert_eq!(payload[0]["name"], "General");
    assert!(text.contains('\n'));
    assert_eq!(transport.calls(), 1);
}
