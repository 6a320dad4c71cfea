mod common;
use common::{app_with, StubTransport, BASE_URL};

use custom_vision_mcp::registry::{list_tools, ParamKind, ParamLocation, ToolSpec};
use custom_vision_mcp::services::tool_executor::ToolResult;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn sample_value(kind: ParamKind) -> Value {
    match kind {
        ParamKind::String => json!("v"),
        ParamKind::Number => json!(3),
        ParamKind::Boolean => json!(true),
        ParamKind::Array => json!(["a", "b"]),
        ParamKind::Object => json!({}),
    }
}

fn path_args(tool: &ToolSpec, skip: Option<&str>) -> Map<String, Value> {
    tool.parameters
        .iter()
        .filter(|p| p.location == ParamLocation::Path && Some(p.name) != skip)
        .map(|p| (p.name.to_string(), json!("x")))
        .collect()
}

#[tokio::test]
async fn missing_path_parameter_is_named_and_never_sent() {
    let transport = Arc::new(StubTransport::fixed(200, "{}"));
    let app = app_with(transport.clone());
    for tool in list_tools() {
        for param in tool.path_parameters() {
            let args = Value::Object(path_args(tool, Some(param.name)));
            let result = app
                .tool_executor
                .invoke(tool.name, args, CancellationToken::new())
                .await;
            assert_eq!(
                result,
                ToolResult::Failure(format!("Missing required path parameter: {}", param.name)),
                "{}",
                tool.name
            );
        }
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn empty_arguments_for_project_tool_make_zero_calls() {
    let transport = Arc::new(StubTransport::fixed(200, "{}"));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke("get_projects_projectId", json!({}), CancellationToken::new())
        .await;
    assert_eq!(
        result,
        ToolResult::Failure("Missing required path parameter: projectId".to_string())
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn dot_segment_path_values_are_rejected_before_sending() {
    let transport = Arc::new(StubTransport::fixed(200, "[]"));
    let app = app_with(transport.clone());
    for dots in [".", ".."] {
        let result = app
            .tool_executor
            .invoke(
                "get_projects_projectId_tags",
                json!({ "projectId": dots }),
                CancellationToken::new(),
            )
            .await;
        assert_eq!(
            result,
            ToolResult::Failure("Invalid path parameter: projectId".to_string())
        );
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn query_string_is_absent_or_in_declaration_order() {
    let transport = Arc::new(StubTransport::fixed(200, "{}"));
    let app = app_with(transport.clone());
    for tool in list_tools() {
        let declared: Vec<&str> = tool.query_parameters().map(|p| p.name).collect();
        if declared.is_empty() {
            continue;
        }

        let bare = Value::Object(path_args(tool, None));
        let result = app
            .tool_executor
            .invoke(tool.name, bare, CancellationToken::new())
            .await;
        assert!(!result.is_failure(), "{}: {}", tool.name, result.text());
        let url = transport.last_request().url;
        assert!(url.query().is_none(), "{} sent {}", tool.name, url);
        assert!(!url.as_str().contains('?'));

        let mut full = path_args(tool, None);
        for param in tool.query_parameters() {
            full.insert(param.name.to_string(), sample_value(param.kind));
        }
        let result = app
            .tool_executor
            .invoke(tool.name, Value::Object(full), CancellationToken::new())
            .await;
        assert!(!result.is_failure(), "{}: {}", tool.name, result.text());
        let url = transport.last_request().url;
        let sent: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(sent, declared, "{}", tool.name);
        assert_eq!(url.query().map(|q| q.matches('&').count() + 1), Some(declared.len()));
    }
}

#[tokio::test]
async fn unparsable_success_body_is_returned_verbatim() {
    let body = "<<definitely not json>>";
    let transport = Arc::new(StubTransport::fixed(200, body));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke("get_projects", Value::Null, CancellationToken::new())
        .await;
    assert_eq!(result, ToolResult::Success(body.to_string()));
}

#[tokio::test]
async fn error_statuses_carry_the_exact_body() {
    for status in [400u16, 401, 404, 409, 429, 500, 503] {
        let body = format!(r#"{{"code":"E{}","message":"bad \"thing\" ü"}}"#, status);
        let transport = Arc::new(StubTransport::fixed(status, &body));
        let app = app_with(transport);
        let result = app
            .tool_executor
            .invoke("get_projects", Value::Null, CancellationToken::new())
            .await;
        assert!(result.is_failure(), "{}", status);
        assert!(result.text().contains(&body), "{}", result.text());
    }
}

#[tokio::test]
async fn not_found_scenario() {
    let body = r#"{"code":"NotFound","message":"no such id"}"#;
    let transport = Arc::new(StubTransport::fixed(404, body));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke(
            "get_projects_projectId",
            json!({"projectId": "missing"}),
            CancellationToken::new(),
        )
        .await;
    assert_eq!(result, ToolResult::Failure(format!("API error: {}", body)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn create_project_scenario() {
    let transport = Arc::new(StubTransport::fixed(
        201,
        r#"{"id":"abc","name":"Widgets","settings":{"domainId":"d1","classificationType":"Multiclass"}}"#,
    ));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke("post_projects", json!({"name": "Widgets"}), CancellationToken::new())
        .await;

    let request = transport.last_request();
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.as_str(), format!("{}/projects?name=Widgets", BASE_URL));
    assert!(request.body.is_none());
    assert!(request.header("Content-Type").is_none());
    assert_eq!(request.header("Training-Key"), Some("test-key"));
    assert_eq!(request.header("Accept"), Some("application/json"));

    let text = match result {
        ToolResult::Success(text) => text,
        ToolResult::Failure(text) => panic!("expected success, got {}", text),
    };
    assert!(text.starts_with("{\n  \"id\": \"abc\",\n  \"name\": \"Widgets\""), "{}", text);
    let value: Value = serde_json::from_str(&text).expect("pretty JSON");
    assert_eq!(value["id"], "abc");
    assert_eq!(value["name"], "Widgets");
    assert_eq!(value["settings"]["domainId"], "d1");
    assert_eq!(value["settings"]["classificationType"], "Multiclass");
}

#[tokio::test]
async fn invalid_argument_object_is_rejected() {
    let transport = Arc::new(StubTransport::fixed(200, "[]"));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke("get_projects", json!("oops"), CancellationToken::new())
        .await;
    assert_eq!(result, ToolResult::Failure("Invalid arguments object".to_string()));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn update_tag_sends_shaped_body() {
    let transport = Arc::new(StubTransport::fixed(
        200,
        r#"{"id":"t1","name":"cat","description":"felines","type":"Regular","imageCount":4}"#,
    ));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke(
            "patch_projects_projectId_tags_tagId",
            json!({
                "projectId": "p1",
                "tagId": "t1",
                "name": "cat",
                "description": "felines",
                "type": "Regular",
                "unrelated": {"ignored": true}
            }),
            CancellationToken::new(),
        )
        .await;
    assert!(!result.is_failure(), "{}", result.text());

    let request = transport.last_request();
    assert_eq!(request.url.path(), "/customvision/v3.3/training/projects/p1/tags/t1");
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    let body: Value =
        serde_json::from_slice(request.body.as_deref().expect("body")).expect("json body");
    assert_eq!(
        body,
        json!({"name": "cat", "description": "felines", "type": "Regular"})
    );
}

#[tokio::test]
async fn mistyped_body_field_is_a_conversion_failure() {
    let transport = Arc::new(StubTransport::fixed(200, "{}"));
    let app = app_with(transport.clone());
    let result = app
        .tool_executor
        .invoke(
            "post_projects_projectId_images_urls",
            json!({"projectId": "p1", "images": "http://img"}),
            CancellationToken::new(),
        )
        .await;
    assert!(result.is_failure());
    assert!(result
        .text()
        .starts_with("Failed to convert arguments to request type: field `images`"));
    assert_eq!(transport.calls(), 0);
}
