use crate::errors::ToolError;
use crate::models::{CustomVisionError, ResponseShape, TypedPayload};
use crate::services::dispatcher::RawResponse;

#[derive(Debug)]
pub enum Decoded {
    Typed(Box<dyn TypedPayload>),
    /// Response text passed through unchanged.
    Raw(String),
}

/// Status >= 400 is a remote failure carrying the body verbatim. Below that,
/// a body that does not fit the shape falls back to raw text.
pub fn decode_response(shape: ResponseShape, response: &RawResponse) -> Result<Decoded, ToolError> {
    if response.status >= 400 {
        return Err(remote_failure(response));
    }
    match shape.decode(&response.body) {
        Ok(payload) => Ok(Decoded::Typed(payload)),
        Err(_) => Ok(Decoded::Raw(response.text())),
    }
}

fn remote_failure(response: &RawResponse) -> ToolError {
    let err = ToolError::remote_api(response.status, format!("API error: {}", response.text()));
    match serde_json::from_slice::<CustomVisionError>(&response.body) {
        Ok(parsed) if !parsed.code.is_empty() => err
            .with_details(serde_json::json!({
                "code": parsed.code,
                "message": parsed.message,
            })),
        _ => err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolErrorKind;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn not_found_keeps_the_exact_body() {
        let body = r#"{"code":"NotFound","message":"no such id"}"#;
        let err = decode_response(ResponseShape::Project, &response(404, body))
            .expect_err("must fail");
        assert_eq!(err.kind, ToolErrorKind::RemoteApi);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, format!("API error: {}", body));
        assert_eq!(
            err.details,
            Some(json!({"code": "NotFound", "message": "no such id"}))
        );
    }

    #[test]
    fn opaque_error_bodies_are_not_parsed() {
        let err = decode_response(ResponseShape::Tags, &response(502, "<html>bad gateway</html>"))
            .expect_err("must fail");
        assert_eq!(err.message, "API error: <html>bad gateway</html>");
        assert!(err.details.is_none());
    }

    #[test]
    fn unparsable_success_falls_back_to_text() {
        match decode_response(ResponseShape::Project, &response(200, "not json {")).expect("ok") {
            Decoded::Raw(text) => assert_eq!(text, "not json {"),
            Decoded::Typed(_) => panic!("expected raw fallback"),
        }
    }

    #[test]
    fn empty_delete_response_passes_through() {
        match decode_response(ResponseShape::ServiceMessage, &response(204, "")).expect("ok") {
            Decoded::Raw(text) => assert!(text.is_empty()),
            Decoded::Typed(_) => panic!("expected raw"),
        }
    }

    #[test]
    fn delete_service_message_is_typed() {
        let body = r#"{"code":"NoError","message":"deleted"}"#;
        match decode_response(ResponseShape::ServiceMessage, &response(200, body)).expect("ok") {
            Decoded::Typed(value) => assert_eq!(
                value.to_json_value().expect("json"),
                json!({"code": "NoError", "message": "deleted"})
            ),
            Decoded::Raw(_) => panic!("expected typed"),
        }
    }

    #[test]
    fn typed_success() {
        let decoded = decode_response(ResponseShape::Count, &response(200, "17")).expect("ok");
        match decoded {
            Decoded::Typed(value) => assert_eq!(value.to_json_value().expect("json"), json!(17)),
            Decoded::Raw(_) => panic!("expected typed"),
        }
    }
}
