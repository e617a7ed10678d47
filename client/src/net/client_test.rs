use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;

use super::*;
use crate::net::error::GENERIC_ERROR_MESSAGE;
use crate::state::toast::{self, ToastLevel};

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    value: u32,
}

fn recording_sink() -> Rc<RefCell<Vec<(ToastLevel, String)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = seen.clone();
    toast::install_sink(move |level, message| sink_seen.borrow_mut().push((level, message)));
    seen
}

fn envelope(status: u16, body: &str) -> Result<ResponseEnvelope, ApiError> {
    Ok(ResponseEnvelope { status, body: body.to_owned() })
}

#[test]
fn default_client_uses_fixed_base_and_timeout() {
    let config = HttpClient::default().build_request::<()>(Method::Get, "/health", None).unwrap();
    assert_eq!(config.url, "/api/v1/health");
    assert_eq!(config.timeout_ms, 30_000);
}

#[test]
fn shared_client_is_a_single_instance() {
    assert!(std::ptr::eq(client(), client()));
    assert_eq!(client(), &HttpClient::default());
}

#[test]
fn url_joins_with_or_without_leading_slash() {
    let client = HttpClient::new("/api/v1/", 1);
    assert_eq!(client.url("/health"), "/api/v1/health");
    assert_eq!(client.url("tools"), "/api/v1/tools");
}

#[test]
fn build_request_sets_json_header_and_body() {
    let config = HttpClient::default()
        .build_request(Method::Post, "/mod/affix/probability", Some(&serde_json::json!({ "slotCount": 2 })))
        .unwrap();
    assert_eq!(config.method, Method::Post);
    assert_eq!(config.url, "/api/v1/mod/affix/probability");
    assert_eq!(config.header("content-type"), Some("application/json"));
    assert_eq!(config.body.as_deref(), Some(r#"{"slotCount":2}"#));
    assert_eq!(config.timeout_ms, REQUEST_TIMEOUT_MS);
}

#[test]
fn build_request_without_body_leaves_body_empty() {
    let config = HttpClient::default().build_request::<()>(Method::Get, "/health", None).unwrap();
    assert_eq!(config.method.as_str(), "GET");
    assert_eq!(config.body, None);
}

#[test]
fn intercept_request_passes_config_through() {
    let config = HttpClient::default().build_request::<()>(Method::Get, "/tools", None).unwrap();
    assert_eq!(intercept_request(Ok(config.clone())), Ok(config));
}

#[test]
fn intercept_request_reraises_failures() {
    let err = ApiError::Request("bad body".to_owned());
    assert_eq!(intercept_request(Err(err.clone())), Err(err));
}

#[test]
fn success_unwraps_plain_body() {
    let seen = recording_sink();
    let payload: Payload = intercept_response(envelope(200, r#"{"value":7}"#)).unwrap();
    assert_eq!(payload, Payload { value: 7 });
    assert!(seen.borrow().is_empty());
    toast::clear_sink();
}

#[test]
fn success_unwraps_data_envelope() {
    let payload: Payload = intercept_response(envelope(200, r#"{"data":{"value":3},"message":"ok"}"#)).unwrap();
    assert_eq!(payload, Payload { value: 3 });
}

#[test]
fn unwrap_payload_keeps_objects_with_foreign_keys() {
    let value = serde_json::json!({ "data": 1, "total": 2 });
    assert_eq!(unwrap_payload(value.clone()), value);
    assert_eq!(unwrap_payload(serde_json::json!({ "data": [1, 2] })), serde_json::json!([1, 2]));
}

#[test]
fn empty_success_body_decodes_as_unit() {
    let result: Result<(), ApiError> = intercept_response(envelope(204, ""));
    assert_eq!(result, Ok(()));
}

#[test]
fn failure_with_message_toasts_exact_message() {
    let seen = recording_sink();
    let result: Result<Payload, ApiError> =
        intercept_response(envelope(400, r#"{"error":"bad_request","message":"词条数量必须在1-10之间"}"#));
    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.display_message(), "词条数量必须在1-10之间");
    assert_eq!(*seen.borrow(), vec![(ToastLevel::Error, "词条数量必须在1-10之间".to_owned())]);
    toast::clear_sink();
}

#[test]
fn failure_without_message_toasts_fallback() {
    let seen = recording_sink();
    let result: Result<Payload, ApiError> = intercept_response(envelope(500, r#"{"error":"internal"}"#));
    assert_eq!(result, Err(ApiError::Status { status: 500, message: None }));
    assert_eq!(*seen.borrow(), vec![(ToastLevel::Error, GENERIC_ERROR_MESSAGE.to_owned())]);
    toast::clear_sink();
}

#[test]
fn failure_with_non_json_body_toasts_fallback() {
    let seen = recording_sink();
    let _ = intercept_response::<Payload>(envelope(502, "<html>Bad Gateway</html>"));
    assert_eq!(seen.borrow()[0].1, GENERIC_ERROR_MESSAGE);
    toast::clear_sink();
}

#[test]
fn message_is_kept_verbatim_and_only_empty_falls_back() {
    assert_eq!(extract_message(r#"{"message":""}"#), None);
    assert_eq!(extract_message(r#"{"message":" X "}"#), Some(" X ".to_owned()));
    assert_eq!(extract_message(r#"{"message":"   "}"#), Some("   ".to_owned()));
    assert_eq!(extract_message("not json"), None);
}

#[test]
fn whitespace_message_is_toasted_exactly() {
    let seen = recording_sink();
    let _ = intercept_response::<Payload>(envelope(422, r#"{"message":"  词条无效  "}"#));
    assert_eq!(*seen.borrow(), vec![(ToastLevel::Error, "  词条无效  ".to_owned())]);
    toast::clear_sink();
}

#[test]
fn transport_failure_toasts_fallback_and_propagates() {
    let seen = recording_sink();
    let result: Result<Payload, ApiError> = intercept_response(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].1, GENERIC_ERROR_MESSAGE);
    toast::clear_sink();
}

#[test]
fn mismatched_success_payload_is_a_toasted_decode_error() {
    let seen = recording_sink();
    let result: Result<Payload, ApiError> = intercept_response(envelope(200, r#"{"other":1}"#));
    assert!(matches!(result, Err(ApiError::Decode(_))));
    assert_eq!(seen.borrow().len(), 1);
    toast::clear_sink();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn get_without_browser_transport_fails_with_toast() {
    let seen = recording_sink();
    let result: Result<Payload, ApiError> = futures::executor::block_on(client().get("/health"));
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(*seen.borrow(), vec![(ToastLevel::Error, GENERIC_ERROR_MESSAGE.to_owned())]);
    toast::clear_sink();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn post_with_unencodable_body_is_toasted_request_error() {
    use std::collections::HashMap;

    let seen = recording_sink();
    // Non-string map keys cannot be encoded as JSON object keys.
    let mut body = HashMap::new();
    body.insert((1, 2), "x");
    let result: Result<Payload, ApiError> = futures::executor::block_on(client().post("/tools", &body));
    assert!(matches!(result, Err(ApiError::Request(_))));
    assert_eq!(seen.borrow().len(), 1);
    toast::clear_sink();
}
