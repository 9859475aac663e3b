//! HTTP API Client
//!
//! Thin wrapper over `gloo-net`: prefixes the configured base URL,
//! sends JSON, and turns non-2xx responses into [`ApiError`].

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

// ========================
// Errors
// ========================

/// Error returned by API client methods.
///
/// `status` is `None` when the request never produced a response
/// (network failure, serialization failure).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// Build the error for a non-2xx response from its parsed payload
    pub fn from_response(status: u16, payload: Option<&Value>) -> Self {
        Self {
            status: Some(status),
            message: error_message(status, payload),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
        }
    }
}

/// Pick the server-supplied `message`, then `error`, else `HTTP <status>`.
///
/// Numbers and booleans are shown as written; null, empty strings,
/// arrays and objects are skipped.
pub fn error_message(status: u16, payload: Option<&Value>) -> String {
    payload
        .and_then(|body| ["message", "error"].iter().find_map(|key| display_field(body.get(key)?)))
        .unwrap_or_else(|| format!("HTTP {status}"))
}

fn display_field(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

// ========================
// Payload helpers
// ========================

pub fn is_json_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains(JSON_MIME)
}

/// Malformed JSON yields no payload instead of an error
pub fn parse_payload(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(|value| !value.is_null())
}

/// JSON content type first; caller headers with the same name replace it
pub fn merge_headers(extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
    for (name, value) in extra {
        match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => headers.push((name.clone(), value.clone())),
        }
    }
    headers
}

/// Only a JSON content type yields a payload, whatever the body looks like
pub fn payload_from(content_type: Option<&str>, text: &str) -> Option<Value> {
    if !is_json_content_type(content_type?) {
        return None;
    }
    parse_payload(text)
}

/// Success passes the payload through; anything outside 2xx becomes an error
pub fn settle(status: u16, payload: Option<Value>) -> Result<Option<Value>, ApiError> {
    if (200..300).contains(&status) {
        Ok(payload)
    } else {
        Err(ApiError::from_response(status, payload.as_ref()))
    }
}

async fn read_payload(resp: &Response) -> Option<Value> {
    let content_type = resp.headers().get("content-type");
    let text = resp.text().await.ok()?;
    payload_from(content_type.as_deref(), &text)
}

// ========================
// Client
// ========================

/// Per-request options; defaults to a bodiless GET
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the parsed JSON payload, if any.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        let mut builder = RequestBuilder::new(&url).method(options.method.clone());
        for (name, value) in merge_headers(&options.headers) {
            builder = builder.header(&name, &value);
        }

        let request = match &options.body {
            Some(body) => builder.body(serde_json::to_string(body)?)?,
            None => builder.build()?,
        };

        let resp = request.send().await?;
        let payload = read_payload(&resp).await;
        if !resp.ok() {
            web_sys::console::log_1(&format!("[API] {} {} -> {}", options.method, url, resp.status()).into());
        }
        settle(resp.status(), payload)
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        self.request(path, RequestOptions { method: Method::GET, ..options }).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(path, RequestOptions { method: Method::POST, body: Some(body), ..options }).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        let body = serde_json::to_value(body)?;
        self.request(path, RequestOptions { method: Method::PUT, body: Some(body), ..options }).await
    }

    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ApiError> {
        self.request(path, RequestOptions { method: Method::DELETE, ..options }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = json!({ "message": "X", "error": "bad" });
        assert_eq!(error_message(400, Some(&body)), "X");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let body = json!({ "error": "bad" });
        assert_eq!(error_message(422, Some(&body)), "bad");
    }

    #[test]
    fn test_error_message_without_payload() {
        assert_eq!(error_message(503, None), "HTTP 503");
        let body = json!({ "message": "", "error": null });
        assert_eq!(error_message(500, Some(&body)), "HTTP 500");
        let body = json!({ "message": { "code": 1 } });
        assert_eq!(error_message(500, Some(&body)), "HTTP 500");
    }

    #[test]
    fn test_error_message_renders_scalars() {
        assert_eq!(error_message(400, Some(&json!({ "message": 42 }))), "42");
        assert_eq!(error_message(400, Some(&json!({ "message": "", "error": false }))), "false");
    }

    #[test]
    fn test_payload_requires_json_content_type() {
        let body = r#"{"error":"bad"}"#;
        assert_eq!(payload_from(Some("text/html"), body), None);
        assert_eq!(payload_from(None, body), None);
        assert_eq!(payload_from(Some("application/json"), body), Some(json!({ "error": "bad" })));
        assert_eq!(payload_from(Some("application/json"), "<html>oops"), None);
    }

    #[test]
    fn test_settle_non_json_failure_is_http_status() {
        let payload = payload_from(Some("text/html"), r#"{"error":"bad"}"#);
        let err = settle(502, payload).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
        assert_eq!(err.status, Some(502));
    }

    #[test]
    fn test_settle_json_failure_uses_error_field() {
        let payload = payload_from(Some("application/json; charset=utf-8"), r#"{"error":"bad"}"#);
        assert_eq!(settle(400, payload).unwrap_err().to_string(), "bad");
    }

    #[test]
    fn test_settle_success_passes_payload() {
        assert_eq!(settle(201, Some(json!({ "id": 7 }))), Ok(Some(json!({ "id": 7 }))));
        // Malformed JSON on success is masked as no payload
        let payload = payload_from(Some("application/json"), "{broken");
        assert_eq!(settle(200, payload), Ok(None));
        assert!(settle(299, None).is_ok());
        assert!(settle(300, None).is_err());
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let err = ApiError::from_response(404, Some(&json!({ "error": "bad" })));
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("Application/JSON; charset=utf-8"));
        assert!(!is_json_content_type("text/html"));
    }

    #[test]
    fn test_parse_payload_swallows_malformed_json() {
        assert_eq!(parse_payload(r#"{"id":1}"#), Some(json!({ "id": 1 })));
        assert_eq!(parse_payload("{not json"), None);
        assert_eq!(parse_payload(""), None);
        assert_eq!(parse_payload("null"), None);
    }

    #[test]
    fn test_merge_headers_defaults_to_json() {
        let headers = merge_headers(&[]);
        assert_eq!(headers, vec![("Content-Type".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn test_merge_headers_caller_overrides_content_type() {
        let extra = vec![
            ("content-type".to_string(), "text/plain".to_string()),
            ("Authorization".to_string(), "Bearer t".to_string()),
        ];
        let headers = merge_headers(&extra);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], ("content-type".to_string(), "text/plain".to_string()));
        assert_eq!(headers[1], ("Authorization".to_string(), "Bearer t".to_string()));
    }

    #[test]
    fn test_url_concatenates_base_and_path() {
        let client = ApiClient::new(&AppConfig::new("http://localhost:3000"));
        assert_eq!(client.url("/api/v1/users"), "http://localhost:3000/api/v1/users");
    }

    #[test]
    fn test_request_options_default_to_get() {
        let options = RequestOptions::default().header("X-Trace", "1");
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "1".to_string())]);
    }
}
