// src/tests/router_tests/api_tests.rs
use crate::config::Credentials;
use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with, FailingSource, StaticSource, EXAMPLE_DOC};
use base64::Engine;
use http::Method;
use serde_json::Value;

#[test]
fn listings_json_preserves_order_and_allows_any_origin() {
    let doc = r#"{"b": {"price": 1, "beds": 1, "baths": 1}, "a": {"price": 2, "beds": 2, "baths": 2}}"#;
    let state = state_with(StaticSource(doc.to_string()));

    let mut resp = handle(request(Method::GET, "/listings"), &state);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let body = body_string(&mut resp);
    let parsed: Value = serde_json::from_str(&body).unwrap();
    let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn listings_json_keeps_malformed_entry() {
    let doc = r#"{"a": {"price": 1, "beds": 1, "baths": 1}, "b": {"price": "1,200", "beds": 2, "baths": 1}}"#;
    let state = state_with(StaticSource(doc.to_string()));

    let mut resp = handle(request(Method::GET, "/listings"), &state);
    assert_eq!(resp.status(), 200);

    let parsed: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 2);
    assert_eq!(parsed["b"]["price"], "1,200");
}

#[test]
fn listings_json_failure_is_json_error() {
    let state = state_with(FailingSource);

    let mut resp = handle(request(Method::GET, "/listings"), &state);
    assert_eq!(resp.status(), 502);

    let parsed: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert!(parsed["error"].as_str().unwrap().contains("connection refused"));
}

#[test]
fn sites_json_lists_directory() {
    let state = state_with(StaticSource(EXAMPLE_DOC.to_string()));

    let mut resp = handle(request(Method::GET, "/sites"), &state);
    assert_eq!(resp.status(), 200);

    let parsed: Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(parsed["https://ygl.is/99333"], "Nick");
    assert_eq!(parsed.as_object().unwrap().len(), 9);
}

fn ping_with(auth: Option<&str>, credentials: Option<Credentials>) -> (u16, Value) {
    let mut state = state_with(StaticSource("{}".to_string()));
    state.credentials = credentials;

    let mut req = request(Method::GET, "/ping");
    if let Some(raw) = auth {
        let header = format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(raw)
        );
        req.headers_mut()
            .insert("Authorization", header.parse().unwrap());
    }

    let mut resp = handle(req, &state);
    let status = resp.status().as_u16();
    (status, serde_json::from_str(&body_string(&mut resp)).unwrap())
}

fn creds() -> Option<Credentials> {
    Some(Credentials {
        user: "admin".to_string(),
        pass: "hunter2".to_string(),
    })
}

#[test]
fn ping_accepts_right_credentials() {
    let (status, body) = ping_with(Some("admin:hunter2"), creds());
    assert_eq!(status, 200);
    assert_eq!(body["pong"], true);
}

#[test]
fn ping_rejects_wrong_or_missing_credentials() {
    let (status, body) = ping_with(Some("admin:wrong"), creds());
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = ping_with(Some("root:hunter2"), creds());
    assert_eq!(status, 401);

    let (status, _) = ping_with(None, creds());
    assert_eq!(status, 401);
}

#[test]
fn ping_is_closed_without_configured_credentials() {
    let (status, _) = ping_with(Some(":"), None);
    assert_eq!(status, 401);
}
