// src/tests/router_tests/settings_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with, StaticSource};
use astra::Body;
use http::Method;

#[test]
fn settings_form_renders_fields() {
    let state = state_with(StaticSource("{}".to_string()));

    let mut resp = handle(request(Method::GET, "/settings"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("name=\"settings\""));
    for field in ["BedsMin", "BedsMax", "RentMax", "DateFrom"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    assert!(body.contains("value=\"Save\""));
    assert!(!body.contains("Saved"));
}

#[test]
fn settings_post_counts_submitted_fields() {
    let state = state_with(StaticSource("{}".to_string()));

    let mut req = request(Method::POST, "/settings");
    *req.body_mut() = Body::from("BedsMin=4&BedsMax=5&action=Save".to_string());

    let mut resp = handle(req, &state);
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Saved 3 fields"));
}

#[test]
fn settings_rejects_other_methods() {
    let state = state_with(StaticSource("{}".to_string()));

    let resp = handle(request(Method::DELETE, "/settings"), &state);
    assert_eq!(resp.status(), 404);
}
