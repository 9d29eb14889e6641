// src/tests/router_tests/home_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, request, state_with, FailingSource, StaticSource, EXAMPLE_DOC};
use http::Method;

#[test]
fn home_renders_example_listing() {
    let state = state_with(StaticSource(EXAMPLE_DOC.to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("<div class=\"properties\">"));
    assert_eq!(body.matches("<p class=\"listing\">").count(), 1);
    assert!(body.contains(">Nick</a>"));
    assert!(body.contains("$1200"));
    assert!(body.contains("2Bd / 1bth"));
    assert!(body.contains("123 Main St"));
    assert!(body.contains("href=\"https://ygl.is/99333/rental/abc\""));
    assert!(body.contains("target=\"_blank\""));
}

#[test]
fn home_keeps_document_order() {
    let doc = r#"{
        "9 Last Ave": {"price": 3000, "beds": 3, "baths": 2, "refs": []},
        "1 First St": {"price": 1000, "beds": 1, "baths": 1, "refs": []},
        "5 Middle Rd": {"price": 2000, "beds": 2, "baths": 1.5, "refs": []}
    }"#;
    let state = state_with(StaticSource(doc.to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    let body = body_string(&mut resp);

    assert_eq!(body.matches("<p class=\"listing\">").count(), 3);
    let last = body.find("9 Last Ave").unwrap();
    let first = body.find("1 First St").unwrap();
    let middle = body.find("5 Middle Rd").unwrap();
    assert!(last < first && first < middle);
    assert!(body.contains("2Bd / 1.5bth"));
}

#[test]
fn malformed_listing_does_not_hide_the_others() {
    let doc = r#"{
        "1 Good St": {"price": 1000, "beds": 1, "baths": 1, "refs": ["https://ygl.is/99333/rental/1"]},
        "2 Odd St": {"price": "1,200", "beds": 2, "baths": 1, "refs": ["https://ygl.is/99334/rental/2"]},
        "3 Good St": {"price": 3000, "beds": 3, "baths": 2, "refs": []}
    }"#;
    let state = state_with(StaticSource(doc.to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(!body.contains("role=\"alert\""));
    assert_eq!(body.matches("<p class=\"listing\">").count(), 3);
    assert!(body.contains("$1,200"));
    assert!(body.contains(">Denis</a>"));

    let first = body.find("1 Good St:").unwrap();
    let odd = body.find("2 Odd St:").unwrap();
    let last = body.find("3 Good St:").unwrap();
    assert!(first < odd && odd < last);
}

#[test]
fn home_with_empty_document_has_empty_container() {
    let state = state_with(StaticSource("{}".to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    let body = body_string(&mut resp);

    assert_eq!(resp.status(), 200);
    assert!(body.contains("<div class=\"properties\"></div>"));
}

#[test]
fn failed_fetch_shows_error_instead_of_blank_page() {
    let state = state_with(FailingSource);

    let mut resp = handle(request(Method::GET, "/"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("role=\"alert\""));
    assert!(body.contains("Listings could not be loaded"));
    assert!(body.contains("connection refused"));
    assert!(!body.contains("<p class=\"listing\">"));
}

#[test]
fn non_object_document_shows_error() {
    let state = state_with(StaticSource("[1, 2]".to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    let body = body_string(&mut resp);

    assert!(body.contains("role=\"alert\""));
    assert!(body.contains("Unexpected data shape"));
}

#[test]
fn invalid_document_shows_error() {
    let state = state_with(StaticSource("<html>not json</html>".to_string()));

    let mut resp = handle(request(Method::GET, "/"), &state);
    let body = body_string(&mut resp);

    assert!(body.contains("JSON parse error"));
}

#[test]
fn server_keeps_serving_after_a_failure() {
    let state = state_with(FailingSource);

    let first = handle(request(Method::GET, "/"), &state);
    let second = handle(request(Method::GET, "/settings"), &state);

    assert_eq!(first.status(), 200);
    assert_eq!(second.status(), 200);
}

#[test]
fn unknown_route_is_404_page() {
    let state = state_with(StaticSource("{}".to_string()));

    let mut resp = handle(request(Method::GET, "/nope"), &state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Error 404"));
}
