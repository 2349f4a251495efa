use anyhow::{bail, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vegan_ipsum::ipsum::{TextGenerator, Units, VeganIpsum};
use vegan_ipsum::site::SiteConfig;
use vegan_ipsum::{build_app, AppState};

struct StubGenerator(&'static str);

impl TextGenerator for StubGenerator {
    fn generate(&self, _count: u32, _units: Units, _format: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Echoes its arguments so tests can see what reached the generator.
struct EchoGenerator;

impl TextGenerator for EchoGenerator {
    fn generate(&self, count: u32, units: Units, format: &str) -> Result<String> {
        Ok(format!("{count} {units} {format}"))
    }
}

struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _count: u32, _units: Units, _format: &str) -> Result<String> {
        bail!("word pool is empty")
    }
}

fn app(generator: impl TextGenerator + 'static) -> Router {
    let site = SiteConfig::new("Vegan Ipsum", "https://veganipsum.test").unwrap();
    build_app(AppState::new(generator, site))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn get_returns_generated_text() {
    let (status, body) = send(
        app(StubGenerator("Hello")),
        get("/api?count=3&units=paragraphs&format=plain"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "text": "Hello" }));
}

#[tokio::test]
async fn zero_count_is_rejected() {
    let (status, body) = send(app(StubGenerator("Hello")), get("/api?count=0&units=paragraphs")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid count. Please provide a number between 1 and 100."
    );
}

#[tokio::test]
async fn unknown_units_are_rejected() {
    let (status, body) = send(app(StubGenerator("Hello")), get("/api?count=5&units=lines")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid units. Please use 'paragraphs', 'sentences', or 'words'."
    );
}

#[tokio::test]
async fn every_count_in_range_passes() {
    for count in 1..=100 {
        let (status, _) = send(app(StubGenerator("ok")), get(&format!("/api?count={count}"))).await;
        assert_eq!(status, StatusCode::OK, "count {count}");
    }
    for count in ["-1", "0", "101", "1000", "three"] {
        let (status, _) = send(app(StubGenerator("ok")), get(&format!("/api?count={count}"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "count {count}");
    }
}

#[tokio::test]
async fn every_known_unit_passes() {
    for units in ["paragraphs", "sentences", "words"] {
        let (status, body) = send(app(EchoGenerator), get(&format!("/api?units={units}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], format!("3 {units} plain"));
    }
}

#[tokio::test]
async fn generator_failure_is_internal_error() {
    let (status, body) = send(app(FailingGenerator), get("/api?count=2&units=words")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("word pool is empty"), "{message}");
}

#[tokio::test]
async fn defaults_reach_the_generator() {
    let (status, body) = send(app(EchoGenerator), get("/api")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "3 paragraphs plain");
}

#[tokio::test]
async fn post_body_matches_query_contract() {
    let (status, body) = send(
        app(EchoGenerator),
        post_json(r#"{"count":"7","units":"sentences","format":"html"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "7 sentences html");

    let (status, body) = send(app(EchoGenerator), post_json(r#"{"count":101}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid count. Please provide a number between 1 and 100."
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (status, body) = send(app(EchoGenerator), post_json("{count: 3")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn unparseable_query_is_json_bad_request() {
    let (status, body) = send(app(EchoGenerator), get("/api?count=2&count=3")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid query string"), "{error}");
}

#[tokio::test]
async fn post_units_of_wrong_type_are_invalid_units() {
    let (status, body) = send(app(EchoGenerator), post_json(r#"{"count":2,"units":5}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid units. Please use 'paragraphs', 'sentences', or 'words'."
    );
}

#[tokio::test]
async fn post_format_of_any_type_reaches_generator() {
    let (status, body) = send(app(EchoGenerator), post_json(r#"{"count":2,"format":5}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "2 paragraphs 5");
}

#[tokio::test]
async fn unknown_format_fails_inside_builtin_generator() {
    let (status, body) = send(app(VeganIpsum::default()), get("/api?count=1&format=markdown")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Unexpected error: Invalid format 'markdown'. Please use 'plain' or 'html'."
    );
}

#[tokio::test]
async fn builtin_generator_serves_words() {
    let (status, body) = send(app(VeganIpsum::default()), get("/api?count=12&units=words")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"].as_str().unwrap().split(' ').count(), 12);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, body) = send(app(StubGenerator("Hello")), get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(app(StubGenerator("Hello")), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
