//! HTTP API tests driving the router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use string_templates::config::Settings;
use string_templates::server::{create_app, AppState};
use string_templates::template::UnboundPolicy;

fn app() -> Router {
    create_app(AppState::new(Settings::default()).unwrap())
}

fn app_with_policy(policy: UnboundPolicy) -> Router {
    let mut settings = Settings::default();
    settings.rendering.unbound = policy;
    create_app(AppState::new(settings).unwrap())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["templates"], 1);
}

#[tokio::test]
async fn test_render_profile() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "name": "April", "dob": "2000-04-10" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["text"],
        "Her name is April and her birthday is on 04/10/2000, which is in April."
    );
    assert_eq!(body["locale"], "en_US");
}

#[tokio::test]
async fn test_render_profile_with_locale() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "name": "Avril", "dob": "2000-04-10", "locale": "fr_FR" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["text"],
        "Her name is Avril and her birthday is on 04/10/2000, which is in avril."
    );
}

#[tokio::test]
async fn test_render_profile_missing_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "dob": "2000-04-10" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_render_profile_unknown_locale() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "name": "April", "dob": "2000-04-10", "locale": "xx_YY" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_render_profile_echoes_normalized_locale() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "name": "Avril", "dob": "2000-04-10", "locale": "fr-FR" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locale"], "fr_FR");
    assert_eq!(
        body["text"],
        "Her name is Avril and her birthday is on 04/10/2000, which is in avril."
    );
}

#[tokio::test]
async fn test_render_profile_impossible_date_is_json_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/profiles/render",
        Some(json!({ "name": "April", "dob": "2000-02-30" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_template_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/templates",
        Some(json!({
            "id": "greeting",
            "name": "Greeting",
            "body": "Hello, {name}! Today is {day}."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "greeting");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates",
        Some(json!({ "id": "greeting", "name": "Again", "body": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "TEMPLATE_EXISTS");

    let (status, list) = send(&app, Method::GET, "/api/v1/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 2);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/v1/templates/greeting",
        Some(json!({ "body": "Hi {name}" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["body"], "Hi {name}");
    assert_eq!(updated["name"], "Greeting");

    let (status, fetched) = send(&app, Method::GET, "/api/v1/templates/greeting", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["body"], "Hi {name}");

    let (status, _) = send(&app, Method::DELETE, "/api/v1/templates/greeting", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/api/v1/templates/greeting", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
}

#[tokio::test]
async fn test_render_stored_template() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/profile/render",
        Some(json!({
            "bindings": {
                "{name}": "April",
                "{dob}": "04/10/2000",
                "{month}": "April"
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["template_id"], "profile");
    assert_eq!(
        body["text"],
        "Her name is April and her birthday is on 04/10/2000, which is in April."
    );
    assert_eq!(body["unbound"], json!([]));
}

#[tokio::test]
async fn test_render_applies_bindings_in_request_order() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/v1/templates",
        Some(json!({ "id": "chain", "name": "Chain", "body": "{a}" })),
    )
    .await;

    let (_, forward) = send(
        &app,
        Method::POST,
        "/api/v1/templates/chain/render",
        Some(serde_json::from_str(r#"{"bindings": {"{a}": "{b}", "{b}": "x"}}"#).unwrap()),
    )
    .await;
    assert_eq!(forward["text"], "x");

    let (_, reverse) = send(
        &app,
        Method::POST,
        "/api/v1/templates/chain/render",
        Some(serde_json::from_str(r#"{"bindings": {"{b}": "x", "{a}": "{b}"}}"#).unwrap()),
    )
    .await;
    assert_eq!(reverse["text"], "{b}");
}

#[tokio::test]
async fn test_render_unbound_pass_through_by_default() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/profile/render",
        Some(json!({ "bindings": { "{name}": "April" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["text"],
        "Her name is April and her birthday is on {dob}, which is in {month}."
    );
    assert_eq!(body["unbound"], json!(["{dob}", "{month}"]));
}

#[tokio::test]
async fn test_render_unbound_rejected_by_config() {
    let app = app_with_policy(UnboundPolicy::Reject);
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/profile/render",
        Some(json!({ "bindings": { "{name}": "April" } })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "UNBOUND_TOKEN");
}

#[tokio::test]
async fn test_render_policy_override_per_request() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/profile/render",
        Some(json!({ "bindings": {}, "policy": "reject" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "UNBOUND_TOKEN");
}

#[tokio::test]
async fn test_render_missing_template() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/nope/render",
        Some(json!({ "bindings": {} })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "TEMPLATE_NOT_FOUND");
}

#[tokio::test]
async fn test_render_non_object_bindings_is_json_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates/profile/render",
        Some(json!({ "bindings": ["{name}"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_create_template_missing_field_is_json_error() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/templates",
        Some(json!({ "id": "greeting" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}
