//! Router-level tests driving the endpoints with in-memory adapters.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{advisor_router, AdvisorAppState};
use crate::application::fixtures::Fixture;
use crate::domain::scoring::RankingPolicy;

fn app(fixture: &Fixture) -> Router {
    advisor_router().with_state(AdvisorAppState {
        taxonomy: fixture.catalog.clone(),
        applications: fixture.catalog.clone(),
        selections: fixture.selections.clone(),
        wizard_states: fixture.states.clone(),
        ranking_policy: RankingPolicy::default(),
        wizard_namespace: "software_advisor".to_string(),
    })
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", "user-1")
        .header("X-Session-Id", "session-1")
        .header("content-type", "application/json");
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn full_wizard_run_yields_suggestions() {
    let fixture = Fixture::new();
    let app = app(&fixture);

    let (status, started) = call(
        &app,
        Method::POST,
        "/api/wizard",
        Some(json!({"business_processes": ["sales"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(started["form"]["step_id"], json!({"kind": "business_process", "id": "sales"}));

    let (status, moved) = call(
        &app,
        Method::POST,
        "/api/wizard/submit",
        Some(json!({"action": "next", "values": {"1": 3, "10": 2, "11": 4}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["outcome"], "moved");
    assert_eq!(moved["form"]["step_id"], json!({"kind": "metadata"}));

    let (_, completed) = call(
        &app,
        Method::POST,
        "/api/wizard/submit",
        Some(json!({"action": "next", "values": {"title": "New CRM"}})),
    )
    .await;
    assert_eq!(completed["outcome"], "completed");
    let selection_id = completed["selection_id"].as_str().unwrap().to_string();

    let (status, suggestions) = call(
        &app,
        Method::GET,
        &format!("/api/selections/{}/suggestions", selection_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ranked = &suggestions["suggestions"][0]["applications"];
    assert_eq!(ranked[0]["name"], "Alpha CRM");
    assert_eq!(ranked[0]["score_text"], "100.00");
    // Beta supports only the weight-2 function: 2 * 3 / (6 * 3)
    assert_eq!(ranked.as_array().unwrap().len(), 1);

    let (status, comparison) = call(
        &app,
        Method::GET,
        &format!("/api/selections/{}/comparison", selection_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comparison["tables"][0]["title"], "Sales suggestions");

    // The run was cleared on completion
    let (status, body) = call(&app, Method::GET, "/api/wizard", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "WIZARD_NOT_STARTED");
}

#[tokio::test]
async fn invalid_metadata_is_reported_not_thrown() {
    let fixture = Fixture::new();
    let app = app(&fixture);
    call(
        &app,
        Method::POST,
        "/api/wizard",
        Some(json!({"business_processes": ["sales"]})),
    )
    .await;
    call(&app, Method::POST, "/api/wizard/submit", Some(json!({"values": {"1": 3, "10": 2}}))).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/wizard/submit",
        Some(json!({"values": {"title": ""}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "invalid");
    assert_eq!(body["errors"][0]["field"], "title");
}

#[tokio::test]
async fn missing_identity_headers_are_rejected() {
    let fixture = Fixture::new();
    let response = app(&fixture)
        .oneshot(Request::builder().uri("/api/wizard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_selection_is_404_and_bad_id_is_400() {
    let fixture = Fixture::new();
    let app = app(&fixture);

    let missing = format!("/api/selections/{}/suggestions", uuid::Uuid::new_v4());
    let (status, body) = call(&app, Method::GET, &missing, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SELECTION_NOT_FOUND");

    let (status, _) = call(&app, Method::GET, "/api/selections/nope/comparison", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rate_labels() {
    let fixture = Fixture::new();
    let app = app(&fixture);

    let (status, body) = call(&app, Method::GET, "/api/rates/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Important");
    assert_eq!(body["description"], "3 - Important");

    let (status, _) = call(&app, Method::GET, "/api/rates/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
