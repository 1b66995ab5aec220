//! Integration tests for the assessment HTTP API.
//!
//! Drives the axum router end to end against in-memory adapters and a mock
//! AI provider.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use maturity_assessment::adapters::ai::MockAIProvider;
use maturity_assessment::adapters::catalog::StaticQuestionCatalog;
use maturity_assessment::adapters::http::{assessment_routes, AssessmentHandlers};
use maturity_assessment::adapters::narrative::{
    LlmNarrativeGenerator, UnconfiguredNarrativeGenerator,
};
use maturity_assessment::adapters::storage::{InMemoryKeyValueStore, KeyValueSessionRepository};
use maturity_assessment::application::{
    CompleteAssessmentHandler, GenerateNarrativeHandler, ResolveCodeHandler, SelectRoleHandler,
    SubmitAnswerHandler, SubmitUserInfoHandler,
};
use maturity_assessment::ports::{
    KeyValueStore, NarrativeGenerator, QuestionCatalog, SessionRepository, StorageError,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Store that reads nothing and refuses every write.
struct ReadOnlyStore;

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only replica".to_string()))
    }
}

fn app(store: Arc<dyn KeyValueStore>, generator: Arc<dyn NarrativeGenerator>) -> Router {
    let repository: Arc<dyn SessionRepository> = Arc::new(KeyValueSessionRepository::new(store));
    let catalog: Arc<dyn QuestionCatalog> = Arc::new(StaticQuestionCatalog::standard());

    assessment_routes(AssessmentHandlers::new(
        Arc::new(ResolveCodeHandler::new(repository.clone(), catalog.clone())),
        Arc::new(SubmitUserInfoHandler::new(repository.clone())),
        Arc::new(SelectRoleHandler::new(repository.clone(), catalog.clone())),
        Arc::new(SubmitAnswerHandler::new(repository.clone())),
        Arc::new(CompleteAssessmentHandler::new(repository, catalog)),
        Arc::new(GenerateNarrativeHandler::new(generator)),
    ))
}

fn in_memory_app(provider: MockAIProvider) -> Router {
    app(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(LlmNarrativeGenerator::new(Arc::new(provider))),
    )
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn profile() -> Value {
    json!({
        "name": "Mariam Saleh",
        "email": "mariam@example.com",
        "organization": "Gulf Freight",
        "size": "201-1000",
        "industry": "Logistics",
        "country": "OM",
        "jobTitle": "Head of Compliance",
        "language": "ar"
    })
}

/// Saves a profile and picks `role` for `code`.
async fn enter(app: &Router, code: &str, role: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        &format!("/api/assessments/{code}/user-info"),
        Some(profile()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app,
        Method::POST,
        &format!("/api/assessments/{code}/role"),
        Some(json!({"role": role})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

async fn answer(app: &Router, code: &str, question_id: &str, value: Value) -> (StatusCode, Value) {
    send(
        app,
        Method::PUT,
        &format!("/api/assessments/{code}/answers"),
        Some(json!({"questionId": question_id, "value": value})),
    )
    .await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_assessment_over_http() {
    let provider = MockAIProvider::new().with_response("## الأولويات");
    let app = in_memory_app(provider.clone());

    let (status, view) = send(
        &app,
        Method::POST,
        "/api/assessments/resolve",
        Some(json!({"code": "gulf-7", "language": "ar"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "user_info");
    assert_eq!(view["direction"], "rtl");
    assert_eq!(view["session"]["code"], "GULF-7");

    let (status, view) = send(
        &app,
        Method::POST,
        "/api/assessments/gulf-7/user-info",
        Some(profile()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "role_selection");

    let (status, view) = send(
        &app,
        Method::POST,
        "/api/assessments/GULF-7/role",
        Some(json!({"role": "Compliance"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "assessment");
    assert_eq!(view["language"], "ar");
    assert_eq!(view["questions"].as_array().unwrap().len(), 4);

    for (question_id, value) in [("q1", json!(4)), ("q4", json!("NA")), ("q7", json!(2))] {
        let (status, _) = answer(&app, "GULF-7", question_id, value).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Resuming lands on the one question still open
    let (_, view) = send(
        &app,
        Method::POST,
        "/api/assessments/resolve",
        Some(json!({"code": "GULF-7"})),
    )
    .await;
    assert_eq!(view["step"], "assessment");
    assert_eq!(view["currentIndex"], 3);
    assert_eq!(view["progress"]["answered"], 3);

    let (status, body) = send(&app, Method::POST, "/api/assessments/GULF-7/complete", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (status, _) = answer(&app, "GULF-7", "q8", json!("NotSure")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, view) = send(&app, Method::POST, "/api/assessments/GULF-7/complete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "results");
    assert_eq!(view["result"]["overallScore"], 3.0);
    assert_eq!(view["result"]["maturityLevel"], "Defined");
    assert_eq!(view["session"]["status"], "completed");

    let (status, narrative) =
        send(&app, Method::POST, "/api/assessments/GULF-7/narrative", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(narrative["kind"], "generated");
    assert_eq!(narrative["text"], "## الأولويات");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn answer_outside_role_questions_is_422() {
    let app = in_memory_app(MockAIProvider::new());
    enter(&app, "ops-1", "Operations").await;

    let (status, body) = answer(&app, "ops-1", "q8", json!(3)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "UNKNOWN_QUESTION");
}

#[tokio::test]
async fn completed_assessment_cannot_be_completed_again() {
    let app = in_memory_app(MockAIProvider::new());
    enter(&app, "done-1", "Compliance").await;
    for question_id in ["q1", "q4", "q7", "q8"] {
        answer(&app, "done-1", question_id, json!("NA")).await;
    }
    let (status, _) = send(&app, Method::POST, "/api/assessments/done-1/complete", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/api/assessments/done-1/complete", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (_, view) = send(
        &app,
        Method::POST,
        "/api/assessments/resolve",
        Some(json!({"code": "done-1"})),
    )
    .await;
    assert_eq!(view["step"], "results");
    assert_eq!(view["result"]["overallScore"], 0.0);
    assert_eq!(view["result"]["maturityLevel"], "Initial");
}

#[tokio::test]
async fn completing_before_any_answer_is_409() {
    let app = in_memory_app(MockAIProvider::new());
    enter(&app, "early-2", "IT").await;

    let (status, body) = send(&app, Method::POST, "/api/assessments/early-2/complete", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");

    let (_, view) = send(
        &app,
        Method::POST,
        "/api/assessments/resolve",
        Some(json!({"code": "early-2"})),
    )
    .await;
    assert_eq!(view["step"], "assessment");
    assert_eq!(view["session"]["status"], "in-progress");
}

#[tokio::test]
async fn answer_before_role_is_409() {
    let app = in_memory_app(MockAIProvider::new());
    send(
        &app,
        Method::POST,
        "/api/assessments/norole-1/user-info",
        Some(profile()),
    )
    .await;

    let (status, body) = answer(&app, "norole-1", "q1", json!(3)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ROLE_NOT_SELECTED");
}

#[tokio::test]
async fn role_before_profile_is_409() {
    let app = in_memory_app(MockAIProvider::new());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assessments/skip-1/role",
        Some(json!({"role": "IT"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE_TRANSITION");
}

#[tokio::test]
async fn malformed_code_is_400() {
    let app = in_memory_app(MockAIProvider::new());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assessments/resolve",
        Some(json!({"code": "not a code!"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ACCESS_CODE");
}

#[tokio::test]
async fn invalid_profile_is_400() {
    let app = in_memory_app(MockAIProvider::new());
    let mut body = profile();
    body["email"] = json!("no-at-sign");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assessments/acme-5/user-info",
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn storage_failure_is_503() {
    let app = app(
        Arc::new(ReadOnlyStore),
        Arc::new(UnconfiguredNarrativeGenerator),
    );

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/assessments/acme-6/user-info",
        Some(profile()),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "STORAGE_ERROR");
}

#[tokio::test]
async fn narrative_without_results_is_409() {
    let app = in_memory_app(MockAIProvider::new());

    let (status, _) = send(&app, Method::POST, "/api/assessments/early-1/narrative", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn roles_are_listed_with_localized_labels() {
    let app = in_memory_app(MockAIProvider::new());

    let (status, roles) = send(&app, Method::GET, "/api/roles?lang=ar", None).await;

    assert_eq!(status, StatusCode::OK);
    let roles = roles.as_array().unwrap();
    assert_eq!(roles.len(), 5);
    assert_eq!(roles[0]["id"], "Executive");
    assert_eq!(roles[0]["label"], "تنفيذي / قيادة");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = in_memory_app(MockAIProvider::new());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
