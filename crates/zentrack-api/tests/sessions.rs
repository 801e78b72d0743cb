use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use zentrack_api::config::ApiConfig;
use zentrack_api::router;
use zentrack_api::state::AppState;
use zentrack_instruments::engine::UnsetPolicy;

fn app_with(config: ApiConfig) -> Router {
    router(AppState::new(&config).unwrap())
}

fn app() -> Router {
    app_with(ApiConfig::from_lookup(|_| None).unwrap())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
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

async fn create(app: &Router, questionnaire_id: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/sessions",
        Some(json!({ "questionnaire_id": questionnaire_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().unwrap().to_string()
}

async fn answer(app: &Router, id: &str, value: i64) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/sessions/{id}/answer"),
        Some(json!({ "value": value })),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn questionnaires_are_listed_and_described() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/questionnaires", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/questionnaires/ham_a", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_score"], 56);
    assert_eq!(body["questions"].as_array().unwrap().len(), 14);
    assert_eq!(body["scale"]["above"], "high");

    let (status, _) = send(&app, Method::GET, "/questionnaires/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_run_scores_and_updates_dashboard() {
    let app = app();
    let id = create(&app, "ham_a").await;

    for _ in 0..13 {
        let (status, body) = answer(&app, &id, 2).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completion"], "in_progress");
    }
    let (_, body) = answer(&app, &id, 2).await;
    assert_eq!(body["completion"], "ready_to_score");
    assert_eq!(body["cursor"], 13);
    assert_eq!(body["blocks_navigation"], true);

    let (status, body) = send(&app, Method::POST, &format!("/sessions/{id}/score"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total"], 28);
    assert_eq!(body["result"]["percentage"], 50);
    assert_eq!(body["result"]["severity"], "moderate");
    assert_eq!(body["stress_level"], "High");
    assert_eq!(body["recommendation"]["primary"], "chatbot");
    assert_eq!(body["submission"], json!({ "score": 50 }));
    assert_eq!(body["trend"], json!([50]));

    let (_, body) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(body["completion"], "completed");
    assert_eq!(body["blocks_navigation"], false);

    let (_, body) = send(&app, Method::GET, "/dashboard/trend", None).await;
    assert_eq!(body["points"], json!([50]));
    assert_eq!(body["capacity"], 7);

    let (_, body) = send(&app, Method::GET, "/history?limit=5", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/dashboard/analytics?days=7", None).await;
    assert_eq!(body["total_sessions"], 1);
    assert_eq!(body["stress_distribution"]["high"], 1);
    assert_eq!(body["average_score"], 28.0);
}

#[tokio::test]
async fn invalid_answers_and_states_map_to_client_errors() {
    let app = app();
    let id = create(&app, "zen15").await;

    let (status, body) = answer(&app, &id, 5).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("outside"));

    let (status, _) = send(&app, Method::POST, &format!("/sessions/{id}/previous"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::POST, &format!("/sessions/{id}/score"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn previous_shows_the_earlier_selection() {
    let app = app();
    let id = create(&app, "zen15").await;
    answer(&app, &id, 3).await;

    let (status, body) = send(&app, Method::POST, &format!("/sessions/{id}/previous"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cursor"], 0);
    assert_eq!(body["selected"], 3);
    assert_eq!(body["option_labels"][3], "Often");
}

#[tokio::test]
async fn reset_and_delete() {
    let app = app();
    let id = create(&app, "zen15").await;
    answer(&app, &id, 1).await;

    let (status, body) = send(&app, Method::POST, &format!("/sessions/{id}/reset"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cursor"], 0);
    assert_eq!(body["selected"], Value::Null);

    let (status, _) = send(&app, Method::DELETE, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resumed_session_with_gap_respects_policy() {
    let mut config = ApiConfig::from_lookup(|_| None).unwrap();
    config.unset_policy = UnsetPolicy::RejectIncomplete;
    let app = app_with(config);

    let mut answers = vec![json!(1); 15];
    answers[2] = Value::Null;
    let (status, body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({
            "questionnaire_id": "zen15",
            "resume": { "answers": answers, "cursor": 14 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completion"], "ready_to_score");

    let id = body["session_id"].as_str().unwrap();
    let (status, body) = send(&app, Method::POST, &format!("/sessions/{id}/score"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("unanswered"));
}

#[tokio::test]
async fn unknown_questionnaire_cannot_start_a_session() {
    let (status, _) = send(
        &app(),
        Method::POST,
        "/sessions",
        Some(json!({ "questionnaire_id": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn idle_sessions_are_pruned() {
    let state = AppState::new(&ApiConfig::from_lookup(|_| None).unwrap()).unwrap();
    let app = router(state.clone());
    let id = create(&app, "zen15").await;

    let now = jiff::Timestamp::now();
    assert_eq!(state.prune_idle_sessions(now).await, 0);
    let (status, _) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let later = now
        .checked_add(jiff::SignedDuration::from_hours(2))
        .unwrap();
    assert_eq!(state.prune_idle_sessions(later).await, 1);
    let (status, _) = send(&app, Method::GET, &format!("/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
