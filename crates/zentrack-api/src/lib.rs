//! zentrack-api library root.
//!
//! The HTTP adapter over the assessment engine. Handlers translate
//! requests into engine operations and serialize the resulting state; no
//! scoring rules live here. Exposed as a library so integration tests can
//! drive the router directly.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/sessions/{id}/answer", post(routes::sessions::select_answer))
        .route("/sessions/{id}/previous", post(routes::sessions::go_to_previous))
        .route("/sessions/{id}/score", post(routes::sessions::compute_score))
        .route("/sessions/{id}/reset", post(routes::sessions::reset_session))
        .route("/history", get(routes::dashboard::list_history))
        .route("/history/{id}", get(routes::dashboard::get_history_entry))
        .route("/dashboard/trend", get(routes::dashboard::get_trend))
        .route("/dashboard/analytics", get(routes::dashboard::get_analytics))
        .route(
            "/export/sessions/csv",
            get(routes::export::export_sessions_csv),
        )
        .route(
            "/export/analytics/csv",
            get(routes::export::export_analytics_csv),
        )
        .route("/export/report/text", get(routes::export::export_text_report))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
