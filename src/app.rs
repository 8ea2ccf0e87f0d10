use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/attendance/mark", post(handlers::mark_attendance))
        .route("/api/subjects", get(handlers::get_subjects))
        .route("/api/subjects/counters", post(handlers::set_subject_counters))
        .route("/api/schedule", get(handlers::get_schedule).post(handlers::upload_schedule))
        .with_state(state)
}
