use crate::errors::AppError;
use crate::ingest::ingest;
use crate::ledger;
use crate::models::{
    AppData, IngestRequest, MarkRequest, ScheduleResponse, SetCountersRequest, SubjectReport,
    SubjectsResponse, TodayClass, TodayResponse, Weekday,
};
use crate::projection::project;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Datelike;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = ledger::today();
    Html(render_index(&ledger::date_key(today), state.threshold))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = ledger::today();
    let day = Weekday::from_chrono(today.weekday());
    let data = state.data.lock().await;

    let mut classes: Vec<TodayClass> = data
        .timetable
        .iter()
        .filter(|entry| Some(entry.day) == day)
        .map(|entry| TodayClass {
            status: ledger::daily_status(&data, today, &entry.id, &entry.subject),
            id: entry.id.clone(),
            time: entry.time.clone(),
            subject: entry.subject.clone(),
            room: entry.room.clone(),
        })
        .collect();
    classes.sort_by(|a, b| a.time.cmp(&b.time));

    Ok(Json(TodayResponse {
        date: ledger::date_key(today),
        day,
        classes,
    }))
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(payload): Json<MarkRequest>,
) -> Result<Json<SubjectReport>, AppError> {
    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(AppError::bad_request("subject must not be empty"));
    }
    let class_key = if payload.class_id.trim().is_empty() {
        subject
    } else {
        payload.class_id.trim()
    };

    let mut data = state.data.lock().await;
    ledger::mark_attendance(&mut data, class_key, subject, payload.present);
    save_best_effort(&state, &data).await;

    Ok(Json(subject_report(&data, subject, state.threshold)))
}

pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<SubjectsResponse>, AppError> {
    let data = state.data.lock().await;
    let subjects = data
        .attendance
        .keys()
        .map(|subject| subject_report(&data, subject, state.threshold))
        .collect();

    Ok(Json(SubjectsResponse {
        threshold: state.threshold,
        subjects,
    }))
}

pub async fn set_subject_counters(
    State(state): State<AppState>,
    Json(payload): Json<SetCountersRequest>,
) -> Result<Json<SubjectReport>, AppError> {
    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(AppError::bad_request("subject must not be empty"));
    }

    let mut data = state.data.lock().await;
    ledger::set_counters(&mut data, subject, payload.total, payload.present);
    save_best_effort(&state, &data).await;

    Ok(Json(subject_report(&data, subject, state.threshold)))
}

pub async fn get_schedule(State(state): State<AppState>) -> Result<Json<ScheduleResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(ScheduleResponse {
        entries: data.timetable.clone(),
    }))
}

pub async fn upload_schedule(
    State(state): State<AppState>,
    Json(payload): Json<IngestRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    // Build the replacement before touching the live state, so a bad upload
    // leaves everything as it was.
    let fresh = ingest(&payload.entries)?;

    let mut data = state.data.lock().await;
    *data = fresh;
    save_best_effort(&state, &data).await;
    info!("schedule replaced: {} classes", data.timetable.len());

    Ok(Json(ScheduleResponse {
        entries: data.timetable.clone(),
    }))
}

/// Saving is best effort: a failed write is logged and the in-memory state
/// stays authoritative for the rest of the session.
async fn save_best_effort(state: &AppState, data: &AppData) {
    if let Err(err) = persist_data(&state.data_path, data).await {
        error!("failed to persist state: {}", err.message);
    }
}

fn subject_report(data: &AppData, subject: &str, threshold: u8) -> SubjectReport {
    let counters = data.attendance.get(subject).copied().unwrap_or_default();
    SubjectReport {
        subject: subject.to_string(),
        total: counters.total,
        present: counters.present,
        projection: project(counters, threshold),
    }
}
