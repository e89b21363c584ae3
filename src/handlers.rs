use crate::errors::AppError;
use crate::models::{ClearResponse, LogResponse, TimestampRecord};
use crate::schedule::next_slot;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = state.store.list_records().await.map_err(|err| {
        error!("failed to list records for the index page: {err}");
        err
    })?;
    Ok(Html(render_index(&records)))
}

pub async fn record(State(state): State<AppState>) -> Result<Json<TimestampRecord>, AppError> {
    let stored = apply_record(&state).await?;
    Ok(Json(stored))
}

/// No-script form fallback for the record button.
pub async fn record_redirect(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_record(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_log(State(state): State<AppState>) -> Result<Json<LogResponse>, AppError> {
    let records = state.store.list_records().await.map_err(|err| {
        error!("failed to list records: {err}");
        err
    })?;
    Ok(Json(LogResponse { records }))
}

pub async fn clear_log(State(state): State<AppState>) -> Result<Json<ClearResponse>, AppError> {
    let removed = state.store.clear_all().await.map_err(|err| {
        error!("failed to clear the log: {err}");
        err
    })?;
    info!("cleared {removed} records");
    Ok(Json(ClearResponse { removed }))
}

async fn apply_record(state: &AppState) -> Result<TimestampRecord, AppError> {
    let now = Local::now().naive_local();
    let scheduled_time = next_slot(now);
    let stored = state
        .store
        .add_record(now, scheduled_time)
        .await
        .map_err(|err| {
            error!("failed to add record: {err}");
            err
        })?;
    info!("recorded press #{} at {}", stored.id, stored.timestamp);
    Ok(stored)
}
