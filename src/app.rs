use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/record", post(handlers::record_redirect))
        .route("/api/record", post(handlers::record))
        .route("/api/log", get(handlers::get_log))
        .route("/api/clear", post(handlers::clear_log))
        .with_state(state)
}
