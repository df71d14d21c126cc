use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/treasury", get(handlers::treasury_page))
        .route("/calendar", get(handlers::calendar_page))
        .route("/api/board", get(handlers::get_board))
        .route("/api/tasks", post(handlers::create_task))
        .route("/api/tasks/:id/toggle", post(handlers::toggle_task))
        .route("/api/treasury", get(handlers::get_treasury))
        .route("/api/treasury/spend", post(handlers::spend))
        .route("/api/raven", post(handlers::dispatch_raven))
        .with_state(state)
}
