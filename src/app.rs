use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/day/:day", post(handlers::select_day))
        .route("/goals", post(handlers::submit_goal))
        .route("/goals/:id/complete", post(handlers::complete_goal))
        .route("/goals/:id/edit", post(handlers::edit_goal))
        .route("/goals/:id/delete", post(handlers::delete_goal))
        .route("/checkin", post(handlers::save_check_in))
        .route("/checkin/open", post(handlers::open_check_in))
        .route("/checkin/cancel", post(handlers::cancel_check_in))
        .route("/report", post(handlers::select_metric))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/events", post(handlers::post_event))
        .with_state(state)
}
