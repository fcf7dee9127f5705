use super::{
    handlers::{form, health, submit, ticket},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Submission page and handoff
        .route("/", get(form::show_form))
        .route("/submit", post(submit::submit_form))
        // Ticket page
        .route("/ticket", get(ticket::show_ticket))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
