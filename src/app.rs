use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/visitors/add", post(handlers::form_add))
        .route("/visitors/toggle", post(handlers::form_toggle))
        .route("/api/week", get(handlers::get_week))
        .route("/api/visitors", get(handlers::get_visitors).post(handlers::create_visitor))
        .route("/api/visitors/toggle", post(handlers::toggle))
        .route("/api/members", get(handlers::get_members))
        .with_state(state)
}
