use crate::attendance::now_label;
use crate::errors::AppError;
use crate::members::load_members;
use crate::models::{
    AttendanceUpdate, MembersResponse, NewVisitor, ToggleRequest, ViewState, VisitorRecord,
    WeekResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::visitors::{add_visitor, toggle_visitor};
use crate::week::current_week_number;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.refresh().await;
    let members = load_members(state.store.as_ref())
        .await
        .unwrap_or_else(|err| {
            error!("failed to fetch members: {err}");
            Vec::new()
        });
    Html(render_index(&view, &members))
}

pub async fn get_week() -> Json<WeekResponse> {
    Json(WeekResponse {
        week: current_week_number(),
    })
}

pub async fn get_visitors(State(state): State<AppState>) -> Json<ViewState> {
    Json(state.refresh().await)
}

pub async fn get_members(State(state): State<AppState>) -> Result<Json<MembersResponse>, AppError> {
    let names = load_members(state.store.as_ref()).await?;
    Ok(Json(MembersResponse { names }))
}

pub async fn create_visitor(
    State(state): State<AppState>,
    Json(payload): Json<NewVisitor>,
) -> Result<(StatusCode, Json<VisitorRecord>), AppError> {
    let record = apply_add(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<AttendanceUpdate>, AppError> {
    let update = apply_toggle(&state, &payload.id).await?;
    Ok(Json(update))
}

pub async fn form_add(
    State(state): State<AppState>,
    Form(payload): Form<NewVisitor>,
) -> Result<Redirect, AppError> {
    apply_add(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_toggle(
    State(state): State<AppState>,
    Form(payload): Form<ToggleRequest>,
) -> Result<Redirect, AppError> {
    apply_toggle(&state, &payload.id).await?;
    Ok(Redirect::to("/"))
}

async fn apply_add(state: &AppState, payload: NewVisitor) -> Result<VisitorRecord, AppError> {
    let week = current_week_number();
    let record = add_visitor(state.store.as_ref(), payload, week).await?;
    state.refresh_for(week).await;
    Ok(record)
}

async fn apply_toggle(state: &AppState, id: &str) -> Result<AttendanceUpdate, AppError> {
    let week = current_week_number();
    let update = toggle_visitor(state.store.as_ref(), id, week, &now_label()).await?;
    state.refresh_for(week).await;
    Ok(update)
}
