use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::event::CreateEventRequest, models::Event};
use validator::Validate;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all announced events", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_events(&*state.read().await);

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event(&*state.read().await, &id)?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event announced successfully", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(&mut *state.write().await, req);
    tracing::info!(event_id = %event.id, name = %event.name, "Event announced");

    Ok((StatusCode::CREATED, Json(event)).into_response())
}
