use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::participation::RegisterParticipationRequest, models::ParticipationRecord};
use validator::Validate;

use crate::{error::WebError, middleware::auth::CurrentStudent, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/participations",
    request_body = RegisterParticipationRequest,
    params(
        ("x-student-id" = String, Header, description = "Id of the signed-in student")
    ),
    responses(
        (status = 201, description = "Participation registered", body = ParticipationRecord),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing student identity")
    ),
    tag = "participations"
)]
pub async fn register_participation(
    State(state): State<AppState>,
    CurrentStudent(student_id): CurrentStudent,
    Json(req): Json<RegisterParticipationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let record = services::register(&mut *state.write().await, &student_id, &req.event_id);
    tracing::info!(%student_id, event_id = %req.event_id, "Participation registered");

    Ok((StatusCode::CREATED, Json(record)).into_response())
}
