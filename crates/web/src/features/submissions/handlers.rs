use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::submission::{ApprovalResponse, SubmitProofRequest},
    models::Submission,
};
use validator::Validate;

use crate::{error::WebError, middleware::auth::CurrentStudent, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = SubmitProofRequest,
    params(
        ("x-student-id" = String, Header, description = "Id of the signed-in student")
    ),
    responses(
        (status = 201, description = "Proof submitted for review", body = Submission),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing student identity"),
        (status = 404, description = "Student or event not found")
    ),
    tag = "submissions"
)]
pub async fn submit_proof(
    State(state): State<AppState>,
    CurrentStudent(student_id): CurrentStudent,
    Json(req): Json<SubmitProofRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let submission = services::submit_proof(&mut *state.write().await, &student_id, req)?;
    tracing::info!(
        submission_id = %submission.id,
        %student_id,
        event_id = %submission.event_id,
        "Proof submitted"
    );

    Ok((StatusCode::CREATED, Json(submission)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions/pending",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Submissions awaiting review", body = Vec<Submission>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "submissions"
)]
pub async fn list_pending_submissions(
    State(state): State<AppState>,
) -> Result<Response, WebError> {
    let pending = services::list_pending(&*state.read().await);

    Ok(Json(pending).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions/{id}",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Submission found", body = Submission),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Submission not found")
    ),
    tag = "submissions"
)]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let submission = services::get_submission(&*state.read().await, &id)?;

    Ok(Json(submission).into_response())
}

#[utoipa::path(
    post,
    path = "/api/submissions/{id}/approve",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Submission approved and points credited", body = ApprovalResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Submission not found"),
        (status = 409, description = "Submission was already reviewed")
    ),
    tag = "submissions"
)]
pub async fn approve_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let approval = services::approve(&mut *state.write().await, &id)?;
    tracing::info!(
        submission_id = %id,
        student_id = %approval.submission.student_id,
        points = approval.points_credited,
        "Submission approved"
    );

    Ok(Json(ApprovalResponse::from(approval)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/submissions/{id}/reject",
    params(
        ("id" = String, Path, description = "Submission id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Submission rejected", body = Submission),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Submission not found"),
        (status = 409, description = "Submission was already reviewed")
    ),
    tag = "submissions"
)]
pub async fn reject_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let submission = services::reject(&mut *state.write().await, &id)?;
    tracing::info!(submission_id = %id, "Submission rejected");

    Ok(Json(submission).into_response())
}
