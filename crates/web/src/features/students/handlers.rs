use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    dto::student::{HistoryEntry, StudentStanding},
    models::Student,
};

use crate::{error::WebError, middleware::auth::CurrentStudent, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/students",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all students", body = Vec<Student>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "students"
)]
pub async fn list_students(State(state): State<AppState>) -> Result<Response, WebError> {
    let students = services::list_students(&*state.read().await);

    Ok(Json(students).into_response())
}

#[utoipa::path(
    get,
    path = "/api/students/me",
    params(
        ("x-student-id" = String, Header, description = "Id of the signed-in student")
    ),
    responses(
        (status = 200, description = "Current student's points and rank", body = StudentStanding),
        (status = 401, description = "Missing student identity"),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn get_current_student(
    State(state): State<AppState>,
    CurrentStudent(student_id): CurrentStudent,
) -> Result<Response, WebError> {
    let standing = services::get_standing(&*state.read().await, &student_id)?;

    Ok(Json(standing).into_response())
}

#[utoipa::path(
    get,
    path = "/api/students/me/history",
    params(
        ("x-student-id" = String, Header, description = "Id of the signed-in student")
    ),
    responses(
        (status = 200, description = "Events the student registered for, with point values", body = Vec<HistoryEntry>),
        (status = 401, description = "Missing student identity"),
        (status = 404, description = "Student not found")
    ),
    tag = "students"
)]
pub async fn get_current_history(
    State(state): State<AppState>,
    CurrentStudent(student_id): CurrentStudent,
) -> Result<Response, WebError> {
    let history = services::get_history(&*state.read().await, &student_id)?;

    Ok(Json(history).into_response())
}
