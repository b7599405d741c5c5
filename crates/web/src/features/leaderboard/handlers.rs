use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::dto::{
    common::{PaginatedResponse, PaginationParams},
    leaderboard::LeaderboardEntry,
};

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(PaginationParams),
    responses(
        (status = 200, description = "Leaderboard retrieved successfully", body = PaginatedResponse<LeaderboardEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let entries = services::get_leaderboard(&*state.read().await);

    Ok(Json(PaginatedResponse::paginate(entries, &params)).into_response())
}
