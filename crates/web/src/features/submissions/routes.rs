use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{
    approve_submission, get_submission, list_pending_submissions, reject_submission,
    submit_proof,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/pending", get(list_pending_submissions))
        .route("/:id", get(get_submission))
        .route("/:id/approve", post(approve_submission))
        .route("/:id/reject", post(reject_submission))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", post(submit_proof))
        .merge(protected)
}
