use axum::{Router, middleware, routing::get};

use super::handlers::{get_current_history, get_current_student, list_students};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(list_students))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/me", get(get_current_student))
        .route("/me/history", get(get_current_history))
        .merge(protected)
}
