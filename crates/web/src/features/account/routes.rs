use axum::{Router, middleware, routing::get};

use super::handlers::{delete_account, get_account};
use crate::middleware::auth::require_login;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_account).delete(delete_account))
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
