use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_recipient, delete_recipient, get_recipient, initial_recipient, update_recipient,
};
use crate::middleware::auth::require_login;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_recipient)
                .post(create_recipient)
                .put(update_recipient)
                .delete(delete_recipient),
        )
        .route("/initial", get(initial_recipient))
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
