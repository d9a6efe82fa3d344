use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_volunteer, delete_volunteer, get_volunteer, initial_volunteer, update_volunteer,
};
use crate::middleware::auth::require_login;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_volunteer)
                .post(create_volunteer)
                .put(update_volunteer)
                .delete(delete_volunteer),
        )
        .route("/initial", get(initial_volunteer))
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
