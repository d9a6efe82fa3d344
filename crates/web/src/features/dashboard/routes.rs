use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{
    all_handouts, assign_volunteer, export_csv, get_volunteer, list_recipients, list_volunteers,
    record_actuals, volunteer_handout,
};
use crate::middleware::auth::{require_login, require_staff};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/volunteers", get(list_volunteers))
        .route("/volunteers/:id", get(get_volunteer))
        .route("/volunteers/:id/assignment", put(assign_volunteer))
        .route("/volunteers/:id/handout", get(volunteer_handout))
        .route("/recipients", get(list_recipients))
        .route("/recipients/:id/actuals", put(record_actuals))
        .route("/handouts", get(all_handouts))
        .route("/export.csv", get(export_csv))
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn_with_state(state, require_login))
}
