use axum::{Router, routing::get};

use super::handlers::get_status;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/status", get(get_status))
}
