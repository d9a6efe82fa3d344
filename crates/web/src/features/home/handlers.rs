use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::WebResult;
use crate::state::Settings;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Whether registration is open
    pub is_active: bool,
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Registration status", body = StatusResponse)
    ),
    tag = "home"
)]
pub async fn get_status(State(settings): State<Arc<Settings>>) -> WebResult<Response> {
    Ok(Json(StatusResponse {
        is_active: settings.is_active,
    })
    .into_response())
}
