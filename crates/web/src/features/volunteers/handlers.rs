use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        account::InitialFormResponse,
        volunteer::{
            CreateVolunteerRequest, UpdateVolunteerRequest, VolunteerDetailResponse,
            VolunteerResponse,
        },
    },
};
use validator::Validate;

use super::services;
use crate::error::WebResult;
use crate::middleware::auth::CurrentUser;

#[utoipa::path(
    get,
    path = "/api/volunteer",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Own volunteer group with its assignment", body = VolunteerDetailResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not signed up as a volunteer")
    ),
    tag = "volunteers"
)]
pub async fn get_volunteer(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    let volunteer = services::get_volunteer(db.pool(), user.id).await?;

    Ok(Json(volunteer).into_response())
}

#[utoipa::path(
    get,
    path = "/api/volunteer/initial",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Signup form defaults", body = InitialFormResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "volunteers"
)]
pub async fn initial_volunteer(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    Ok(Json(InitialFormResponse::from(&user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/volunteer",
    request_body = CreateVolunteerRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 201, description = "Signup complete", body = VolunteerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not logged in"),
        (status = 409, description = "Already signed up")
    ),
    tag = "volunteers"
)]
pub async fn create_volunteer(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateVolunteerRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let volunteer = services::create_volunteer(db.pool(), user.id, &req).await?;

    Ok((StatusCode::CREATED, Json(VolunteerResponse::from(volunteer))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/volunteer",
    request_body = UpdateVolunteerRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Volunteer information updated", body = VolunteerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not signed up as a volunteer")
    ),
    tag = "volunteers"
)]
pub async fn update_volunteer(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(update_req): Json<UpdateVolunteerRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_volunteer(db.pool(), user.id, &update_req).await?;

    Ok(Json(VolunteerResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/volunteer",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 204, description = "Removed as a volunteer"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not signed up as a volunteer")
    ),
    tag = "volunteers"
)]
pub async fn delete_volunteer(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    services::delete_volunteer(db.pool(), user.id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
