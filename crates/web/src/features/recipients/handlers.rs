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
        recipient::{
            CreateRecipientRequest, RecipientDetailResponse, RecipientResponse,
            UpdateRecipientRequest,
        },
    },
};
use validator::Validate;

use super::services;
use crate::error::WebResult;
use crate::middleware::auth::CurrentUser;

#[utoipa::path(
    get,
    path = "/api/recipient",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Own recipient with assigned groups", body = RecipientDetailResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not registered as a recipient")
    ),
    tag = "recipients"
)]
pub async fn get_recipient(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    let recipient = services::get_recipient(db.pool(), user.id).await?;

    Ok(Json(recipient).into_response())
}

#[utoipa::path(
    get,
    path = "/api/recipient/initial",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Registration form defaults", body = InitialFormResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "recipients"
)]
pub async fn initial_recipient(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    Ok(Json(InitialFormResponse::from(&user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/recipient",
    request_body = CreateRecipientRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 201, description = "Registration complete", body = RecipientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not logged in"),
        (status = 409, description = "Already registered")
    ),
    tag = "recipients"
)]
pub async fn create_recipient(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateRecipientRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let recipient = services::create_recipient(db.pool(), user.id, &req).await?;

    Ok((StatusCode::CREATED, Json(RecipientResponse::from(recipient))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/recipient",
    request_body = UpdateRecipientRequest,
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "Recipient information updated", body = RecipientResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not registered as a recipient")
    ),
    tag = "recipients"
)]
pub async fn update_recipient(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(update_req): Json<UpdateRecipientRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_recipient(db.pool(), user.id, &update_req).await?;

    Ok(Json(RecipientResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/recipient",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 204, description = "Recipient removed"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Not registered as a recipient")
    ),
    tag = "recipients"
)]
pub async fn delete_recipient(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    services::delete_recipient(db.pool(), user.id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
