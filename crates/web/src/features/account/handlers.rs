use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use storage::{Database, dto::account::AccountResponse};

use super::services;
use crate::error::WebResult;
use crate::middleware::auth::{CurrentUser, SESSION_COOKIE};

#[utoipa::path(
    get,
    path = "/api/account",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 200, description = "The signed-in user's registrations", body = AccountResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "account"
)]
pub async fn get_account(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> WebResult<Response> {
    let account = services::get_account(db.pool(), user).await?;

    Ok(Json(account).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/account",
    security(
        ("session_cookie" = [])
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not logged in")
    ),
    tag = "account"
)]
pub async fn delete_account(
    State(db): State<Database>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    jar: CookieJar,
) -> WebResult<Response> {
    services::delete_account(db.pool(), &user).await?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    Ok((jar, StatusCode::NO_CONTENT).into_response())
}
