use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::Deserialize;
use utoipa::IntoParams;

use super::services::{self, STATE_COOKIE};
use crate::auth0::Auth0Client;
use crate::error::{WebError, WebResult};
use crate::middleware::auth::SESSION_COOKIE;
use crate::state::{AppState, Settings};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LoginParams {
    /// `recipient` or `volunteer` to land on that registration form.
    pub initial: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

#[utoipa::path(
    get,
    path = "/auth/login",
    params(LoginParams),
    responses(
        (status = 303, description = "Redirect to the identity provider")
    ),
    tag = "auth"
)]
pub async fn login(
    State(auth0): State<Arc<Auth0Client>>,
    State(settings): State<Arc<Settings>>,
    Query(params): Query<LoginParams>,
    jar: CookieJar,
) -> WebResult<Response> {
    let login_state = services::new_login_state(params.initial.as_deref());
    let url = auth0.authorize_url(&services::callback_url(&settings.public_url), &login_state)?;

    let jar = jar.add(services::state_cookie(login_state, settings.cookie_secure));

    Ok((jar, Redirect::to(url.as_str())).into_response())
}

#[utoipa::path(
    get,
    path = "/auth/callback",
    params(CallbackParams),
    responses(
        (status = 303, description = "Logged in, redirect to the landing page"),
        (status = 400, description = "State mismatch or missing code"),
        (status = 403, description = "Account is inactive"),
        (status = 502, description = "Identity provider error")
    ),
    tag = "auth"
)]
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
    jar: CookieJar,
) -> WebResult<Response> {
    let browser_state = jar.get(STATE_COOKIE).map(|cookie| cookie.value().to_owned());
    let initial = services::verify_state(browser_state.as_deref(), params.state.as_deref())?;

    let code = params
        .code
        .as_deref()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| WebError::BadRequest("Missing authorization code".into()))?;

    let redirect_uri = services::callback_url(&state.settings.public_url);
    let token = state.auth0.exchange_code(code, &redirect_uri).await?;
    let profile = state.auth0.user_info(&token.access_token).await?;

    let pool = state.db.pool();
    let user = services::sign_in(pool, &profile).await?;
    let session_token = services::open_session(pool, &user).await?;
    let landing = services::landing_for(pool, &user, &initial).await?;

    let jar = jar
        .remove(Cookie::build(STATE_COOKIE).path("/"))
        .add(services::session_cookie(session_token, state.settings.cookie_secure));

    Ok((jar, Redirect::to(landing)).into_response())
}

#[utoipa::path(
    get,
    path = "/auth/logout",
    responses(
        (status = 303, description = "Session closed, redirect to the identity provider logout")
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> WebResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        services::close_session(state.db.pool(), cookie.value()).await?;
        tracing::info!("User logged out");
    }

    let return_to = format!("{}/", state.settings.public_url);
    let url = state.auth0.logout_url(&return_to)?;

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    Ok((jar, Redirect::to(url.as_str())).into_response())
}
