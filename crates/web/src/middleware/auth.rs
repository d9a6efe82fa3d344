use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use storage::{Database, models::User, repository::session::SessionRepository};

use crate::error::WebError;

pub const SESSION_COOKIE: &str = "session";

/// The signed-in user, inserted into request extensions by [`require_login`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub async fn require_login(
    State(db): State<Database>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .ok_or(WebError::Unauthorized)?;

    let user = SessionRepository::new(db.pool())
        .find_user(&token)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Rejected unknown or inactive session");
            WebError::Unauthorized
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Must be layered inside [`require_login`].
pub async fn require_staff(req: Request, next: Next) -> Result<Response, WebError> {
    let CurrentUser(user) = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(WebError::Unauthorized)?;

    if !user.is_staff() {
        tracing::warn!(user_id = %user.id, "Non-staff user attempted dashboard access");
        return Err(WebError::Forbidden);
    }

    Ok(next.run(req).await)
}
