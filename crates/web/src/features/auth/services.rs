use axum_extra::extract::cookie::{Cookie, SameSite};
use rand::{Rng, distr::Alphanumeric};
use sqlx::PgPool;
use storage::{
    models::User,
    repository::{
        recipient::RecipientRepository, session::SessionRepository, user::UserRepository,
        volunteer::VolunteerRepository,
    },
};

use crate::auth0::UserProfile;
use crate::error::{WebError, WebResult};
use crate::middleware::auth::SESSION_COOKIE;

pub const STATE_COOKIE: &str = "oauth_state";

const SESSION_TOKEN_LENGTH: usize = 48;
const STATE_NONCE_LENGTH: usize = 32;
const UNKNOWN_NAME: &str = "(Unknown)";

pub fn random_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Builds the `"{initial}|{nonce}"` login state. The part before the bar
/// picks the landing page after login.
pub fn new_login_state(initial: Option<&str>) -> String {
    let initial = match initial {
        Some(initial @ ("recipient" | "volunteer")) => initial,
        _ => "None",
    };
    format!("{}|{}", initial, random_token(STATE_NONCE_LENGTH))
}

/// Checks the state echoed by the provider against the one stored in the
/// browser and returns the `initial` part.
pub fn verify_state(browser_state: Option<&str>, returned_state: Option<&str>) -> WebResult<String> {
    match (browser_state, returned_state) {
        (Some(browser), Some(returned)) if !browser.is_empty() && browser == returned => {
            let initial = browser
                .split_once('|')
                .map(|(initial, _)| initial)
                .unwrap_or(browser);
            Ok(initial.to_string())
        }
        _ => {
            tracing::warn!("OAuth state mismatch");
            Err(WebError::BadRequest("Login state mismatch".into()))
        }
    }
}

pub fn callback_url(public_url: &str) -> String {
    format!("{}/auth/callback", public_url)
}

/// Where to send a user right after login.
pub fn landing_path(
    initial: &str,
    is_admin: bool,
    has_recipient: bool,
    has_volunteer: bool,
) -> &'static str {
    match initial {
        "recipient" => "/recipient/create",
        "volunteer" => "/volunteer/create",
        _ if is_admin => "/dashboard",
        _ => match (has_recipient, has_volunteer) {
            (true, true) => "/account",
            (true, false) => "/recipient",
            (false, true) => "/volunteer",
            (false, false) => "/account",
        },
    }
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

pub fn state_cookie(state: String, secure: bool) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, state))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Records the provider profile and rejects deactivated accounts.
pub async fn sign_in(pool: &PgPool, profile: &UserProfile) -> WebResult<User> {
    let name = profile.name.as_deref().unwrap_or(UNKNOWN_NAME);

    let user = UserRepository::new(pool)
        .upsert_profile(&profile.subject, name, profile.email.as_deref(), &profile.raw)
        .await?;

    if !user.is_active {
        tracing::warn!(user_id = %user.id, "Inactive user attempted to log in");
        return Err(WebError::Forbidden);
    }

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(user)
}

pub async fn open_session(pool: &PgPool, user: &User) -> WebResult<String> {
    let token = random_token(SESSION_TOKEN_LENGTH);
    SessionRepository::new(pool).create(&token, user.id).await?;
    Ok(token)
}

pub async fn close_session(pool: &PgPool, token: &str) -> WebResult<()> {
    SessionRepository::new(pool).delete(token).await?;
    Ok(())
}

pub async fn landing_for(pool: &PgPool, user: &User, initial: &str) -> WebResult<&'static str> {
    let has_recipient = RecipientRepository::new(pool)
        .find_by_user(user.id)
        .await?
        .is_some();
    let has_volunteer = VolunteerRepository::new(pool)
        .find_by_user(user.id)
        .await?
        .is_some();

    Ok(landing_path(initial, user.is_admin, has_recipient, has_volunteer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_token_is_alphanumeric() {
        let token = random_token(48);
        assert_eq!(token.len(), 48);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(token, random_token(48));
    }

    #[test]
    fn test_login_state_keeps_known_initial() {
        assert!(new_login_state(Some("recipient")).starts_with("recipient|"));
        assert!(new_login_state(Some("volunteer")).starts_with("volunteer|"));
        assert!(new_login_state(Some("admin")).starts_with("None|"));
        assert!(new_login_state(None).starts_with("None|"));
    }

    #[test]
    fn test_verify_state_round_trip() {
        let state = new_login_state(Some("volunteer"));
        let initial = verify_state(Some(&state), Some(&state)).unwrap();
        assert_eq!(initial, "volunteer");
    }

    #[test]
    fn test_verify_state_rejects_mismatch_or_missing() {
        assert!(verify_state(Some("None|a"), Some("None|b")).is_err());
        assert!(verify_state(None, Some("None|a")).is_err());
        assert!(verify_state(Some("None|a"), None).is_err());
        assert!(verify_state(Some(""), Some("")).is_err());
    }

    #[test]
    fn test_landing_prefers_initial_choice() {
        assert_eq!(landing_path("recipient", true, true, true), "/recipient/create");
        assert_eq!(landing_path("volunteer", false, false, false), "/volunteer/create");
    }

    #[test]
    fn test_landing_for_staff() {
        assert_eq!(landing_path("None", true, false, true), "/dashboard");
    }

    #[test]
    fn test_landing_by_registrations() {
        assert_eq!(landing_path("None", false, true, true), "/account");
        assert_eq!(landing_path("None", false, true, false), "/recipient");
        assert_eq!(landing_path("None", false, false, true), "/volunteer");
        assert_eq!(landing_path("None", false, false, false), "/account");
    }

    #[test]
    fn test_session_cookie_flags() {
        let cookie = session_cookie("abc".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
