use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{WebError, WebResult};

const SCOPE: &str = "openid profile email";

/// Client for the Auth0 authorization-code flow.
#[derive(Debug)]
pub struct Auth0Client {
    domain: String,
    client_id: String,
    client_secret: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
    grant_type: &'a str,
}

#[derive(Deserialize)]
struct ProfileClaims {
    sub: String,
    name: Option<String>,
    email: Option<String>,
}

/// The userinfo payload, with the claims we store pulled out.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub subject: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub raw: serde_json::Value,
}

impl UserProfile {
    pub fn from_claims(raw: serde_json::Value) -> WebResult<Self> {
        let claims: ProfileClaims = serde_json::from_value(raw.clone())
            .map_err(|e| WebError::Upstream(format!("Malformed userinfo payload: {}", e)))?;

        if claims.sub.trim().is_empty() {
            return Err(WebError::Upstream("Userinfo payload has an empty subject".into()));
        }

        Ok(Self {
            subject: claims.sub,
            name: claims.name.filter(|name| !name.trim().is_empty()),
            email: claims.email.filter(|email| !email.trim().is_empty()),
            raw,
        })
    }
}

impl Auth0Client {
    pub fn new(domain: &str, client_id: &str, client_secret: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("RakeUp/1.0")
            .build()?;

        Ok(Self {
            domain: domain.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("https://{}{}", self.domain, path)
    }

    pub fn authorize_url(&self, redirect_uri: &str, state: &str) -> WebResult<Url> {
        Url::parse_with_params(
            &self.endpoint("/authorize"),
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("scope", SCOPE),
                ("redirect_uri", redirect_uri),
                ("state", state),
                ("screen_hint", "signup"),
            ],
        )
        .map_err(|e| WebError::InternalServerError(format!("Invalid authorize URL: {}", e)))
    }

    pub fn logout_url(&self, return_to: &str) -> WebResult<Url> {
        Url::parse_with_params(
            &self.endpoint("/v2/logout"),
            &[
                ("client_id", self.client_id.as_str()),
                ("returnTo", return_to),
            ],
        )
        .map_err(|e| WebError::InternalServerError(format!("Invalid logout URL: {}", e)))
    }

    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> WebResult<TokenResponse> {
        tracing::debug!("Exchanging authorization code");

        let token = self
            .http
            .post(self.endpoint("/oauth/token"))
            .json(&TokenRequest {
                client_id: &self.client_id,
                client_secret: &self.client_secret,
                redirect_uri,
                code,
                grant_type: "authorization_code",
            })
            .send()
            .await?
            .error_for_status()?
            .json::<TokenResponse>()
            .await?;

        Ok(token)
    }

    pub async fn user_info(&self, access_token: &str) -> WebResult<UserProfile> {
        let raw = self
            .http
            .get(self.endpoint("/userinfo"))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        UserProfile::from_claims(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn client() -> Auth0Client {
        Auth0Client::new("rakeup.us.auth0.com/", "client-123", "secret").unwrap()
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_authorize_url() {
        let url = client()
            .authorize_url("https://rakeup.org/auth/callback", "volunteer|abc")
            .unwrap();

        assert_eq!(url.host_str(), Some("rakeup.us.auth0.com"));
        assert_eq!(url.path(), "/authorize");

        let params = query(&url);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(params["scope"], "openid profile email");
        assert_eq!(params["redirect_uri"], "https://rakeup.org/auth/callback");
        assert_eq!(params["state"], "volunteer|abc");
        assert_eq!(params["screen_hint"], "signup");
    }

    #[test]
    fn test_logout_url() {
        let url = client().logout_url("https://rakeup.org/").unwrap();
        assert_eq!(url.path(), "/v2/logout");
        let params = query(&url);
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(params["returnTo"], "https://rakeup.org/");
    }

    #[test]
    fn test_profile_from_claims() {
        let profile = UserProfile::from_claims(json!({
            "sub": "auth0|42",
            "name": "Mary \"Mo\" Jones-Lee",
            "email": "mo@example.com",
            "picture": "https://example.com/mo.png"
        }))
        .unwrap();

        assert_eq!(profile.subject, "auth0|42");
        assert_eq!(profile.name.as_deref(), Some("Mary \"Mo\" Jones-Lee"));
        assert_eq!(profile.email.as_deref(), Some("mo@example.com"));
        assert_eq!(profile.raw["picture"], "https://example.com/mo.png");
    }

    #[test]
    fn test_profile_blank_claims_are_dropped() {
        let profile = UserProfile::from_claims(json!({"sub": "google|1", "name": " ", "email": ""}))
            .unwrap();
        assert!(profile.name.is_none());
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_profile_requires_subject() {
        assert!(UserProfile::from_claims(json!({"name": "Nobody"})).is_err());
        assert!(UserProfile::from_claims(json!({"sub": ""})).is_err());
    }
}
