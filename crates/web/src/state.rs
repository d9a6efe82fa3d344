use std::sync::Arc;

use axum::extract::FromRef;
use storage::Database;

use crate::auth0::Auth0Client;
use crate::config::Config;

/// Settings the handlers need besides the database.
#[derive(Debug, Clone)]
pub struct Settings {
    pub public_url: String,
    pub is_active: bool,
    pub cookie_secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth0: Arc<Auth0Client>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            db,
            auth0: Arc::new(Auth0Client::new(
                &config.auth0_domain,
                &config.auth0_client_id,
                &config.auth0_client_secret,
            )?),
            settings: Arc::new(Settings {
                public_url: config.public_url.clone(),
                is_active: config.is_active,
                cookie_secure: config.cookie_secure,
            }),
        })
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

impl FromRef<AppState> for Arc<Auth0Client> {
    fn from_ref(state: &AppState) -> Self {
        state.auth0.clone()
    }
}
