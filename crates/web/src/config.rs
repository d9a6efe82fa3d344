use anyhow::{Context, Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Externally visible base URL, used for OAuth redirects.
    pub public_url: String,
    pub auth0_domain: String,
    pub auth0_client_id: String,
    pub auth0_client_secret: String,
    /// Whether registration is currently open.
    pub is_active: bool,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            public_url: std::env::var("PUBLIC_URL")
                .context("Cannot load PUBLIC_URL env variable")?
                .trim_end_matches('/')
                .to_string(),
            auth0_domain: std::env::var("AUTH0_DOMAIN")
                .context("Cannot load AUTH0_DOMAIN env variable")?,
            auth0_client_id: std::env::var("AUTH0_CLIENT_ID")
                .context("Cannot load AUTH0_CLIENT_ID env variable")?,
            auth0_client_secret: std::env::var("AUTH0_CLIENT_SECRET")
                .context("Cannot load AUTH0_CLIENT_SECRET env variable")?,
            is_active: parse_flag(std::env::var("ACTIVE").ok(), true)
                .context("ACTIVE must be a boolean")?,
            cookie_secure: parse_flag(std::env::var("COOKIE_SECURE").ok(), true)
                .context("COOKIE_SECURE must be a boolean")?,
        })
    }
}

fn parse_flag(value: Option<String>, default: bool) -> Result<bool> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_defaults() {
        assert!(parse_flag(None, true).unwrap());
        assert!(!parse_flag(None, false).unwrap());
        assert!(parse_flag(Some("  ".to_string()), true).unwrap());
    }

    #[test]
    fn test_parse_flag_values() {
        assert!(parse_flag(Some("TRUE".to_string()), false).unwrap());
        assert!(parse_flag(Some("1".to_string()), false).unwrap());
        assert!(!parse_flag(Some("off".to_string()), true).unwrap());
        assert!(parse_flag(Some("maybe".to_string()), true).is_err());
    }
}
