use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub jwt_secret: String,
    /// When unset, issued tokens carry no expiry (the historical contract).
    pub jwt_expires_secs: Option<i64>,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let frontend_url = env::var("FRONTEND_URL").ok();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://chirp.db".into());
        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "development-secret-change-me".into());
        let jwt_expires_secs = env::var("JWT_EXPIRES_SECS").ok().and_then(|s| s.parse().ok());
        let is_production = matches!(
            env::var("RUST_ENV").ok().as_deref(),
            Some("production") | Some("prod")
        );

        // Production hardening: refuse the development secret
        if is_production && (jwt_secret == "development-secret-change-me" || jwt_secret.len() < 16)
        {
            anyhow::bail!("JWT_SECRET must be set to a strong secret in production");
        }

        Ok(Self {
            api_port,
            frontend_url,
            database_url,
            jwt_secret,
            jwt_expires_secs,
            is_production,
        })
    }
}
