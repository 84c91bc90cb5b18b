/**
 * Server Configuration
 *
 * Configuration is read from environment variables once at startup. The
 * signing secret in particular is loaded here and nowhere else; it flows
 * into `AuthKeys` and is never re-read at request time.
 */

/// Process-wide configuration, immutable after `from_env`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Symmetric secret for token signing (`JWT_SECRET`)
    pub jwt_secret: String,
    /// sqlx connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Listen port (`SERVER_PORT`)
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// Falls back to development defaults with a warning when a variable is
    /// unset; a production deployment must set `JWT_SECRET`.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            "dev-secret-change-in-production".to_string()
        });

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using local sqlite file");
            "sqlite://orderdesk.db?mode=rwc".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        Self {
            jwt_secret,
            database_url,
            port,
        }
    }
}
