use std::env;

use crate::constants::DEFAULT_ACCESS_TOKEN_TTL_SECS;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub jwt_secret_key: String,
    pub jwt_expire_secs: i64,
    /// Directory profile pictures are written to
    pub upload_dir: String,
    /// Public URL prefix the stored filename is appended to
    pub profile_picture_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/minitter.db".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let jwt_secret_key = env::var("JWT_SECRET_KEY")
            .map_err(|_| "JWT_SECRET_KEY must be set for access token signing")?;

        let jwt_expire_secs = env::var("JWT_EXPIRE_SECS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_TOKEN_TTL_SECS.to_string())
            .parse()
            .map_err(|_| "Invalid JWT_EXPIRE_SECS")?;

        let upload_dir =
            env::var("UPLOAD_DIR").unwrap_or_else(|_| "./data/profile-pictures".to_string());

        let profile_picture_base_url = env::var("PROFILE_PICTURE_BASE_URL").unwrap_or_else(|_| {
            format!("http://localhost:{}/static/profile-pictures/", server_port)
        });

        Ok(Config {
            server_host,
            server_port,
            database_url,
            allowed_origins,
            environment,
            jwt_secret_key,
            jwt_expire_secs,
            upload_dir,
            profile_picture_base_url,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
