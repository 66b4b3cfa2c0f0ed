// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

pub const MIN_ADMIN_TOKEN_LEN: usize = 16;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    admin_token: String,
    uploads_dir: PathBuf,
    max_upload_bytes: usize,
    db_max_connections: u32,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://data/newsroom.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 16;

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer")))
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!("{key} must be a boolean"))),
    }
}

impl AppConfig {
    /// Build configuration from the process environment, loading `.env` first
    /// when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let admin_token = get("ADMIN_API_TOKEN").ok_or(ConfigError::Missing("ADMIN_API_TOKEN"))?;
        if admin_token.trim().len() < MIN_ADMIN_TOKEN_LEN {
            return Err(ConfigError::Invalid(format!(
                "ADMIN_API_TOKEN must be at least {MIN_ADMIN_TOKEN_LEN} characters"
            )));
        }

        let uploads_dir = get("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_uploads_dir);

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(raw) => parse_number::<usize>("MAX_UPLOAD_BYTES", &raw)?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        if max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "MAX_UPLOAD_BYTES must be a positive integer".into(),
            ));
        }

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_number::<u32>("DB_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be a positive integer".into(),
            ));
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let rate_limit_enabled = match get("RATE_LIMIT_ENABLED") {
            Some(raw) => parse_bool("RATE_LIMIT_ENABLED", &raw)?,
            None => true,
        };

        Ok(Self {
            database_url,
            listen_addr,
            admin_token: admin_token.trim().to_string(),
            uploads_dir,
            max_upload_bytes,
            db_max_connections,
            allowed_origins,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    pub fn uploads_dir(&self) -> &PathBuf {
        &self.uploads_dir
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// CORS origins; a single `*` entry allows any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
