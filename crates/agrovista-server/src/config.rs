//! Environment-based configuration.
//!
//! Two secrets are required before anything can start: the field
//! cipher key and the weather provider's API key. Database settings
//! fall back to local defaults.

use agrovista_db::DbConfig;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid cipher key: {0}")]
    InvalidCipherKey(String),
}

/// Everything the server needs at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub db: DbConfig,
    /// 256-bit AES-GCM key for the field cipher.
    pub cipher_key: [u8; 32],
    /// API key for the weather provider.
    pub weather_api_key: String,
    /// Optional server-side pepper for password hashing.
    pub pepper: Option<String>,
}

fn var(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    var(name).ok_or(ConfigError::Missing(name))
}

/// Decode a base64-encoded 256-bit key.
fn decode_cipher_key(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| ConfigError::InvalidCipherKey(format!("base64 decode: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| ConfigError::InvalidCipherKey("key must be exactly 32 bytes".into()))
}

/// Load configuration from `AGROVISTA_*` environment variables.
pub fn load() -> Result<ServerConfig, ConfigError> {
    let defaults = DbConfig::default();
    let db = DbConfig {
        url: var("AGROVISTA_DB_URL").unwrap_or(defaults.url),
        namespace: var("AGROVISTA_DB_NS").unwrap_or(defaults.namespace),
        database: var("AGROVISTA_DB_NAME").unwrap_or(defaults.database),
        username: var("AGROVISTA_DB_USER").unwrap_or(defaults.username),
        password: var("AGROVISTA_DB_PASS").unwrap_or(defaults.password),
    };

    Ok(ServerConfig {
        db,
        cipher_key: decode_cipher_key(&require("AGROVISTA_CIPHER_KEY")?)?,
        weather_api_key: require("AGROVISTA_OWM_KEY")?,
        pepper: var("AGROVISTA_PEPPER"),
    })
}
