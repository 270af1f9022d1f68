use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use prdkit_security::{DEFAULT_TTL_SECS, MAX_TTL_SECS, MIN_SECRET_LEN};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid credential lifetime: {0}")]
    InvalidTokenTtl(String),
    #[error("PRDKIT_TOKEN_SECRET must be set to run the server")]
    MissingTokenSecret,
    #[error("PRDKIT_TOKEN_SECRET must be at least {min} bytes (got {len})")]
    TokenSecretTooShort { len: usize, min: usize },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: IpAddr,
    pub cors_origin: String,
    pub database_path: PathBuf,
    pub token_secret: Option<String>,
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse_port(&value)?,
            None => DEFAULT_PORT,
        };

        let host_str = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = parse_host(&host_str)?;

        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let database_path = lookup("DATABASE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(prdkit_core::default_database_path);

        let token_secret = lookup("PRDKIT_TOKEN_SECRET").filter(|secret| !secret.is_empty());
        if let Some(secret) = &token_secret {
            if secret.len() < MIN_SECRET_LEN {
                return Err(ConfigError::TokenSecretTooShort {
                    len: secret.len(),
                    min: MIN_SECRET_LEN,
                });
            }
        }

        let token_ttl_secs = match lookup("PRDKIT_TOKEN_TTL_SECS") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| (1..=MAX_TTL_SECS).contains(secs))
                .ok_or_else(|| ConfigError::InvalidTokenTtl(value.clone()))?,
            None => DEFAULT_TTL_SECS,
        };

        Ok(Config {
            port,
            host,
            cors_origin,
            database_path,
            token_secret,
            token_ttl_secs,
        })
    }

    /// Apply command-line overrides for the listen address
    pub fn with_overrides(mut self, port: Option<u16>, host: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            if port == 0 {
                return Err(ConfigError::PortOutOfRange(port));
            }
            self.port = port;
        }
        if let Some(host) = host {
            self.host = parse_host(host)?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Signing secret, required once the server is started
    pub fn require_token_secret(&self) -> Result<&[u8], ConfigError> {
        self.token_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or(ConfigError::MissingTokenSecret)
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    let port = value.trim().parse::<u16>()?;

    // Validate port is in valid range
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .trim()
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(value.to_string()))
}
