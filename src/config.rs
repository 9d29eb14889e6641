// src/config.rs
use crate::domain::sites::{SiteDirectory, SitesError};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8083";
pub const DEFAULT_LISTINGS_SOURCE: &str = "data/listings.json";
pub const DEFAULT_DB_PATH: &str = "rental_board.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BIND_ADDR '{value}' is not a socket address: {message}")]
    BindAddr { value: String, message: String },
    #[error("Could not read sites from {path}: {source}")]
    SitesIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid sites file {path}: {source}")]
    SitesParse { path: String, source: SitesError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub listings_source: String,
    pub sites: SiteDirectory,
    pub credentials: Option<Credentials>,
    pub db_path: String,
    pub schema_path: String,
}

impl AppConfig {
    /// Read configuration from the environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr {
                value: bind_raw.clone(),
                message: e.to_string(),
            })?;

        let sites = match get("SITES_PATH") {
            Some(path) => load_sites(&path)?,
            None => SiteDirectory::default(),
        };

        let credentials = match (get("AUTH_USER"), get("AUTH_PASS")) {
            (Some(user), Some(pass)) => Some(Credentials { user, pass }),
            _ => None,
        };

        Ok(Self {
            bind_addr,
            listings_source: get("LISTINGS_SOURCE")
                .unwrap_or_else(|| DEFAULT_LISTINGS_SOURCE.to_string()),
            sites,
            credentials,
            db_path: get("DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            schema_path: get("SCHEMA_PATH").unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
        })
    }
}

fn load_sites(path: &str) -> Result<SiteDirectory, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::SitesIo {
        path: path.to_string(),
        source,
    })?;

    SiteDirectory::from_json(&text).map_err(|source| ConfigError::SitesParse {
        path: path.to_string(),
        source,
    })
}
