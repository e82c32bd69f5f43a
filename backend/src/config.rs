//! Environment-driven server configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. Every field has a default so the server
//! starts with no configuration at all.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SQLite URL, e.g. `sqlite:board.db`. The file is created if missing.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Single origin allowed by the CORS layer
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite:board.db".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors_origin() -> String {
    "http://localhost:8080".to_string()
}

fn default_db_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from `.env` (if present) and the environment
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        envy::from_env()
    }

    /// Build a configuration from explicit key/value pairs.
    /// Keys use the same upper-case names as the environment.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("HOST is not a valid IP address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
