//! Centralized configuration (environment variables + defaults).

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, loading a `.env` file first if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            host: host(),
            port: port()?,
        })
    }

    /// `host:port`, suitable for `TcpListener::bind` (host names are resolved there).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Interface to bind (default `0.0.0.0`).
pub fn host() -> String {
    std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

/// Listening port (default 3000). Set but unparseable is an error.
pub fn port() -> anyhow::Result<u16> {
    match std::env::var("PORT") {
        Ok(v) => v
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid u16, got {:?}", v)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
