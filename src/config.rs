//! Runtime configuration
//!
//! Loaded from an optional `.env` file and the environment. The pricing
//! catalogs are fixed and not configurable here.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::warn;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind host for the quote API
    pub host: String,
    /// Bind port for the quote API
    pub port: u16,
    /// Default log directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unparseable values keep
    /// their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(host) = lookup("GYM_HOST") {
            cfg.host = host;
        }

        // GYM_PORT wins over the generic PORT
        for key in ["PORT", "GYM_PORT"] {
            if let Some(port) = lookup(key) {
                match port.parse::<u16>() {
                    Ok(p) => cfg.port = p,
                    Err(_) => warn!("Ignoring invalid {}={:?}", key, port),
                }
            }
        }

        if let Some(level) = lookup("GYM_LOG") {
            cfg.log_level = level;
        }

        cfg
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}
