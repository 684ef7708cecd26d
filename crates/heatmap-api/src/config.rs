//! # Server Configuration
//!
//! Read once from the environment at startup. Every setting has a default so
//! the server runs with no environment at all, serving `./data.json`.
//!
//! | Variable                  | Default     |
//! |---------------------------|-------------|
//! | `HEATMAP_HOST`            | `0.0.0.0`   |
//! | `PORT`                    | `8080`      |
//! | `HEATMAP_DATA`            | `data.json` |
//! | `HEATMAP_STATIC_DIR`      | `static`    |
//! | `HEATMAP_DEBUG`           | `false`     |
//! | `HEATMAP_METRICS_ENABLED` | `true`      |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Invalid configuration value. Fatal at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid port number.
    #[error("invalid PORT {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),

    /// `HEATMAP_HOST` is not an IP address.
    #[error("invalid HEATMAP_HOST {0:?}: expected an IPv4 or IPv6 address")]
    InvalidHost(String),
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Path of the JSON dataset loaded at startup.
    pub data_path: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Development mode: verbose human-readable logs.
    pub debug: bool,
    /// Mount the Prometheus `/metrics` endpoint.
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            data_path: PathBuf::from("data.json"),
            static_dir: PathBuf::from("static"),
            debug: false,
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to [`AppConfig::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HEATMAP_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            data_path: lookup("HEATMAP_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            static_dir: lookup("HEATMAP_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            debug: lookup("HEATMAP_DEBUG")
                .map(|v| flag(&v))
                .unwrap_or(defaults.debug),
            // Anything other than "false" keeps metrics on.
            metrics_enabled: lookup("HEATMAP_METRICS_ENABLED")
                .map(|v| v.trim().to_lowercase() != "false")
                .unwrap_or(defaults.metrics_enabled),
        })
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
