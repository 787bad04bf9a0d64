use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::core::{ChClient, ChError, Pacing};

/// Top-level configuration for the API service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Read `.env` (if any), then the `CH_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unparseable value.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CH_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("CH_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => 5000,
        };

        let log_level = lookup("CH_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let base_url = match lookup("CH_UPSTREAM_URL") {
            Some(raw) => Url::parse(raw.trim())
                .map_err(|source| ConfigError::InvalidUrl { value: raw, source })?,
            None => Url::parse("https://companieshouse.id/").map_err(|source| {
                ConfigError::InvalidUrl {
                    value: "https://companieshouse.id/".into(),
                    source,
                }
            })?,
        };
        let timeout = Duration::from_secs(parse_number(&lookup, "CH_TIMEOUT_SECS", 10)?);
        let pacing = Duration::from_millis(parse_number(&lookup, "CH_PACING_MS", 1000)?);

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            upstream: UpstreamConfig {
                base_url,
                timeout,
                pacing,
            },
        })
    }
}

fn parse_number<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        None => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidHost` unless the host is `localhost` or an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where and how politely the registry is queried.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub pacing: Duration,
}

impl UpstreamConfig {
    /// # Errors
    ///
    /// Propagates `ChClientBuilder::build` failures.
    pub fn client(&self) -> Result<ChClient, ChError> {
        let pacing = if self.pacing.is_zero() {
            Pacing::Disabled
        } else {
            Pacing::Fixed(self.pacing)
        };
        ChClient::builder()
            .base_url(self.base_url.clone())
            .timeout(self.timeout)
            .pacing(pacing)
            .build()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CH_PORT must be a valid u16, got '{value}'")]
    InvalidPort { value: String },
    #[error("CH_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("CH_UPSTREAM_URL must be an absolute URL, got '{value}'")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}
