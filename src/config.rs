use crate::form::NumericPolicy;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Hosted prediction service used when `PREDICT_ORIGIN` is not set.
pub const DEFAULT_PREDICT_ORIGIN: &str = "https://sea-lion-app-2o5e9.ondigitalocean.app";

/// Top-level configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub predict: PredictConfig,
    pub form: FormConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let max_workers = env::var("APP_MAX_WORKERS")
            .unwrap_or_else(|_| "8".to_string())
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidWorkers)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let origin =
            env::var("PREDICT_ORIGIN").unwrap_or_else(|_| DEFAULT_PREDICT_ORIGIN.to_string());
        url::Url::parse(&origin).map_err(|source| ConfigError::InvalidOrigin {
            value: origin.clone(),
            source,
        })?;

        let timeout = match env::var("PREDICT_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => return Err(ConfigError::InvalidTimeout(raw)),
            },
            Err(_) => None,
        };

        let numeric_policy = match env::var("FORM_NUMERIC_POLICY") {
            Ok(raw) => {
                NumericPolicy::parse(&raw).ok_or(ConfigError::InvalidNumericPolicy(raw))?
            }
            Err(_) => NumericPolicy::default(),
        };

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                max_workers,
            },
            predict: PredictConfig { origin, timeout },
            form: FormConfig { numeric_policy },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl ServerConfig {
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

/// Where predictions come from.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub origin: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct FormConfig {
    pub numeric_policy: NumericPolicy,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,

    #[error("APP_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost { source: std::net::AddrParseError },

    #[error("APP_MAX_WORKERS must be a positive integer")]
    InvalidWorkers,

    #[error("PREDICT_ORIGIN '{value}' is not a valid URL")]
    InvalidOrigin {
        value: String,
        source: url::ParseError,
    },

    #[error("PREDICT_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("FORM_NUMERIC_POLICY must be 'loose' or 'strict', got '{0}'")]
    InvalidNumericPolicy(String),
}
