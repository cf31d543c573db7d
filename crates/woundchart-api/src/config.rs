use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;
use woundchart_export::styles::DocumentStyles;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid WOUNDCHART_BIND '{0}'")]
    InvalidBind(String),

    #[error("invalid WOUNDCHART_LOG_FORMAT '{0}' (expected json or pretty)")]
    InvalidLogFormat(String),

    #[error("invalid WOUNDCHART_CORS_ORIGIN '{0}'")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    pub document_styles: DocumentStyles,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_format: LogFormat::Json,
            cors_origin: None,
            document_styles: DocumentStyles::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or empty variables
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = var("WOUNDCHART_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let log_format = match var("WOUNDCHART_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        let cors_origin = match var("WOUNDCHART_CORS_ORIGIN") {
            Some(origin) if origin.trim() == "*" => None,
            Some(origin) => Some(
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            bind,
            log_format,
            cors_origin,
            document_styles: DocumentStyles::default(),
        })
    }
}
