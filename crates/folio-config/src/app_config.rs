//! Application configuration structures.

use folio_core::{LogFormat, LoggingConfig, PageRequest};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Paging defaults for list endpoints.
    #[serde(default)]
    pub paging: PagingConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Demo data loaded at startup.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "folio".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST server host.
    pub host: String,
    /// REST server port.
    pub port: u16,
    /// Enable CORS.
    pub cors_enabled: bool,
    /// CORS allowed origins.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Returns the REST server address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Paging configuration.
///
/// `one_indexed_parameters` makes the `page` query parameter one-based on
/// input; responses are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when the request names none.
    pub default_page_size: u64,
    /// Requested sizes above this are clamped.
    pub max_page_size: u64,
    /// Treat the incoming `page` parameter as one-based.
    pub one_indexed_parameters: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageRequest::DEFAULT_SIZE,
            max_page_size: 2000,
            one_indexed_parameters: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Log format (pretty, json).
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        let logging = LoggingConfig::default();
        Self {
            log_level: logging.level,
            log_format: logging.format,
        }
    }
}

impl ObservabilityConfig {
    /// Settings for [`folio_core::init_logging`].
    #[must_use]
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }
}

/// Demo data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of demo members inserted at startup; zero disables seeding.
    pub members: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { members: 100 }
    }
}
