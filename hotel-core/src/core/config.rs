/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATA_DIR | data | Directory for the JSON collections |
/// | LOG_LEVEL | info | tracing filter level |
/// | LOG_DIR | (unset) | When set, also write daily-rolling log files here |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/var/lib/hotel LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collections
    pub data_dir: String,
    /// tracing filter level (trace | debug | info | warn | error)
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the data directory, mainly for tests.
    pub fn with_overrides(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
