use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub desk: DeskConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("DESK_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let capacity = env::var("DESK_CAPACITY")
            .unwrap_or_else(|_| DeskConfig::DEFAULT_CAPACITY.to_string())
            .parse::<u16>()
            .ok()
            .filter(|capacity| *capacity > 0)
            .ok_or(ConfigError::InvalidCapacity)?;

        let export_path = PathBuf::from(
            env::var("DESK_EXPORT_PATH")
                .unwrap_or_else(|_| DeskConfig::DEFAULT_EXPORT_PATH.to_string()),
        );

        let log_level = env::var("DESK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            desk: DeskConfig {
                capacity,
                export_path,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for the registries and the export sink.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Bound of both identifier spaces (ids run 1..=capacity).
    pub capacity: u16,
    /// Destination for the NEW-request snapshot export.
    pub export_path: PathBuf,
}

impl DeskConfig {
    pub const DEFAULT_CAPACITY: u16 = 150;
    pub const DEFAULT_EXPORT_PATH: &'static str = "new_requests.txt";
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            export_path: PathBuf::from(Self::DEFAULT_EXPORT_PATH),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity => {
                write!(f, "DESK_CAPACITY must be a positive u16")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
