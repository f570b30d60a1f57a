use crate::workflows::intake::ExportFormat;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different deployments of the tooling.
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
    pub telemetry: TelemetryConfig,
    pub intake: IntakeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let applications_path = env::var("APP_APPLICATIONS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let format = match env::var("APP_APPLICATIONS_FORMAT") {
            Ok(value) if !value.trim().is_empty() => Some(
                value
                    .parse::<ExportFormat>()
                    .map_err(|_| ConfigError::InvalidExportFormat { value })?,
            ),
            _ => None,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            intake: IntakeConfig {
                applications_path,
                format,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Default source for the application list when the caller names none.
#[derive(Debug, Clone, Default)]
pub struct IntakeConfig {
    pub applications_path: Option<PathBuf>,
    pub format: Option<ExportFormat>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidExportFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExportFormat { value } => write!(
                f,
                "APP_APPLICATIONS_FORMAT must be 'csv' or 'json' (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_APPLICATIONS_PATH");
        env::remove_var("APP_APPLICATIONS_FORMAT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.intake.applications_path.is_none());
        assert!(config.intake.format.is_none());
    }

    #[test]
    fn reads_intake_source_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_APPLICATIONS_PATH", "/srv/exports/applications.json");
        env::set_var("APP_APPLICATIONS_FORMAT", "JSON");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.intake.applications_path,
            Some(PathBuf::from("/srv/exports/applications.json"))
        );
        assert_eq!(config.intake.format, Some(ExportFormat::Json));
        reset_env();
    }

    #[test]
    fn rejects_unknown_export_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_APPLICATIONS_FORMAT", "xlsx");
        let error = AppConfig::load().expect_err("format rejected");
        assert!(error.to_string().contains("xlsx"));
        reset_env();
    }
}
