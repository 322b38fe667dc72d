use std::io;

use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggerConfig};
use crate::error::{LoggerError, Result};
use crate::redactor::PiiRedactor;

/// Build the level filter. `RUST_LOG` takes precedence over the configured level.
pub fn env_filter(config: &LoggerConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|e| LoggerError::InvalidFilter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber. Diagnostics go to stderr so that stdout
/// carries only the program's own output.
pub fn init_logging(config: &LoggerConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let init_result = match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
    };

    init_result.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

/// Redactor matching the configuration's redaction setting
pub fn redactor_for(config: &LoggerConfig) -> PiiRedactor {
    if config.redaction_enabled {
        PiiRedactor::default()
    } else {
        PiiRedactor::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggerConfig::default().with_level("admission=notalevel");
        assert!(matches!(env_filter(&config), Err(LoggerError::InvalidFilter { .. })));
    }

    #[test]
    fn test_redactor_follows_config() {
        let mut config = LoggerConfig::default();
        assert!(redactor_for(&config).is_enabled());

        config.redaction_enabled = false;
        let redactor = redactor_for(&config).with_identifier("John");
        assert!(!redactor.is_enabled());
        assert_eq!(redactor.redact("Patient John admitted"), "Patient John admitted");
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = LoggerConfig::default();
        let _ = init_logging(&config);
        let second = init_logging(&config);
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized(_))));
    }
}
