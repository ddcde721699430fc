use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target used for per-trial events, muted unless `enable_tracing` is set.
pub const TRIAL_TARGET: &str = "TRIAL";

/// Console output goes to stderr; stdout carries only the benchmark result.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stderr_layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(true);
        registry.with(file_layer).with(stderr_layer).init();
    }

    guard
}

fn filter_directives(config: &AppConfig) -> String {
    if config.enable_tracing {
        format!("{},{}=debug", config.log_level, TRIAL_TARGET)
    } else {
        format!("{},{}=off", config.log_level, TRIAL_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_target_muted_by_default() {
        let config = AppConfig::default();
        assert_eq!(filter_directives(&config), "info,TRIAL=off");
    }

    #[test]
    fn test_trial_target_enabled() {
        let config = AppConfig {
            log_level: "warn".to_string(),
            enable_tracing: true,
            ..Default::default()
        };
        assert_eq!(filter_directives(&config), "warn,TRIAL=debug");
    }
}
