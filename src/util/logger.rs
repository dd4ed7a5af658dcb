use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::{non_blocking, rolling};

use crate::config::app_conf::AppConfig;

pub struct Logger {
    pub guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
}

impl Logger {
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let guards = Self::setup_logging(config)?;
        Ok(Logger { guards })
    }

    pub fn setup_logging(
        config: &AppConfig,
    ) -> Result<Vec<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&config.log_dir)?;
        std::fs::create_dir_all(format!("{}/error", config.log_dir))?;

        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,auto_reparis=debug"));

        let general_file = rolling::daily(&config.log_dir, "auto-reparis.log");
        let (non_blocking_general, guard_general) = non_blocking(general_file);

        let error_file = rolling::daily(format!("{}/error", config.log_dir), "auto-reparis-error.log");
        let (non_blocking_error, guard_error) = non_blocking(error_file);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_filter(console_filter),
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_general)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(config.file_log_level.clone())),
            )
            .with(
                fmt::layer()
                    .with_writer(non_blocking_error)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("error")),
            )
            .init();

        Ok(vec![guard_general, guard_error])
    }
}
