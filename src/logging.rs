use crate::ScrapError;
use std::path::PathBuf;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".into(),
            log_level: "link_scrap=info,tower_http=info".into(),
            console_output: true,
            file_output: false,
        }
    }
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the level
/// configured here.
pub fn setup_logging(config: LogConfig) -> Result<(), ScrapError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = subscriber_fmt::layer().with_target(true);
        layers.push(console_layer.boxed());
    }

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir)
            .map_err(|e| ScrapError::Logging(format!("failed to create log directory: {e}")))?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "link-scrap.log");

        let file_layer = subscriber_fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(file_appender);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| ScrapError::Logging(e.to_string()))?;

    debug!("Logging system initialized with config: {:?}", config);
    Ok(())
}
