use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "warn", "lumen_canvas=trace"). When unset, `RUST_LOG` wins, then a
/// quiet default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

impl LoggingConfig {
    /// Convenience for hard-coding a filter in tools and harnesses.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in
/// `main`. Per-frame canvas diagnostics sit at trace level, so the
/// default keeps a game binary quiet at interactive frame rates.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // The host application may have installed a logger already; losing
        // canvas diagnostics is preferable to panicking its startup.
        if builder.try_init().is_err() {
            log::debug!("logger already installed, keeping it");
        } else {
            log::debug!("logging initialized");
        }
    });
}
