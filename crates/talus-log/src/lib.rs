//! Structured logging for the talus generator.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds,
//! an additional JSON log file. The filter honours `RUST_LOG` first and then
//! the `debug.log_level` setting from the configuration.

use std::path::Path;

use talus_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config specify one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written in debug builds.
pub const LOG_FILE_NAME: &str = "talus.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Optional directory for the JSON log file (debug builds only)
/// * `debug_build` - Whether file logging should be enabled
/// * `config` - Optional configuration supplying the log level
///
/// # Examples
///
/// ```no_run
/// use talus_config::Config;
/// use talus_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Resolve the filter directive from the config, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.clone()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}
