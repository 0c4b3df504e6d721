use nsidenum_domain::EnumeratorConfig;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries nothing but the report.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &EnumeratorConfig) {
    let level = config.log_level();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized at level: {}", level);
}
