use crate::error::ReflectError;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt::format::FmtSpan, EnvFilter};

/// Console logging setup
///
/// Logs go to stderr so that stdout only carries the generated prompt.
/// `RUST_LOG` directives take precedence over `level`.
pub fn setup_console_logging(level: Level) -> Result<(), ReflectError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| ReflectError::config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Console logging initialized: level={}", level);

    Ok(())
}

/// Parse a `LOG_LEVEL` / `--log-level` value, rejecting unknown names
pub fn parse_log_level(level: &str) -> Result<Level, ReflectError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ReflectError::config(format!(
            "Invalid log level '{}' (expected trace, debug, info, warn or error)",
            level
        ))),
    }
}
