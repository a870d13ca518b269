use flexi_logger::{Logger, LoggerHandle};

use crate::error::Result;

/// Start logging to stderr, so the report on stdout stays clean.
///
/// The level comes from `RUST_LOG` when it's set. The returned handle must
/// be kept alive for as long as logging is needed.
pub fn setup_logging() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    Ok(handle)
}
