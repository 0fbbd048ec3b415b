//! Logging bootstrap for binaries and tests that embed the decoder
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the caller, who can use `init_logging` for the default format.

use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{
    fmt::{
        self,
        format::Writer,
        FmtContext, FormatEvent, FormatFields,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::error::{ParserError, Result};

/// Custom format for log level with brackets: `[INFO]`, `[WARN]`, etc.
fn format_level(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[TRACE]",
        Level::DEBUG => "[DEBUG]",
        Level::INFO => "[INFO]",
        Level::WARN => "[WARN]",
        Level::ERROR => "[ERROR]",
    }
}

/// Event formatter that outputs: `timestamp [LEVEL] message key=value...`
///
/// Example output: `2025-12-02T00:50:44.809Z [DEBUG] Decoder created order=big`
struct BracketedLevelFormat;

impl<S, N> FormatEvent<S, N> for BracketedLevelFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let now = chrono::Utc::now();
        write!(writer, "{} ", now.format("%Y-%m-%dT%H:%M:%S%.6fZ"))?;

        let level = *event.metadata().level();
        if writer.has_ansi_escapes() {
            let color = match level {
                Level::TRACE => "\x1b[35m", // magenta
                Level::DEBUG => "\x1b[34m", // blue
                Level::INFO => "\x1b[32m",  // green
                Level::WARN => "\x1b[33m",  // yellow
                Level::ERROR => "\x1b[31m", // red
            };
            write!(writer, "{}{}\x1b[0m ", color, format_level(&level))?;
        } else {
            write!(writer, "{} ", format_level(&level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Install a global stdout subscriber
///
/// `RUST_LOG` takes precedence over `default_filter` (e.g. `"byte_parser=debug"`).
/// Calling this again after a successful install does nothing.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let mut initialized = INITIALIZED
        .lock()
        .map_err(|_| ParserError::config("Logging state lock poisoned"))?;
    if *initialized {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| {
            ParserError::config(format!("Invalid log filter {:?}: {}", default_filter, e))
        })?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(BracketedLevelFormat)
                .with_filter(filter),
        )
        .try_init()
        .map_err(|e| ParserError::config(format!("Failed to install logger: {}", e)))?;

    *initialized = true;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(&Level::INFO), "[INFO]");
        assert_eq!(format_level(&Level::TRACE), "[TRACE]");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("byte_parser=debug").unwrap();
        init_logging("byte_parser=trace").unwrap();
        tracing::debug!("logger installed");
    }
}
