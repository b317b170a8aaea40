//! Log sinks: timestamped lines to the terminal and to an append-only file.
//!
//! The sinks are bundled into a [`Dispatch`] that the caller scopes around
//! the session with [`tracing::dispatcher::with_default`]; nothing here
//! installs a process-wide subscriber.

use std::fmt;
use std::io;
use std::path::Path;

use chrono::Local;
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::LoggingError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// `<timestamp> - <LEVEL> - <message>` lines, local time with milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            level_name(*event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Parses a configured level name.
///
/// # Errors
///
/// Returns [`LoggingError::InvalidLevel`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Builds the dispatcher for the configured file and terminal sinks.
///
/// The log file is created if needed and appended to, never rotated.
///
/// # Errors
///
/// Returns a [`LoggingError`] if the level is unknown or the log file
/// cannot be opened.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Dispatch, LoggingError> {
    let level = parse_level(&config.level)?;
    let appender = file_appender(&config.log_file)?;

    let file = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(appender)
        .with_filter(level);
    let terminal = config.terminal.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(io::stderr)
            .with_filter(level)
    });

    Ok(Dispatch::new(Registry::default().with(file).with(terminal)))
}

/// Builds a single-sink dispatcher writing [`LineFormat`] lines to `make_writer`.
pub fn dispatch_with_writer<W>(level: LevelFilter, make_writer: W) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(make_writer)
        .with_filter(level);
    Dispatch::new(Registry::default().with(layer))
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}
