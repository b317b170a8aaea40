//! Error kinds for persistence, satellite operations, commands, and logging setup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read, parse, or write the persisted state record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("state file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot access state file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("state record has {lines} lines, expected 3")]
    Malformed { lines: usize },

    #[error("state record field `{field}` has invalid value \"{value}\"")]
    InvalidField { field: &'static str, value: String },
}

impl StoreError {
    /// Wraps an I/O error, separating out a missing file.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Missing or unusable records are expected on first run and after
    /// hand edits; anything else is an unexpected I/O failure.
    pub fn is_recoverable_record(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Failure of a satellite operation.
#[derive(Error, Debug)]
pub enum SatelliteError {
    #[error("invalid orientation \"{0}\"")]
    InvalidOrientation(String),

    #[error("data counter would overflow at {0}")]
    CounterOverflow(u64),

    #[error("failed to persist satellite state: {0}")]
    Persist(#[from] StoreError),
}

/// Failure while executing one menu command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("invalid choice \"{0}\", please enter a valid option")]
    InvalidChoice(String),

    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),

    #[error("input ended before a value was entered")]
    EndOfInput,

    #[error(transparent)]
    Satellite(#[from] SatelliteError),
}

impl CommandError {
    /// Operator mistakes are warnings; everything else is an error.
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidChoice(_) | Self::Satellite(SatelliteError::InvalidOrientation(_))
        )
    }
}

/// Failure to set up the log sinks.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("unknown log level \"{0}\"")]
    InvalidLevel(String),

    #[error("log path {} does not name a file", .0.display())]
    InvalidPath(PathBuf),
}
