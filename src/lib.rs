//! Satellite command simulator: orientation, solar panels, and collected data
//! behind a text menu, persisted to a three-line state file.

pub mod config;
/// Text-menu front end.
pub mod console;
pub mod error;
pub mod io;
pub mod logging;
pub mod runner;
pub mod satellite;
/// State types, record codec, and file store.
pub mod state;
pub mod transcript;
