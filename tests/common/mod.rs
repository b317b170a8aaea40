//! Shared test fixtures for integration tests.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use satellite_sim::config::SatelliteConfig;
use satellite_sim::console::Dispatcher;
use satellite_sim::satellite::Satellite;
use satellite_sim::state::StateStore;
use tempfile::TempDir;

/// Fresh temporary directory holding the state file.
pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("tempdir should be created")
}

/// Path of the state file inside `dir`.
pub fn state_path(dir: &TempDir) -> PathBuf {
    dir.path().join("satellite_state.txt")
}

/// Opens a satellite on the state file inside `dir`, keeping its transcript.
pub fn open_satellite(dir: &TempDir) -> Satellite {
    Satellite::open(StateStore::new(state_path(dir))).record_transcript(true)
}

/// Dispatcher fed from `script` (one menu selection or prompt answer per line).
pub fn scripted_dispatcher(dir: &TempDir, script: &str) -> Dispatcher<Cursor<Vec<u8>>, Vec<u8>> {
    Dispatcher::new(
        open_satellite(dir),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    )
}

/// Configuration with every file placed inside `dir`.
pub fn config_in(dir: &TempDir) -> SatelliteConfig {
    let mut cfg = SatelliteConfig::default();
    cfg.storage.state_file = state_path(dir);
    cfg.logging.log_file = dir.path().join("satellite_logs.txt");
    cfg.logging.terminal = false;
    cfg
}

/// Raw content of a file, empty if missing.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
