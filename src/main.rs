//! Satellite command simulator entry point: config, log sinks, and the menu session.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use satellite_sim::config::{CONFIG_FILE, SatelliteConfig};
use satellite_sim::logging::build_dispatch;
use satellite_sim::runner::run_session;

fn main() -> ExitCode {
    let config = match SatelliteConfig::load_or_default(Path::new(CONFIG_FILE)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    }

    let dispatch = match build_dispatch(&config.logging) {
        Ok(dispatch) => dispatch,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::dispatcher::with_default(&dispatch, || {
        let stdin = io::stdin();
        run_session(&config, stdin.lock(), io::stdout());
    });

    ExitCode::SUCCESS
}
