use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::config::SatelliteConfig;
use crate::console::Dispatcher;
use crate::io::export::export_csv;
use crate::satellite::Satellite;
use crate::state::StateStore;

/// Runs one interactive session against the configured state file.
///
/// Loads the satellite, drives the menu loop over `input`/`output` until
/// exit, then writes the transcript CSV if `session.history_out` is set.
/// Returns the satellite as it was at exit.
pub fn run_session<R: BufRead, W: Write>(
    config: &SatelliteConfig,
    input: R,
    output: W,
) -> Satellite {
    let satellite = Satellite::open(StateStore::new(&config.storage.state_file))
        .record_transcript(config.session.history_out.is_some());
    let mut dispatcher = Dispatcher::new(satellite, input, output);
    dispatcher.run();
    let satellite = dispatcher.into_satellite();

    if let Some(path) = &config.session.history_out {
        match export_csv(satellite.transcript(), path) {
            Ok(()) => info!(
                "Session transcript ({} entries) written to {}.",
                satellite.transcript().len(),
                path.display()
            ),
            Err(e) => error!(
                "Failed to write session transcript to {}: {e}",
                path.display()
            ),
        }
    }

    satellite
}
