//! CSV export for the session transcript.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::transcript::TranscriptEntry;

/// Column header for the transcript CSV export.
const HEADER: &str = "sequence,instruction,orientation,solar_panels,data_collected";

/// Exports the transcript to a CSV file at the given path.
///
/// Writes a header row followed by one row per entry, in session order.
///
/// # Arguments
///
/// * `entries` - Transcript entries of one session
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(entries: &[TranscriptEntry], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(entries, buf)
}

/// Writes the transcript as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(entries: &[TranscriptEntry], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for e in entries {
        wtr.write_record([
            e.sequence.to_string(),
            e.instruction.to_string(),
            e.snapshot.orientation.to_string(),
            e.snapshot.solar_panels.to_string(),
            e.snapshot.data_collected.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
