//! Three-line text codec for the persisted state record.
//!
//! Layout, one field per line, no trailing newline:
//!
//! ```text
//! <orientation>
//! <Active|Inactive>
//! <data_collected>
//! ```

use crate::error::StoreError;

use super::types::{Orientation, PanelStatus, SatelliteState};

/// Number of lines in a well-formed record.
pub const RECORD_LINES: usize = 3;

/// Renders `state` as a state record.
///
/// # Examples
///
/// ```
/// use satellite_sim::state::record::encode;
/// use satellite_sim::state::types::SatelliteState;
///
/// assert_eq!(encode(&SatelliteState::default()), "North\nInactive\n0");
/// ```
pub fn encode(state: &SatelliteState) -> String {
    format!(
        "{}\n{}\n{}",
        state.orientation, state.solar_panels, state.data_collected
    )
}

/// Parses a state record, trimming surrounding whitespace on each line.
///
/// # Errors
///
/// Returns [`StoreError::Malformed`] if the record does not have exactly
/// three lines, or [`StoreError::InvalidField`] if a line cannot be read as
/// its field type.
pub fn decode(raw: &str) -> Result<SatelliteState, StoreError> {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let [orientation, panels, data] = lines[..] else {
        return Err(StoreError::Malformed { lines: lines.len() });
    };

    let orientation = Orientation::new(orientation).ok_or_else(|| StoreError::InvalidField {
        field: "orientation",
        value: orientation.to_string(),
    })?;
    let solar_panels: PanelStatus = panels.parse()?;
    let data_collected = data.parse::<u64>().map_err(|_| StoreError::InvalidField {
        field: "data_collected",
        value: data.to_string(),
    })?;

    Ok(SatelliteState {
        orientation,
        solar_panels,
        data_collected,
    })
}
