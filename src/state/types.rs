//! Core state types: orientation, panel status, and the satellite snapshot.

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// Amount added to `data_collected` by one successful collection.
pub const DATA_QUANTUM: u64 = 10;

/// Free-form facing direction of the satellite.
///
/// Any single-line, non-empty text without surrounding whitespace is
/// accepted; the common values are `North`, `South`, `East` and `West`. The
/// value is stored verbatim.
///
/// # Examples
///
/// ```
/// use satellite_sim::state::types::Orientation;
///
/// let o = Orientation::new("East").expect("valid orientation");
/// assert_eq!(o.as_str(), "East");
/// assert!(Orientation::new("").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation(String);

impl Orientation {
    /// Wraps `value` if it can be stored as one record line.
    ///
    /// Returns `None` for blank text, text with leading or trailing
    /// whitespace, or text containing a line break. Record lines are trimmed
    /// on load, so only these values survive a save/load cycle unchanged.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() || value.trim() != value || value.contains(['\n', '\r']) {
            return None;
        }
        Some(Self(value))
    }

    /// Capitalizes free-text input: first character upper-case, rest lower-case.
    ///
    /// ```
    /// use satellite_sim::state::types::Orientation;
    ///
    /// assert_eq!(Orientation::capitalize("sOUTH"), "South");
    /// assert_eq!(Orientation::capitalize(""), "");
    /// ```
    pub fn capitalize(input: &str) -> String {
        let mut chars = input.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self("North".to_string())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the solar panels are collecting power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStatus {
    Active,
    #[default]
    Inactive,
}

impl PanelStatus {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PanelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            other => Err(StoreError::InvalidField {
                field: "solar_panels",
                value: other.to_string(),
            }),
        }
    }
}

/// Full snapshot of the satellite: orientation, panels, and collected data.
///
/// `Default` yields the factory state used whenever no valid record exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SatelliteState {
    pub orientation: Orientation,
    pub solar_panels: PanelStatus,
    pub data_collected: u64,
}

impl fmt::Display for SatelliteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orientation: {}, Solar Panels: {}, Data Collected: {}",
            self.orientation, self.solar_panels, self.data_collected
        )
    }
}
