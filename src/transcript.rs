use std::fmt;

use crate::state::SatelliteState;

/// A state-changing instruction that the satellite accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Rotate,
    ActivatePanels,
    DeactivatePanels,
    CollectData,
}

impl Instruction {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rotate => "Rotate",
            Self::ActivatePanels => "Activate Panels",
            Self::DeactivatePanels => "Deactivate Panels",
            Self::CollectData => "Collect Data",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted instruction and the full state right after it.
///
/// `sequence` starts at 1 for the first instruction of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub sequence: usize,
    pub instruction: Instruction,
    pub snapshot: SatelliteState,
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Current State: {}", self.instruction, self.snapshot)
    }
}
