//! The satellite: in-memory state plus the operations that mutate and persist it.

use tracing::{error, info, warn};

use crate::error::SatelliteError;
use crate::state::{DATA_QUANTUM, Orientation, PanelStatus, SatelliteState, StateStore};
use crate::transcript::{Instruction, TranscriptEntry};

/// Result of a [`Satellite::collect_data`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// Data was collected; `total` is the new counter value.
    Collected { total: u64 },
    /// Panels were inactive, nothing changed.
    PanelsInactive,
}

/// Satellite state bound to its store.
///
/// Every accepted instruction mutates the state, persists it immediately,
/// and logs a transcript line. Entries are kept in memory only after
/// [`Satellite::record_transcript`] enables it; the kept transcript grows
/// with every instruction for the rest of the session. There are no
/// transition rules between orientations or panel states.
pub struct Satellite {
    state: SatelliteState,
    store: StateStore,
    instructions: usize,
    transcript: Option<Vec<TranscriptEntry>>,
}

impl Satellite {
    /// Loads the satellite from `store`, falling back to the default state.
    ///
    /// Never fails: a missing or malformed record is logged as a warning,
    /// any other read failure as an error.
    pub fn open(store: StateStore) -> Self {
        let state = match store.load() {
            Ok(state) => {
                info!("Satellite state loaded from {}.", store.path().display());
                state
            }
            Err(e) if e.is_recoverable_record() => {
                warn!("{e}. Using default state.");
                SatelliteState::default()
            }
            Err(e) => {
                error!("An error occurred while loading state: {e}. Using default state.");
                SatelliteState::default()
            }
        };

        Self {
            state,
            store,
            instructions: 0,
            transcript: None,
        }
    }

    /// Keeps (or stops keeping) transcript entries in memory.
    ///
    /// Disabling drops the entries collected so far.
    #[must_use]
    pub fn record_transcript(mut self, enabled: bool) -> Self {
        let kept = self.transcript.take().unwrap_or_default();
        self.transcript = enabled.then_some(kept);
        self
    }

    pub fn state(&self) -> &SatelliteState {
        &self.state
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Accepted instructions of this session, oldest first.
    ///
    /// Empty unless recording was enabled with [`Satellite::record_transcript`].
    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.transcript.as_deref().unwrap_or_default()
    }

    /// Points the satellite at `direction`, stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SatelliteError::InvalidOrientation`] for blank, padded, or
    /// multi-line text (state untouched), or [`SatelliteError::Persist`] if the new
    /// state could not be written.
    pub fn rotate(&mut self, direction: &str) -> Result<(), SatelliteError> {
        let orientation = Orientation::new(direction)
            .ok_or_else(|| SatelliteError::InvalidOrientation(direction.to_string()))?;
        info!("Rotating satellite to {orientation}.");
        self.state.orientation = orientation;
        self.commit(Instruction::Rotate)
    }

    /// # Errors
    ///
    /// Returns [`SatelliteError::Persist`] if the new state could not be written.
    pub fn activate_panels(&mut self) -> Result<(), SatelliteError> {
        info!("Activating solar panels.");
        self.state.solar_panels = PanelStatus::Active;
        self.commit(Instruction::ActivatePanels)
    }

    /// # Errors
    ///
    /// Returns [`SatelliteError::Persist`] if the new state could not be written.
    pub fn deactivate_panels(&mut self) -> Result<(), SatelliteError> {
        info!("Deactivating solar panels.");
        self.state.solar_panels = PanelStatus::Inactive;
        self.commit(Instruction::DeactivatePanels)
    }

    /// Adds [`DATA_QUANTUM`] to the counter while the panels are active.
    ///
    /// With inactive panels nothing is mutated or written and a warning is
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns [`SatelliteError::CounterOverflow`] if the counter is
    /// saturated, or [`SatelliteError::Persist`] if the new state could not
    /// be written.
    pub fn collect_data(&mut self) -> Result<CollectOutcome, SatelliteError> {
        if !self.state.solar_panels.is_active() {
            warn!("Cannot collect data. Solar panels are inactive.");
            return Ok(CollectOutcome::PanelsInactive);
        }

        let current = self.state.data_collected;
        let total = current
            .checked_add(DATA_QUANTUM)
            .ok_or(SatelliteError::CounterOverflow(current))?;

        info!("Collecting data.");
        self.state.data_collected = total;
        self.commit(Instruction::CollectData)?;
        Ok(CollectOutcome::Collected { total })
    }

    /// Persists the state and records the instruction.
    ///
    /// The transcript line is logged even when the write fails; the in-memory
    /// state keeps the mutation either way.
    fn commit(&mut self, instruction: Instruction) -> Result<(), SatelliteError> {
        let saved = self.store.save(&self.state);
        if saved.is_ok() {
            info!("Satellite state saved.");
        }

        self.instructions += 1;
        let entry = TranscriptEntry {
            sequence: self.instructions,
            instruction,
            snapshot: self.state.clone(),
        };
        info!("{entry}");
        if let Some(transcript) = &mut self.transcript {
            transcript.push(entry);
        }

        saved.map_err(SatelliteError::from)
    }
}
