/// Three-line text codec for the persisted record.
pub mod record;
pub mod store;
pub mod types;

pub use store::StateStore;
pub use types::{DATA_QUANTUM, Orientation, PanelStatus, SatelliteState};
