/// Transcript CSV export.
pub mod export;
