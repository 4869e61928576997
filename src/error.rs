/// Contract violations by the caller. Occupied cells and finished games are
/// not errors; see [`crate::game::MoveOutcome`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {index} is out of range (board has {len} cells)")]
    InvalidCell { index: usize, len: usize },
    #[error("step {step} is out of range (history has {len} entries)")]
    InvalidStep { step: usize, len: usize },
}
