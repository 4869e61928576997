use serde::Serialize;

use crate::board::{Outcome, Player};

/// Classification of the displayed snapshot as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    Winner { player: Player },
    Draw,
    InProgress { next_player: Player },
}

impl Status {
    pub fn new(outcome: Outcome, next_player: Player) -> Self {
        match outcome {
            Outcome::Winner(player) => Self::Winner { player },
            Outcome::Draw => Self::Draw,
            Outcome::InProgress => Self::InProgress { next_player },
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Winner { player } => format!("Winner: {player}"),
            Self::Draw => "Draw".to_string(),
            Self::InProgress { next_player } => format!("Next player: {next_player}"),
        }
    }
}

/// One row of the jump-to-move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub description: String,
    pub squares: Vec<Option<Player>>,
    pub is_current: bool,
}

/// Everything the renderer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Contract: exactly 9 entries, row-major, `null` for empty cells.
    pub squares: Vec<Option<Player>>,
    pub step: usize,
    pub next_player: Player,
    pub status: Status,
    pub status_text: String,
    pub moves: Vec<MoveEntry>,
}

pub fn move_description(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}
