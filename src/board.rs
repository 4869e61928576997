use std::fmt;

use serde::Serialize;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// The player to move once `step` marks are on the board.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Self::X } else { Self::O }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One immutable 3x3 snapshot, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Player>; BOARD_LEN],
}

impl Board {
    /// Creates the all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_LEN],
        }
    }

    /// Returns the mark at `index`, or `None` when the cell is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        index < BOARD_LEN && self.cells[index].is_none()
    }

    /// Returns a copy of this board with `index` set to `player`.
    /// The receiver is left untouched; out-of-range indices yield an identical copy.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Some(player);
        }
        next
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Option<Player>; BOARD_LEN] {
        &self.cells
    }

    pub fn classify(&self) -> Outcome {
        classify(self)
    }
}

/// Reports a winner, a draw, or an unfinished game for `board`.
///
/// Lines are checked in `LINES` order and the first complete one wins. A full
/// board without a complete line is a draw. Every cell belongs to at least one
/// line, so "some line has a gap" and "some cell is empty" are the same test.
pub fn classify(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        if let Some(player) = board.cells[a]
            && board.cells[b] == Some(player)
            && board.cells[c] == Some(player)
        {
            return Outcome::Winner(player);
        }
    }

    if board.occupied_count() < BOARD_LEN {
        Outcome::InProgress
    } else {
        Outcome::Draw
    }
}
