use tracing::{debug, instrument, trace};

use crate::board::{BOARD_LEN, Board, Outcome, Player, classify};
use crate::error::GameError;
use crate::types::{GameView, MoveEntry, Status, move_description};

/// Events forwarded by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CellClicked(usize),
    HistoryEntryClicked(usize),
}

/// Result of a move request that named an in-range cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { step: usize },
    /// Ignored: the cell already holds a mark.
    Occupied,
    /// Ignored: the displayed snapshot already has a winner or is full.
    GameOver,
}

impl MoveOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Authoritative match state: every snapshot so far plus the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_step: usize,
    next_player: Player,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
            next_player: Player::X,
        }
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn current(&self) -> &Board {
        &self.history[self.current_step]
    }

    pub fn outcome(&self) -> Outcome {
        classify(self.current())
    }

    /// Places the next player's mark on `cell` of the displayed snapshot.
    ///
    /// Occupied cells and decided games leave the state untouched and are
    /// reported through [`MoveOutcome`] rather than as errors. An applied move
    /// first drops every snapshot after the displayed one.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, GameError> {
        if cell >= BOARD_LEN {
            return Err(GameError::InvalidCell {
                index: cell,
                len: BOARD_LEN,
            });
        }

        let current = *self.current();
        if current.classify().is_decided() {
            trace!("move ignored: game already decided");
            return Ok(MoveOutcome::GameOver);
        }
        if !current.is_empty_at(cell) {
            trace!("move ignored: cell occupied");
            return Ok(MoveOutcome::Occupied);
        }

        self.history.truncate(self.current_step + 1);
        self.history.push(current.with_mark(cell, self.next_player));
        self.current_step = self.history.len() - 1;
        self.next_player = self.next_player.opponent();
        debug_assert_eq!(self.next_player, Player::for_step(self.current_step));

        debug!(
            new_step = self.current_step,
            next_player = %self.next_player,
            "move applied"
        );
        Ok(MoveOutcome::Applied {
            step: self.current_step,
        })
    }

    /// Displays snapshot `step` without touching history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        self.next_player = Player::for_step(step);
        debug!(next_player = %self.next_player, "jumped");
        Ok(())
    }

    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), GameError> {
        match event {
            GameEvent::CellClicked(cell) => self.apply_move(cell).map(|_| ()),
            GameEvent::HistoryEntryClicked(step) => self.jump_to(step),
        }
    }

    pub fn to_view(&self) -> GameView {
        let status = Status::new(self.outcome(), self.next_player);
        let moves = self
            .history
            .iter()
            .enumerate()
            .map(|(step, board)| MoveEntry {
                step,
                description: move_description(step),
                squares: board.cells().to_vec(),
                is_current: step == self.current_step,
            })
            .collect();

        GameView {
            squares: self.current().cells().to_vec(),
            step: self.current_step,
            next_player: self.next_player,
            status_text: status.label(),
            status,
            moves,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
