//! The game engine: turn order, claims, and win detection.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::{Board, Cell, ClaimedSet, Claims, Move, MoveError, MoveResult, Player, is_winning};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed yet.
    InProgress,
    /// A player completed a line. Later moves never change this.
    Won(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress => None,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// One engine is one game. X moves first and the turn passes after every
/// move, including a winning one. The engine does not lock the board after a
/// win and does not detect draws; stopping play is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) claims: Claims,
    pub(crate) current: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            claims: Claims::new(),
            current: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Claims `cell` for the current player and passes the turn.
    ///
    /// The caller must only pass unclaimed cells. A repeat claim by the same
    /// player leaves the claims unchanged; a claim on the opponent's cell is
    /// a caller bug.
    ///
    /// # Panics
    ///
    /// In debug builds, if `cell` is held by the opponent.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn apply_move(&mut self, cell: Cell) -> MoveResult {
        let player = self.current;

        if let Some(owner) = self.claims.owner_of(cell) {
            warn!(?cell, ?owner, "Move on a claimed cell");
        }

        self.claims.claim(player, cell);
        self.history.push(Move::new(player, cell));

        let won = self.has_won(player);
        if won && self.status == GameStatus::InProgress {
            info!(?player, "Player wins");
            self.status = GameStatus::Won(player);
        }

        self.current = player.opponent();
        debug!(?cell, won, next = ?self.current, "Move applied");

        if cfg!(debug_assertions) {
            self.assert_invariants(cell);
        }

        MoveResult::new(player, cell, won, self.current)
    }

    fn assert_invariants(&self, cell: Cell) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated after {cell:?}");
        }
    }

    /// Validates an index before applying it as a move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] when `index` is not in 0-8.
    /// - [`MoveError::CellClaimed`] when either player holds the cell.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<MoveResult, MoveError> {
        let cell = Cell::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if let Some(by) = self.claims.owner_of(cell) {
            return Err(MoveError::CellClaimed { cell, by });
        }
        Ok(self.apply_move(cell))
    }

    /// Rebuilds a game by applying cell indices in order, X first.
    ///
    /// # Errors
    ///
    /// The first [`MoveError`] from [`try_apply_move`](Self::try_apply_move).
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.try_apply_move(index)?;
        }
        Ok(engine)
    }

    /// Whether `player`'s claimed cells contain a winning line.
    pub fn has_won(&self, player: Player) -> bool {
        is_winning(self.claims.of(player))
    }

    /// The player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Claims for both players.
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Cells claimed by `player`.
    pub fn claimed_by(&self, player: Player) -> &ClaimedSet {
        self.claims.of(player)
    }

    /// Cells neither player holds.
    pub fn unclaimed(&self) -> Vec<Cell> {
        self.claims.unclaimed()
    }

    /// Moves in the order they were applied.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Cell-by-cell view of the current claims.
    pub fn board(&self) -> Board {
        Board::from_claims(&self.claims)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
