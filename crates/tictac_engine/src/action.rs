//! Moves, move results, and move errors.

use crate::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A recorded move: a player claiming a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player claimed.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// What happened when a move was applied.
///
/// The front end uses this to mark `cell` with `player`'s token and, when
/// `won` is set, to announce the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    player: Player,
    cell: Cell,
    won: bool,
    next_player: Player,
}

impl MoveResult {
    pub(crate) fn new(player: Player, cell: Cell, won: bool, next_player: Player) -> Self {
        Self {
            player,
            cell,
            won,
            next_player,
        }
    }

    /// The player who just moved.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The cell that was claimed.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Whether the mover now holds a complete winning line.
    pub fn won(&self) -> bool {
        self.won
    }

    /// The player to move next.
    pub fn next_player(&self) -> Player {
        self.next_player
    }
}

/// Error returned by the checked move path.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index names no cell.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already belongs to a player.
    #[display("Cell {} is already claimed by {}", cell, by)]
    CellClaimed {
        /// The requested cell.
        cell: Cell,
        /// Current owner.
        by: Player,
    },
}

impl std::error::Error for MoveError {}
