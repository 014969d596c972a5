//! Tic-tac-toe game engine.
//!
//! The engine owns whose turn it is and the set of cells each player has
//! claimed. Every move returns a [`MoveResult`] telling the caller who moved,
//! whether that move completed a winning line, and who moves next. Rendering
//! and input filtering belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Cell, GameEngine, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [Cell::TopLeft, Cell::MiddleLeft, Cell::TopCenter, Cell::Center] {
//!     engine.apply_move(cell);
//! }
//! let result = engine.apply_move(Cell::TopRight);
//! assert!(result.won());
//! assert_eq!(result.player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod claims;
mod engine;
pub mod invariants;
mod lines;
mod player;

pub use action::{Move, MoveError, MoveResult};
pub use board::Board;
pub use cell::{Cell, CellParseError};
pub use claims::{ClaimedSet, Claims};
pub use engine::{GameEngine, GameStatus};
pub use lines::{Line, WINNING_LINES, is_winning};
pub use player::Player;
