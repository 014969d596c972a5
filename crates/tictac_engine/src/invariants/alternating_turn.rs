//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move is X
/// exactly when an even number of moves has been made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        alternates && engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
