//! History consistency invariant: history and claims agree.

use super::Invariant;
use crate::{GameEngine, Player};
use strum::IntoEnumIterator;

/// Invariant: every recorded move is reflected in the mover's claims, and
/// every claimed cell was reached through a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let recorded = engine
            .history()
            .iter()
            .all(|mv| engine.claimed_by(mv.player).contains(mv.cell));

        let explained = Player::iter().all(|player| {
            engine.claimed_by(player).iter().all(|cell| {
                engine
                    .history()
                    .iter()
                    .any(|mv| mv.player == player && mv.cell == cell)
            })
        });

        recorded && explained
    }

    fn description() -> &'static str {
        "Move history matches claimed cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_replayed_game_holds() {
        let engine = GameEngine::replay(&[8, 0, 4]).expect("valid moves");
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_claim_violates() {
        let mut engine = GameEngine::new();
        engine.claims.claim(Player::X, Cell::Center);
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_lost_claim_violates() {
        let mut engine = GameEngine::replay(&[2]).expect("valid moves");
        engine.claims = crate::Claims::new();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
