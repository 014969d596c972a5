//! Disjoint claims invariant: no cell belongs to both players.

use super::Invariant;
use crate::GameEngine;

/// Invariant: a cell is claimed by at most one player.
pub struct DisjointClaimsInvariant;

impl Invariant<GameEngine> for DisjointClaimsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.claims().are_disjoint()
    }

    fn description() -> &'static str {
        "No cell is claimed by both players"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_full_board_holds() {
        let engine = GameEngine::replay(&[0, 4, 2, 1, 7, 3, 5, 8, 6]).expect("valid moves");
        assert!(DisjointClaimsInvariant::holds(&engine));
    }

    #[test]
    fn test_shared_cell_violates() {
        let mut engine = GameEngine::replay(&[0]).expect("valid moves");
        engine.claims.claim(Player::O, Cell::TopLeft);
        assert!(!DisjointClaimsInvariant::holds(&engine));
    }
}
