//! Property tests over random move orders.

use proptest::prelude::*;
use tictac_engine::{Cell, GameEngine, GameStatus, Player};

fn move_order() -> impl Strategy<Value = Vec<Cell>> {
    Just(Cell::ALL.to_vec()).prop_shuffle()
}

proptest! {
    #[test]
    fn claimed_cell_belongs_to_mover_only(order in move_order()) {
        let mut engine = GameEngine::new();
        for cell in order {
            let result = engine.apply_move(cell);
            let mover = result.player();
            prop_assert!(engine.claimed_by(mover).contains(cell));
            prop_assert!(!engine.claimed_by(mover.opponent()).contains(cell));
            prop_assert!(engine.claims().are_disjoint());
        }
    }

    #[test]
    fn turns_alternate_from_x(order in move_order(), played in 0usize..=9) {
        let mut engine = GameEngine::new();
        for cell in order.into_iter().take(played) {
            engine.apply_move(cell);
        }
        let expected = if played % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(engine.current_player(), expected);
    }

    #[test]
    fn win_flag_matches_claims(order in move_order()) {
        let mut engine = GameEngine::new();
        let mut first_winner = None;
        for cell in order {
            let result = engine.apply_move(cell);
            prop_assert_eq!(result.won(), engine.has_won(result.player()));
            prop_assert_eq!(engine.has_won(result.player()), engine.has_won(result.player()));
            if result.won() && first_winner.is_none() {
                first_winner = Some(result.player());
            }
        }
        let expected = first_winner.map_or(GameStatus::InProgress, GameStatus::Won);
        prop_assert_eq!(engine.status(), expected);
    }

    #[test]
    fn replay_matches_direct_play(order in move_order()) {
        let indices: Vec<usize> = order.iter().map(|cell| cell.index()).collect();
        let mut direct = GameEngine::new();
        for cell in &order {
            direct.apply_move(*cell);
        }
        let replayed = GameEngine::replay(&indices).expect("distinct cells");
        prop_assert_eq!(replayed, direct);
    }
}
