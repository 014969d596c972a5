//! Tests for move application and win detection.

use tictac_engine::{Cell, GameEngine, GameStatus, MoveError, Player, WINNING_LINES};

fn cell(index: usize) -> Cell {
    Cell::from_index(index).expect("index in range")
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    let moves = [0, 3, 1, 4];
    for index in moves {
        assert!(!engine.apply_move(cell(index)).won());
    }

    let result = engine.apply_move(Cell::TopRight);
    assert!(result.won());
    assert_eq!(result.player(), Player::X);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    for index in [0, 1, 4, 2] {
        assert!(!engine.apply_move(cell(index)).won());
    }

    let result = engine.apply_move(Cell::BottomRight);
    assert!(result.won());
    assert_eq!(result.player(), Player::X);
}

#[test]
fn test_every_line_wins_on_completing_move() {
    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        let mut spare = Cell::ALL
            .into_iter()
            .filter(|cell| !line.cells().contains(cell));
        let o1 = spare.next().expect("six spare cells");
        let o2 = spare.next().expect("six spare cells");

        let mut engine = GameEngine::new();
        for cell in [a, o1, b, o2] {
            assert!(!engine.apply_move(cell).won(), "{line}");
        }
        let result = engine.apply_move(c);
        assert!(result.won(), "{line}");
        assert_eq!(result.player(), Player::X, "{line}");
        assert_eq!(engine.status(), GameStatus::Won(Player::X), "{line}");
    }
}

#[test]
fn test_full_board_without_a_line_never_wins() {
    // X: 0 2 3 7 8, O: 4 1 5 6
    let mut engine = GameEngine::new();
    for index in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        let result = engine.apply_move(cell(index));
        assert!(!result.won(), "move {index}");
    }

    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(engine.unclaimed().is_empty());
    assert!(engine.board().is_full());
}

#[test]
fn test_turn_passes_after_winning_move() {
    let mut engine = GameEngine::replay(&[0, 3, 1, 4]).expect("valid moves");
    let result = engine.apply_move(Cell::TopRight);

    assert!(result.won());
    assert_eq!(result.next_player(), Player::O);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_moves_accepted_after_win() {
    let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2]).expect("valid moves");
    assert_eq!(engine.status(), GameStatus::Won(Player::X));

    let result = engine.try_apply_move(8).expect("board is not locked");
    assert_eq!(result.player(), Player::O);
    assert!(!result.won());
    assert_eq!(engine.history().len(), 6);
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_winner_keeps_winning_on_later_moves() {
    let mut engine = GameEngine::replay(&[0, 3, 1, 4, 2, 8]).expect("valid moves");
    // X's line is still complete, so X's next move also reports a win.
    assert!(engine.apply_move(Cell::BottomLeft).won());
}

#[test]
fn test_double_line_reports_single_win() {
    // X completes the top row and the left column with the corner.
    let mut engine = GameEngine::replay(&[1, 4, 2, 5, 3, 8, 6]).expect("valid moves");
    assert_eq!(engine.status(), GameStatus::InProgress);
    engine.apply_move(Cell::BottomCenter);

    let result = engine.apply_move(Cell::TopLeft);
    assert!(result.won());
    assert_eq!(engine.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_has_won_is_pure() {
    let engine = GameEngine::replay(&[0, 3, 4, 5, 8]).expect("valid moves");
    let first = engine.has_won(Player::X);
    let second = engine.has_won(Player::X);

    assert!(first);
    assert_eq!(first, second);
    assert!(!engine.has_won(Player::O));
    assert!(!engine.has_won(Player::O));
}

#[test]
fn test_replay_stops_at_first_error() {
    assert_eq!(
        GameEngine::replay(&[0, 0]),
        Err(MoveError::CellClaimed {
            cell: Cell::TopLeft,
            by: Player::X
        })
    );
    assert_eq!(GameEngine::replay(&[4, 12]), Err(MoveError::OutOfRange(12)));
}

#[test]
fn test_move_error_messages() {
    assert_eq!(
        MoveError::OutOfRange(9).to_string(),
        "Cell index 9 is out of range (must be 0-8)"
    );
    assert_eq!(
        MoveError::CellClaimed {
            cell: Cell::Center,
            by: Player::O
        }
        .to_string(),
        "Cell center is already claimed by O"
    );
}

#[test]
fn test_move_result_serializes() {
    let mut engine = GameEngine::new();
    let result = engine.apply_move(Cell::Center);
    let json = serde_json::to_value(result).expect("serializable");

    assert_eq!(json["player"], "X");
    assert_eq!(json["cell"], "Center");
    assert_eq!(json["won"], false);
    assert_eq!(json["next_player"], "O");
}

#[test]
fn test_repeat_own_claim_is_idempotent() {
    let mut engine = GameEngine::new();
    engine.apply_move(Cell::Center);
    engine.apply_move(Cell::TopLeft);

    let result = engine.apply_move(Cell::Center);
    assert_eq!(result.player(), Player::X);
    assert!(!result.won());
    assert_eq!(engine.claimed_by(Player::X).len(), 1);
    assert_eq!(engine.claimed_by(Player::O).len(), 1);
    assert_eq!(engine.history().len(), 3);
    assert_eq!(engine.current_player(), Player::O);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "Engine invariants violated")]
fn test_claiming_opponent_cell_panics_in_debug() {
    let mut engine = GameEngine::new();
    engine.apply_move(Cell::Center);
    engine.apply_move(Cell::Center);
}
