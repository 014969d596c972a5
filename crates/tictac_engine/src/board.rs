//! Cell-by-cell view of the claims, for drawing.

use crate::{Cell, Claims, Player};
use tracing::instrument;

/// Snapshot of who holds each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    marks: [Option<Player>; 9],
}

impl Board {
    /// Projects claims onto the 9 cells.
    #[instrument(skip(claims))]
    pub fn from_claims(claims: &Claims) -> Self {
        let mut marks = [None; 9];
        for cell in Cell::ALL {
            marks[cell.index()] = claims.owner_of(cell);
        }
        Self { marks }
    }

    /// The player holding `cell`, if any.
    pub fn mark(&self, cell: Cell) -> Option<Player> {
        self.marks[cell.index()]
    }

    /// True when every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.marks.iter().all(Option::is_some)
    }

    /// Formats the board as text.
    ///
    /// Empty cells show their index when `show_labels` is set, a space
    /// otherwise.
    pub fn display(&self, show_labels: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.marks[index] {
                    Some(player) => player.token(),
                    None if show_labels => char::from_digit(index as u32, 10).unwrap_or('?'),
                    None => ' ',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_claims(&Claims::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_with_labels() {
        let board = Board::default();
        assert_eq!(board.display(true), "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8");
        assert!(!board.is_full());
    }

    #[test]
    fn test_marks_follow_claims() {
        let mut claims = Claims::new();
        claims.claim(Player::X, Cell::TopLeft);
        claims.claim(Player::O, Cell::Center);
        let board = Board::from_claims(&claims);

        assert_eq!(board.mark(Cell::TopLeft), Some(Player::X));
        assert_eq!(board.mark(Cell::Center), Some(Player::O));
        assert_eq!(board.mark(Cell::BottomRight), None);
        assert_eq!(board.display(false), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }
}
