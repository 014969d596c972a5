//! Winning lines and win detection.

use crate::{Cell, ClaimedSet};
use tracing::instrument;

/// Three cells that win the game when one player claims all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Cell; 3]);

impl Line {
    const fn new(a: Cell, b: Cell, c: Cell) -> Self {
        Self([a, b, c])
    }

    /// The three cells of the line.
    pub fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// True when `claimed` contains all three cells, in any order.
    pub fn is_completed_by(&self, claimed: &ClaimedSet) -> bool {
        claimed.is_superset(&ClaimedSet::from_cells(self.0))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a.index(), b.index(), c.index())
    }
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    Line::new(Cell::TopLeft, Cell::TopCenter, Cell::TopRight),
    Line::new(Cell::MiddleLeft, Cell::Center, Cell::MiddleRight),
    Line::new(Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight),
    // Columns
    Line::new(Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft),
    Line::new(Cell::TopCenter, Cell::Center, Cell::BottomCenter),
    Line::new(Cell::TopRight, Cell::MiddleRight, Cell::BottomRight),
    // Diagonals
    Line::new(Cell::TopLeft, Cell::Center, Cell::BottomRight),
    Line::new(Cell::TopRight, Cell::Center, Cell::BottomLeft),
];

/// Checks whether a claimed set contains at least one winning line.
///
/// Pure: the answer depends only on `claimed`.
#[instrument]
pub fn is_winning(claimed: &ClaimedSet) -> bool {
    WINNING_LINES.iter().any(|line| line.is_completed_by(claimed))
}
