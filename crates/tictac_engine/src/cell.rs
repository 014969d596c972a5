//! Board cells (0-8, row-major).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Cells are numbered 0-8 in row-major order. Holding a `Cell` means the
/// index is already known to be in range, so engine operations taking a
/// `Cell` never need a bounds check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 0)
    TopLeft,
    /// Top-center (cell 1)
    TopCenter,
    /// Top-right (cell 2)
    TopRight,
    /// Middle-left (cell 3)
    MiddleLeft,
    /// Center (cell 4)
    Center,
    /// Middle-right (cell 5)
    MiddleRight,
    /// Bottom-left (cell 6)
    BottomLeft,
    /// Bottom-center (cell 7)
    BottomCenter,
    /// Bottom-right (cell 8)
    BottomRight,
}

impl Cell {
    /// All 9 cells in index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index, `None` when out of range.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "top-left",
            Cell::TopCenter => "top-center",
            Cell::TopRight => "top-right",
            Cell::MiddleLeft => "middle-left",
            Cell::Center => "center",
            Cell::MiddleRight => "middle-right",
            Cell::BottomLeft => "bottom-left",
            Cell::BottomCenter => "bottom-center",
            Cell::BottomRight => "bottom-right",
        }
    }

    /// Single-bit mask used by [`ClaimedSet`](crate::ClaimedSet).
    pub(crate) const fn bit(self) -> u16 {
        1 << self as u16
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input that names no cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CellParseError {
    /// A number outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Neither a number nor a known label.
    #[display("Unknown cell {:?}", _0)]
    Unknown(String),
}

impl std::error::Error for CellParseError {}

impl FromStr for Cell {
    type Err = CellParseError;

    /// Parses a board index ("4") or a label ("center", "Top Left", "bottom_right").
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or(CellParseError::OutOfRange(index));
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|cell| cell.label() == normalized)
            .ok_or_else(|| CellParseError::Unknown(trimmed.to_string()))
    }
}
