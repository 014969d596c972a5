//! Per-player claimed cells.

use crate::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Unordered set of cells claimed by one player.
///
/// Stored as a 9-bit mask: bit `i` is set when cell `i` is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClaimedSet {
    bits: u16,
}

impl ClaimedSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Builds a set from a list of cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut set = Self::new();
        for cell in cells {
            set.insert(cell);
        }
        set
    }

    /// Adds a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let fresh = !self.contains(cell);
        self.bits |= cell.bit();
        fresh
    }

    /// Checks membership.
    pub fn contains(&self, cell: Cell) -> bool {
        self.bits & cell.bit() != 0
    }

    /// True when every cell of `other` is also in `self`.
    pub fn is_superset(&self, other: &ClaimedSet) -> bool {
        self.bits & other.bits == other.bits
    }

    /// True when the two sets share no cell.
    pub fn is_disjoint(&self, other: &ClaimedSet) -> bool {
        self.bits & other.bits == 0
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no cell is claimed.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Cells in the set, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(|cell| self.contains(*cell))
    }

    pub(crate) fn union(&self, other: &ClaimedSet) -> ClaimedSet {
        ClaimedSet {
            bits: self.bits | other.bits,
        }
    }
}

impl FromIterator<Cell> for ClaimedSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

/// Claimed cells for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Claims {
    x: ClaimedSet,
    o: ClaimedSet,
}

impl Claims {
    /// Creates empty claims for both players.
    pub const fn new() -> Self {
        Self {
            x: ClaimedSet::new(),
            o: ClaimedSet::new(),
        }
    }

    /// Cells claimed by `player`.
    pub fn of(&self, player: Player) -> &ClaimedSet {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Records `cell` for `player`. Returns `false` for a repeat claim.
    pub(crate) fn claim(&mut self, player: Player, cell: Cell) -> bool {
        match player {
            Player::X => self.x.insert(cell),
            Player::O => self.o.insert(cell),
        }
    }

    /// The player holding `cell`, if any.
    pub fn owner_of(&self, cell: Cell) -> Option<Player> {
        if self.x.contains(cell) {
            Some(Player::X)
        } else if self.o.contains(cell) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Cells claimed by neither player, in index order.
    pub fn unclaimed(&self) -> Vec<Cell> {
        let taken = self.x.union(&self.o);
        Cell::ALL
            .into_iter()
            .filter(|cell| !taken.contains(*cell))
            .collect()
    }

    /// True when no cell is claimed by both players.
    pub fn are_disjoint(&self) -> bool {
        self.x.is_disjoint(&self.o)
    }
}
