//! Tile ranks stored as small ordinals
//!
//! A tile is either empty or one of the power-of-two ranks 2 through 2048.
//! The rank is kept as an ordinal (0 = empty, 1 = 2, ..., 11 = 2048) so that
//! comparison, emptiness and promotion are single integer operations.

use std::fmt;

use crate::io::error::GridError;

/// Highest rank a tile can reach (2048)
pub const MAX_RANK: u8 = 11;

/// A single grid cell value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// The empty cell
    pub const EMPTY: Self = Self(0);
    /// Rank 1, value 2
    pub const TWO: Self = Self(1);
    /// Rank 2, value 4
    pub const FOUR: Self = Self(2);
    /// Rank 11, value 2048
    pub const MAX: Self = Self(MAX_RANK);

    /// Build a tile from its ordinal, `None` above [`MAX_RANK`]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        if rank <= MAX_RANK {
            Some(Self(rank))
        } else {
            None
        }
    }

    /// Build a tile from its face value
    ///
    /// Zero maps to the empty tile. Any other value must be a power of two
    /// between 2 and 2048.
    pub const fn from_value(value: u32) -> Option<Self> {
        if value == 0 {
            return Some(Self::EMPTY);
        }
        if !value.is_power_of_two() || value == 1 {
            return None;
        }
        Self::from_rank(value.trailing_zeros() as u8)
    }

    /// Ordinal rank (0 for empty)
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Face value (0 for empty)
    pub const fn value(self) -> u32 {
        if self.0 == 0 { 0 } else { 1 << self.0 }
    }

    /// Whether the cell holds no tile
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The next rank up, `None` for the empty tile and for the maximum rank
    pub const fn promoted(self) -> Option<Self> {
        if self.0 == 0 || self.0 >= MAX_RANK {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    /// Result of merging `other` into `self`, if the pair can merge
    ///
    /// Both tiles must be non-empty and of equal rank. Two maximum-rank tiles
    /// are treated as unequal and never merge.
    pub const fn merge(self, other: Self) -> Option<Self> {
        if self.0 == other.0 {
            self.promoted()
        } else {
            None
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.pad(".")
        } else {
            f.pad(&self.value().to_string())
        }
    }
}

impl TryFrom<u32> for Tile {
    type Error = GridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(GridError::InvalidTileValue { value })
    }
}
