//! Board representation for tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Smallest selectable board (3x3)
pub const MIN_SIZE: usize = 3;
/// Largest selectable board (8x8)
pub const MAX_SIZE: usize = 8;
/// Size used when nothing else is configured
pub const DEFAULT_SIZE: usize = MIN_SIZE;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Glyph shown on the board for this mark
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "❌",
            Mark::O => "⭕",
            Mark::Empty => " ",
        }
    }
}

/// One of the two local players. Player one always opens with X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark this player places
    #[inline]
    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::X,
            Player::Two => Mark::O,
        }
    }

    /// 1 or 2, as shown to the players
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Whether the position lies on a board of the given size
    #[inline]
    pub fn is_within(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }
}

/// Whether `size` is a selectable board size
#[inline]
pub fn is_valid_size(size: usize) -> bool {
    (MIN_SIZE..=MAX_SIZE).contains(&size)
}
