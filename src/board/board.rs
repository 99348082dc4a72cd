//! Square grid of marks

use super::{Mark, Pos, DEFAULT_SIZE};

/// N×N game board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board. Callers validate `size` with
    /// [`is_valid_size`](super::is_valid_size) first.
    pub fn new(size: usize) -> Self {
        debug_assert!(super::is_valid_size(size));
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get mark at position (Empty when off the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if !pos.is_within(self.size) {
            return Mark::Empty;
        }
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position is on the board and unmarked
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_within(self.size) && self.cells[pos.to_index(self.size)] == Mark::Empty
    }

    /// Place a mark without any rule checks
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        if pos.is_within(self.size) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = mark;
        }
    }

    /// Number of marked cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| **m != Mark::Empty).count()
    }

    /// Iterate over every position with its mark, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, mark)| (Pos::from_index(idx, self.size), *mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
