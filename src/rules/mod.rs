//! Game rules for N×N tic-tac-toe
//!
//! A player wins by filling a whole row, column, or one of the two long
//! diagonals. Only lines through the last move are examined.

pub mod win;

// Re-exports for convenient access
pub use win::{find_line_at_pos, LineKind, WinLine};
