//! Win condition checking
//!
//! A line wins when every cell along it carries the mark that was just
//! placed. The checked lines are the ones passing through the last move:
//! - main diagonal, if `row == col`
//! - anti-diagonal, if `row + col == size - 1`
//! - the full column
//! - the full row
//!
//! Each line is rescanned from scratch, so a check costs O(N).

use crate::board::{Board, Mark, Pos};

/// Which kind of line completed the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Diagonal,
    AntiDiagonal,
    Column,
    Row,
}

/// A completed line, kept for highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    pub kind: LineKind,
    pub cells: Vec<Pos>,
}

impl WinLine {
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Cells of one line through `pos`, in board order
fn line_cells(kind: LineKind, pos: Pos, size: usize) -> Vec<Pos> {
    let n = size as u8;
    match kind {
        LineKind::Diagonal => (0..n).map(|k| Pos::new(k, k)).collect(),
        LineKind::AntiDiagonal => (0..n).map(|k| Pos::new(k, n - 1 - k)).collect(),
        LineKind::Column => (0..n).map(|k| Pos::new(k, pos.col)).collect(),
        LineKind::Row => (0..n).map(|k| Pos::new(pos.row, k)).collect(),
    }
}

/// Lines that pass through `pos`, in check order
fn lines_through(pos: Pos, size: usize) -> impl Iterator<Item = LineKind> {
    let on_diagonal = pos.row == pos.col;
    let on_anti = pos.row as usize + pos.col as usize == size - 1;

    [
        on_diagonal.then_some(LineKind::Diagonal),
        on_anti.then_some(LineKind::AntiDiagonal),
        Some(LineKind::Column),
        Some(LineKind::Row),
    ]
    .into_iter()
    .flatten()
}

/// Find a completed line of `mark` through `pos`.
///
/// Returns the first matching line, or `None` when no line through `pos`
/// is complete. An `Empty` mark or an off-board position never wins.
pub fn find_line_at_pos(board: &Board, pos: Pos, mark: Mark) -> Option<WinLine> {
    let size = board.size();
    if mark == Mark::Empty || !pos.is_within(size) {
        return None;
    }

    lines_through(pos, size).find_map(|kind| {
        let cells = line_cells(kind, pos, size);
        cells
            .iter()
            .all(|&p| board.get(p) == mark)
            .then_some(WinLine { kind, cells })
    })
}
