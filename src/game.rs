//! Turn and outcome state machine
//!
//! [`GameState`] is the single source of truth for a game: the board, whose
//! turn it is, how many moves were played and whether the game ended. The
//! UI only reads it and forwards clicks to [`GameState::apply_move`].
//!
//! Invalid input (a move outside a running game, on a marked cell or off the
//! board, a resize while playing) is ignored and leaves the state untouched.

use tracing::{debug, info, instrument};

use crate::board::{is_valid_size, Board, Mark, Player, Pos, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::rules::{find_line_at_pos, WinLine};

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No game running, board size may be changed
    #[default]
    Idle,
    InProgress,
    Won,
    Draw,
}

impl Phase {
    /// Won or Draw
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Won | Phase::Draw)
    }
}

/// Why a move was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    NotInProgress,
    OffBoard,
    Occupied,
}

/// Result of [`GameState::apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move placed, `next` is now to play
    Continue { next: Player },
    Won(Player),
    Draw,
    /// Move ignored, state unchanged
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Player,
    moves_played: usize,
    phase: Phase,
    winner: Option<Player>,
    winning_line: Option<WinLine>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl GameState {
    /// Idle state with an empty board. `size` is clamped into the
    /// selectable range.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size.clamp(MIN_SIZE, MAX_SIZE)),
            current_player: Player::One,
            moves_played: 0,
            phase: Phase::Idle,
            winner: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Selected board size
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Cells of the completed line while the game is won
    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winning_line.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// Clear everything back to an idle board of `size`
    fn clear(&mut self, size: usize) {
        self.board = Board::new(size);
        self.current_player = Player::One;
        self.moves_played = 0;
        self.winner = None;
        self.winning_line = None;
    }

    /// Start a new game on an empty `size`×`size` board.
    ///
    /// Ignored while a game is already running or when `size` is outside
    /// the selectable range.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn start_game(&mut self, size: usize) {
        if self.phase == Phase::InProgress {
            debug!("start ignored, game already in progress");
            return;
        }
        if !is_valid_size(size) {
            debug!("start ignored, size out of range");
            return;
        }

        self.clear(size);
        self.phase = Phase::InProgress;
        info!(size, "game started");
    }

    /// Abandon the running game and return to idle
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn stop_game(&mut self) {
        if self.phase != Phase::InProgress {
            debug!("stop ignored, no game in progress");
            return;
        }

        self.clear(self.size());
        self.phase = Phase::Idle;
        info!("game stopped");
    }

    /// Place the current player's mark at (`row`, `col`).
    ///
    /// Accepted only while in progress and on an empty cell. After placing,
    /// the lines through the cell are checked for a win, then the board for
    /// a draw; otherwise the turn passes to the other player.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.phase != Phase::InProgress {
            debug!(phase = ?self.phase, "move ignored, no game in progress");
            return MoveOutcome::Rejected(Rejection::NotInProgress);
        }
        let size = self.size();
        if row >= size || col >= size {
            debug!("move ignored, off the board");
            return MoveOutcome::Rejected(Rejection::OffBoard);
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) {
            debug!("move ignored, cell occupied");
            return MoveOutcome::Rejected(Rejection::Occupied);
        }

        let player = self.current_player;
        let mark: Mark = player.mark();
        self.board.place(pos, mark);
        self.moves_played += 1;

        if let Some(line) = find_line_at_pos(&self.board, pos, mark) {
            info!(winner = player.number(), line = ?line.kind, "game won");
            self.phase = Phase::Won;
            self.winner = Some(player);
            self.winning_line = Some(line);
            return MoveOutcome::Won(player);
        }

        if self.moves_played == size * size {
            info!(moves = self.moves_played, "game drawn");
            self.phase = Phase::Draw;
            return MoveOutcome::Draw;
        }

        self.current_player = player.opponent();
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    /// Dismiss a Won or Draw outcome, back to an idle board
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset_outcome(&mut self) {
        if !self.phase.is_finished() {
            debug!("reset ignored, no outcome pending");
            return;
        }

        self.clear(self.size());
        self.phase = Phase::Idle;
    }

    /// Select a new board size. Ignored while a game is running or when
    /// `size` is out of range; otherwise the board is cleared and any
    /// pending outcome dismissed.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn set_size(&mut self, size: usize) {
        if self.phase == Phase::InProgress {
            debug!("resize ignored, game in progress");
            return;
        }
        if !is_valid_size(size) {
            debug!("resize ignored, size out of range");
            return;
        }

        self.clear(size);
        self.phase = Phase::Idle;
    }

    /// Grow the board by one, up to the maximum
    pub fn increase_size(&mut self) {
        self.set_size(self.size() + 1);
    }

    /// Shrink the board by one, down to the minimum
    pub fn decrease_size(&mut self) {
        self.set_size(self.size().saturating_sub(1));
    }
}
