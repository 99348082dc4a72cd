//! Two-player tic-tac-toe on an N×N board (3 ≤ N ≤ 8)
//!
//! Two local players take turns placing ❌ and ⭕. The first to fill a whole
//! row, column or long diagonal wins; a full board without a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board, marks, players and positions
//! - [`rules`]: Win detection along the lines through the last move
//! - [`game`]: Turn and outcome state machine, the single source of truth
//! - [`config`]: TOML configuration and CLI overrides ([`cli`])
//! - [`ui`]: egui/eframe front end that renders [`GameState`]
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, MoveOutcome, Phase, Player};
//!
//! let mut game = GameState::new(3);
//! game.start_game(3);
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.apply_move(row, col);
//! }
//! assert_eq!(game.apply_move(0, 2), MoveOutcome::Won(Player::One));
//! assert_eq!(game.phase(), Phase::Won);
//!
//! game.reset_outcome();
//! assert_eq!(game.phase(), Phase::Idle);
//! ```
//!
//! Illegal input (occupied cells, moves outside a running game, resizing
//! while playing) is ignored rather than reported as an error.

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Player, Pos, MAX_SIZE, MIN_SIZE};
pub use config::{Config, ThemeMode};
pub use error::ConfigError;
pub use game::{GameState, MoveOutcome, Phase, Rejection};
pub use rules::{LineKind, WinLine};
