//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::config::{Config, ThemeMode};

/// Two-player tic-tac-toe on a 3x3 to 8x8 board
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial board size
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_SIZE as i64..=MAX_SIZE as i64))]
    pub size: Option<u8>,

    /// Colour scheme
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeMode>,
}

impl Cli {
    /// Load the config file and apply command-line overrides
    pub fn resolve_config(&self) -> Config {
        let mut cfg = Config::load_or_default(self.config.as_deref());
        if let Some(size) = self.size {
            cfg.board_size = size as usize;
        }
        if let Some(theme) = self.theme {
            cfg.theme = theme;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            missing.to_str().unwrap(),
            "--size",
            "6",
            "--theme",
            "dark",
        ]);
        let cfg = cli.resolve_config();
        assert_eq!(cfg.board_size, 6);
        assert_eq!(cfg.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(Cli::try_parse_from(["tictactoe", "--size", "9"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--size", "2"]).is_err());

        let min = MIN_SIZE.to_string();
        let max = MAX_SIZE.to_string();
        assert_eq!(Cli::try_parse_from(["tictactoe", "--size", &min]).unwrap().size, Some(MIN_SIZE as u8));
        assert_eq!(Cli::try_parse_from(["tictactoe", "--size", &max]).unwrap().size, Some(MAX_SIZE as u8));
    }
}
