//! Command-line interface for oxo.

use clap::{Parser, Subcommand, ValueEnum};
use oxo::Mark;
use std::path::PathBuf;

/// Oxo - tic-tac-toe with an unbeatable computer opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe matches with a persistent leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Display name to record results under
        #[arg(long, default_value = "You")]
        name: String,

        /// Mark to play as; the computer takes the other one
        #[arg(long, value_enum, default_value = "x")]
        mark: MarkArg,

        /// Path to the leaderboard file (created on the first result)
        #[arg(long, default_value = "leaderboard.json")]
        leaderboard: PathBuf,
    },

    /// Play a two-player match at one terminal
    Duel {
        /// Display name for the X player
        player_x: String,

        /// Display name for the O player
        player_o: String,

        /// Path to the leaderboard file (created on the first result)
        #[arg(long, default_value = "leaderboard.json")]
        leaderboard: PathBuf,
    },

    /// Print the stored leaderboard
    Leaderboard {
        /// Path to the leaderboard file
        #[arg(default_value = "leaderboard.json")]
        file: PathBuf,
    },
}

/// Mark selection for the human seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Play as X (you open)
    X,
    /// Play as O (the computer opens)
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
