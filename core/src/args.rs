use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use search::SearchConfig;

#[derive(Parser, Debug)]
#[command(name = "Gambit")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Who plays the white pieces.
    #[arg(long, value_enum, default_value_t = Player::Human)]
    pub white: Player,

    /// Who plays the black pieces.
    #[arg(long, value_enum, default_value_t = Player::Search)]
    pub black: Player,

    /// Time each engine may spend on a move, in milliseconds.
    #[arg(short, long, default_value_t = 1000)]
    pub think_time: u64,

    /// Start from this position instead of the initial one.
    #[arg(long)]
    pub fen: Option<String>,

    /// UCI engine binary used by the external player.
    #[arg(long, default_value = "stockfish")]
    pub engine_path: PathBuf,

    /// Seed for the random and static players.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the finished game as PGN to this file.
    #[arg(long)]
    pub pgn: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Terminal log level.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Also log everything at debug level to a file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a fixed set of positions and report nodes and speed.
    Bench {
        #[arg(short, long, default_value_t = 1000)]
        think_time: u64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Random,
    Static,
    Search,
    External,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Deepest iteration the search player starts.
    #[arg(long, default_value_t = 20)]
    pub max_depth: u8,

    /// Share of the think time after which no new iteration starts.
    #[arg(long, default_value_t = 0.80)]
    pub soft_limit: f64,

    /// Share of the think time after which a running iteration is abandoned.
    #[arg(long, default_value_t = 0.95)]
    pub hard_limit: f64,

    /// Capture plies searched past the horizon.
    #[arg(long, default_value_t = 10)]
    pub quiescence_depth: u8,
}

impl SearchArgs {
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
            soft_limit: self.soft_limit,
            hard_limit: self.hard_limit,
            quiescence_depth: self.quiescence_depth,
        }
    }
}
