mod config;
pub mod engine;
mod move_ordering;
mod time_control;

pub use config::{ConfigError, SearchConfig};
pub use engine::{Aborted, SearchEngine, SearchOutcome, SearchResult, SearchStats, Searcher};
pub use move_ordering::{ordered_moves, MoveList};
pub use time_control::TimeBudget;

/// Deepest iteration the engine will start, whatever the time budget.
pub const MAX_DEPTH: u8 = 64;
