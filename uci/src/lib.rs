mod client;
mod decoder;
mod encoder;
mod notation;

pub mod commands;

pub use client::{ClientError, EngineProcess};
pub use commands::{UciInput, UciOutput};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use notation::{format_move, parse_move, NotationError};

/// Null move in UCI format, sent by engines as the bestmove when the
/// position has no legal moves.
pub const NULL_MOVE: &str = "0000";
