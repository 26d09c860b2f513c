use std::io;
use std::time::Duration;

use chess::ChessMove;
use thiserror::Error;
use search::ConfigError;
use uci::ClientError;
use utils::Position;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine unavailable: {0}")]
    Unavailable(#[from] ClientError),
    #[error("invalid search settings: {0}")]
    Config(#[from] ConfigError),
    #[error("illegal move {0}")]
    IllegalMove(String),
    #[error("no legal moves in a position that is not over")]
    NoLegalMoves,
    #[error("input closed")]
    InputClosed,
    #[error("game abandoned by the player")]
    Quit,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl EngineError {
    /// Failures that end the current game while the program carries on.
    /// Anything else breaks an invariant and is fatal.
    pub fn ends_game_only(&self) -> bool {
        !matches!(self, EngineError::NoLegalMoves | EngineError::Config(_))
    }
}

/// Something that picks a move for the side to move.
///
/// The position may be used as scratch space but must be handed back as it
/// was received.
pub trait Engine {
    fn name(&self) -> String;

    fn select_move(
        &mut self,
        position: &mut Position,
        think_time: Duration,
    ) -> Result<ChessMove, EngineError>;
}
