use std::fmt;

use chess::Color;

/// Reason a game ended. Claimable draws (threefold, fifty moves) are not
/// terminal; only the automatic ones are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl Termination {
    /// PGN style result, given the side to move in the terminal position.
    pub fn result(&self, side_to_move: Color) -> &'static str {
        match (self, side_to_move) {
            (Termination::Checkmate, Color::White) => "0-1",
            (Termination::Checkmate, Color::Black) => "1-0",
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "seventy-five move rule",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(reason)
    }
}
