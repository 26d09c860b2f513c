use std::time::Duration;

use chess::{ChessMove, Color};
use evaluation::Evaluator;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use utils::Position;

use super::{Engine, EngineError};

/// Moves scoring within this many centipawns of the best are ties.
pub const TIE_BAND: i32 = 10;

/// One-ply greedy player: scores every reply with the evaluator and picks
/// at random among the moves tied for best.
pub struct StaticEngine {
    evaluator: Box<dyn Evaluator>,
    rng: StdRng,
}

impl StaticEngine {
    pub fn new(evaluator: Box<dyn Evaluator>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { evaluator, rng }
    }

    /// Moves tied for best with the score (White positive) each leads to.
    pub fn candidates(&self, position: &mut Position) -> Vec<(ChessMove, i32)> {
        let sign = match position.side_to_move() {
            Color::White => 1,
            Color::Black => -1,
        };

        let scored: Vec<(ChessMove, i32)> = position
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, self.evaluator.evaluate(&position.apply(mv))))
            .collect();

        let Some(best) = scored.iter().map(|&(_, score)| score * sign).max() else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|&(_, score)| best - score * sign <= TIE_BAND)
            .collect()
    }
}

impl Engine for StaticEngine {
    fn name(&self) -> String {
        format!("Static ({})", self.evaluator.name())
    }

    fn select_move(
        &mut self,
        position: &mut Position,
        _think_time: Duration,
    ) -> Result<ChessMove, EngineError> {
        let candidates = self.candidates(position);
        let &(mv, score) = candidates
            .choose(&mut self.rng)
            .ok_or(EngineError::NoLegalMoves)?;

        log::info!(
            "Selected move leads to evaluation: {:+.2} pawns",
            score as f64 / 100.0
        );
        Ok(mv)
    }
}
