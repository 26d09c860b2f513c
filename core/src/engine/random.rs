use std::time::Duration;

use chess::ChessMove;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use utils::Position;

use super::{Engine, EngineError};

/// Plays any legal move, uniformly at random.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn select_move(
        &mut self,
        position: &mut Position,
        _think_time: Duration,
    ) -> Result<ChessMove, EngineError> {
        position
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves)
    }
}
