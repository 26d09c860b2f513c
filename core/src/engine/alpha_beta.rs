use std::time::Duration;

use chess::ChessMove;
use evaluation::Evaluator;
use search::{ConfigError, SearchConfig, SearchEngine};
use utils::Position;

use super::{Engine, EngineError};

/// Iterative deepening alpha-beta under the think time.
pub struct AlphaBetaEngine {
    engine: SearchEngine,
}

impl AlphaBetaEngine {
    pub fn new(evaluator: Box<dyn Evaluator>, config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: SearchEngine::new(evaluator, config)?,
        })
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> String {
        self.engine.name()
    }

    fn select_move(
        &mut self,
        position: &mut Position,
        think_time: Duration,
    ) -> Result<ChessMove, EngineError> {
        let outcome = self.engine.search(position, think_time);

        if let Some(score) = outcome.score {
            log::info!("Final evaluation: {:+.2} pawns", score as f64 / 100.0);
        }
        log::debug!(
            "Searched {} nodes to depth {} in {}ms",
            outcome.nodes,
            outcome.depth,
            outcome.elapsed.as_millis()
        );

        outcome.best_move.ok_or(EngineError::NoLegalMoves)
    }
}
