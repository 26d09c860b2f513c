use std::time::Duration;

use chess::{ChessMove, Color};
use evaluation::{
    scores::{CHECKMATE_SCORE, INFINITY, NEG_INFINITY},
    Evaluator,
};
use uci::format_move;
use utils::Position;

use crate::{ConfigError, SearchConfig, TimeBudget};

mod quiescence;
mod search;

/// The hard deadline passed before the search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Score of a subtree from White's point of view, and the move leading to it.
/// Terminal nodes have no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<ChessMove>,
}

impl SearchResult {
    pub fn new(score: i32, best_move: Option<ChessMove>) -> Self {
        Self { score, best_move }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by alpha-beta and quiescence together
    pub nodes: u64,
}

/// State for a single search invocation. Nothing here outlives the move
/// decision it was created for.
pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    config: &'a SearchConfig,
    budget: TimeBudget,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a dyn Evaluator, config: &'a SearchConfig, budget: TimeBudget) -> Self {
        Self {
            evaluator,
            config,
            budget,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline(always)]
    fn check_deadline(&self) -> Result<(), Aborted> {
        if self.budget.hard_limit_reached() {
            Err(Aborted)
        } else {
            Ok(())
        }
    }
}

/// Outcome of an iterative deepening run.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Best move of the deepest completed iteration, or the first legal move
    /// when no iteration completed. `None` only without legal moves.
    pub best_move: Option<ChessMove>,
    /// Score of the deepest completed iteration.
    pub score: Option<i32>,
    /// Deepest completed iteration, 0 when none completed.
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Time-budgeted alpha-beta engine over a pluggable evaluator.
pub struct SearchEngine {
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
}

impl SearchEngine {
    pub fn new(evaluator: Box<dyn Evaluator>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, evaluator })
    }

    pub fn name(&self) -> String {
        format!("AlphaBeta ({})", self.evaluator.name())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Iterative deepening until `max_depth` or until the soft limit of
    /// `think_time` has passed. The position is left as it was given.
    pub fn search(&self, position: &mut Position, think_time: Duration) -> SearchOutcome {
        let budget = TimeBudget::new(think_time, &self.config);
        self.iterate(position, budget, self.config.max_depth)
    }

    /// Same as [`SearchEngine::search`] without a clock.
    pub fn search_depth(&self, position: &mut Position, depth: u8) -> SearchOutcome {
        self.iterate(position, TimeBudget::infinite(), depth)
    }

    fn iterate(&self, position: &mut Position, budget: TimeBudget, max_depth: u8) -> SearchOutcome {
        let maximizing = position.side_to_move() == Color::White;

        let mut best: Option<SearchResult> = None;
        let mut completed = 0;
        let mut nodes = 0;

        let mut depth = 1;
        while depth <= max_depth && !budget.target_reached() {
            let mut searcher = Searcher::new(self.evaluator.as_ref(), &self.config, budget);
            let result = searcher.alpha_beta(position, depth, NEG_INFINITY, INFINITY, maximizing);
            nodes += searcher.stats().nodes;

            match result {
                Ok(result) => {
                    let elapsed = budget.elapsed();
                    let nps = (searcher.stats().nodes as f64 / elapsed.as_secs_f64().max(1e-6)) as u64;
                    log::info!(
                        "depth {} score {} nodes {} nps {} time {}ms move {}",
                        depth,
                        result.score,
                        searcher.stats().nodes,
                        nps,
                        elapsed.as_millis(),
                        result
                            .best_move
                            .map_or_else(|| "none".to_string(), format_move),
                    );

                    best = Some(result);
                    completed = depth;

                    // Every shallower iteration missed it, so this is the shortest mate
                    if result.score.abs() == CHECKMATE_SCORE {
                        break;
                    }
                }
                Err(Aborted) => {
                    log::debug!(
                        "depth {} abandoned after {} nodes at {}ms",
                        depth,
                        searcher.stats().nodes,
                        budget.elapsed().as_millis()
                    );
                    break;
                }
            }

            depth += 1;
        }

        let best_move = best
            .and_then(|result| result.best_move)
            .or_else(|| position.legal_moves().first().copied());

        if completed == 0 {
            log::debug!("no iteration completed, falling back to the first legal move");
        }

        SearchOutcome {
            best_move,
            score: best.map(|result| result.score),
            depth: completed,
            nodes,
            elapsed: budget.elapsed(),
        }
    }
}
