use evaluation::{
    scores::{INFINITY, NEG_INFINITY},
    terminal_score,
};
use utils::Position;

use crate::move_ordering::ordered_moves;

use super::{Aborted, SearchResult, Searcher};

impl Searcher<'_> {
    /// Fixed-depth minimax with alpha-beta pruning. White maximizes, Black
    /// minimizes, and scores are always from White's point of view.
    ///
    /// Any child running past the hard deadline aborts the whole call; the
    /// position is restored either way.
    pub fn alpha_beta(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<SearchResult, Aborted> {
        self.stats.nodes += 1;
        self.check_deadline()?;

        let moves = ordered_moves(position);
        if let Some(termination) = position.termination_with(!moves.is_empty()) {
            let score = terminal_score(termination, position.side_to_move());
            return Ok(SearchResult::new(score, None));
        }

        if depth == 0 {
            let score = self.quiesce(position, moves, alpha, beta, 0)?;
            return Ok(SearchResult::new(score, None));
        }

        // Non-terminal positions always have a legal move
        let Some(&first) = moves.first() else {
            return Ok(SearchResult::new(self.evaluator.evaluate(position), None));
        };
        let mut best_move = first;

        if maximizing {
            let mut best_score = NEG_INFINITY;

            for mv in moves {
                let score = {
                    let mut child = position.apply(mv);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, false)?
                        .score
                };

                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }

                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }

            Ok(SearchResult::new(best_score, Some(best_move)))
        } else {
            let mut best_score = INFINITY;

            for mv in moves {
                let score = {
                    let mut child = position.apply(mv);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, true)?
                        .score
                };

                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }

                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }

            Ok(SearchResult::new(best_score, Some(best_move)))
        }
    }
}
