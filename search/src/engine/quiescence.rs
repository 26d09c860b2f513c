use chess::Color;
use evaluation::terminal_score;
use utils::{is_capture, Position};

use crate::move_ordering::{ordered_moves, MoveList};

use super::{Aborted, Searcher};

impl Searcher<'_> {
    /// Captures-only search past the horizon so a position is never scored in
    /// the middle of an exchange. The side to move may always stand pat.
    pub fn quiescence(
        &mut self,
        position: &mut Position,
        alpha: i32,
        beta: i32,
        depth: u8,
    ) -> Result<i32, Aborted> {
        self.stats.nodes += 1;
        self.check_deadline()?;

        let moves = ordered_moves(position);
        self.quiesce(position, moves, alpha, beta, depth)
    }

    /// Quiescence over moves already generated for this node by
    /// [`crate::ordered_moves`].
    pub(super) fn quiesce(
        &mut self,
        position: &mut Position,
        moves: MoveList,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> Result<i32, Aborted> {
        let stand_pat = match position.termination_with(!moves.is_empty()) {
            Some(termination) => terminal_score(termination, position.side_to_move()),
            None => self.evaluator.evaluate_ongoing(position),
        };
        if depth > self.config.quiescence_depth {
            return Ok(stand_pat);
        }

        let white = position.side_to_move() == Color::White;
        if white {
            alpha = alpha.max(stand_pat);
        } else {
            beta = beta.min(stand_pat);
        }

        if alpha >= beta {
            return Ok(if white { alpha } else { beta });
        }

        let board = *position.board();
        for mv in moves.into_iter().take_while(|&mv| is_capture(&board, mv)) {
            let score = {
                let mut child = position.apply(mv);
                self.quiescence(&mut child, alpha, beta, depth + 1)?
            };

            if white {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }

            if alpha >= beta {
                break;
            }
        }

        Ok(if white { alpha } else { beta })
    }
}
