use chess::{BitBoard, Board, Color, Piece};
use utils::{Position, Termination};

use crate::def::Evaluator;
use crate::pst::{get_pst, sum_pst};
use crate::scores::{CHECKMATE_SCORE, DRAW_SCORE, MAX_STATIC_SCORE};
use crate::values::piece_value;

/// Material count plus piece-square placement.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn name(&self) -> String {
        "Material".to_string()
    }

    fn evaluate(&self, position: &Position) -> i32 {
        evaluate(position)
    }

    fn evaluate_ongoing(&self, position: &Position) -> i32 {
        static_score(position)
    }
}

// Return final evaluation (positive = good for White, negative = good for Black)
pub fn evaluate(position: &Position) -> i32 {
    match position.termination() {
        Some(termination) => terminal_score(termination, position.side_to_move()),
        None => static_score(position),
    }
}

/// Score of a finished game. A checkmated side to move has lost.
pub fn terminal_score(termination: Termination, side_to_move: Color) -> i32 {
    match (termination, side_to_move) {
        (Termination::Checkmate, Color::White) => -CHECKMATE_SCORE,
        (Termination::Checkmate, Color::Black) => CHECKMATE_SCORE,
        _ => DRAW_SCORE,
    }
}

/// Material and placement, clamped below mate. Terminal states are ignored.
pub fn static_score(position: &Position) -> i32 {
    let board = position.board();
    let white_mask = board.color_combined(Color::White);
    let black_mask = board.color_combined(Color::Black);

    let mut cp = 0;
    cp += evaluate_material(board, white_mask);
    cp -= evaluate_material(board, black_mask);

    cp += evaluate_placement(board, Color::White, white_mask);
    cp -= evaluate_placement(board, Color::Black, black_mask);

    cp.clamp(-MAX_STATIC_SCORE, MAX_STATIC_SCORE)
}

#[inline(always)]
fn evaluate_material(board: &Board, color_mask: &BitBoard) -> i32 {
    let mut cp = 0;
    for piece in [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
    ] {
        let count = (board.pieces(piece) & color_mask).popcnt() as i32;
        cp += count * piece_value(piece);
    }
    cp
}

#[inline(always)]
fn evaluate_placement(board: &Board, color: Color, color_mask: &BitBoard) -> i32 {
    let pst = get_pst(color);

    sum_pst(board.pieces(Piece::Pawn) & color_mask, pst.pawn)
        + sum_pst(board.pieces(Piece::Knight) & color_mask, pst.knight)
        + sum_pst(board.pieces(Piece::Bishop) & color_mask, pst.bishop)
        + sum_pst(board.pieces(Piece::King) & color_mask, pst.king)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::ChessMove;
    use std::str::FromStr;

    fn from_fen(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(evaluate(&Position::default()), 0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let position = from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        assert_eq!(evaluate(&position), evaluate(&position));
    }

    #[test]
    fn test_knight_development_is_rewarded() {
        let mut position = Position::default();
        position.push(ChessMove::from_str("g1f3").unwrap());
        // g1 is worth -40, f3 is worth +10
        assert_eq!(evaluate(&position), 50);

        position.push(ChessMove::from_str("g8f6").unwrap());
        assert_eq!(evaluate(&position), 0);
    }

    #[test]
    fn test_pawn_advance_curve() {
        // White pawn on e7 (+60), black pawn on e6 which is its third rank (-5)
        let position = from_fen("k7/4P3/4p3/8/8/8/8/K7 w - - 0 1");
        // Kings: a1 = 20 for White, a8 = 20 for Black
        assert_eq!(evaluate(&position), 60 - 5);
    }

    #[test]
    fn test_material_balance() {
        // White is a queen up, kings on mirrored squares
        let position = from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert_eq!(evaluate(&position), 900);

        let position = from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluate(&position), -900);
    }

    #[test]
    fn test_checkmate_scores() {
        // White to move and mated
        let mated_white =
            from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(evaluate(&mated_white), -CHECKMATE_SCORE);

        // Black to move and mated (back rank)
        let mated_black = from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1");
        assert_eq!(evaluate(&mated_black), CHECKMATE_SCORE);
    }

    #[test]
    fn test_draws_score_zero() {
        // Stalemate
        assert_eq!(evaluate(&from_fen("7k/8/6Q1/8/8/8/8/K7 b - - 0 1")), 0);
        // Lone kings
        assert_eq!(evaluate(&from_fen("k7/8/8/8/8/8/8/K7 w - - 0 1")), 0);
        // Seventy-five move rule, even a rook up
        assert_eq!(evaluate(&from_fen("k7/8/8/8/8/8/8/KR6 w - - 150 100")), 0);
    }

    #[test]
    fn test_static_score_never_reaches_mate() {
        // Black pawns on g2 and h2 shield their king from the queens
        let position = from_fen("QQQQQQQQ/QQQQQQQQ/8/8/8/8/6pp/K6k w - - 0 1");
        assert_eq!(evaluate(&position), MAX_STATIC_SCORE);
    }

    #[test]
    fn test_evaluator_trait() {
        let evaluator = MaterialEvaluator;
        assert_eq!(evaluator.name(), "Material");
        assert_eq!(evaluator.evaluate(&Position::default()), 0);
    }

    #[test]
    fn test_ongoing_score_skips_terminal_check() {
        // Lone kings are a draw, but the placement still scores the kings
        let position = from_fen("k7/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(MaterialEvaluator.evaluate(&position), DRAW_SCORE);
        assert_eq!(MaterialEvaluator.evaluate_ongoing(&position), static_score(&position));

        let position = from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert_eq!(MaterialEvaluator.evaluate_ongoing(&position), evaluate(&position));
    }

    #[test]
    fn test_terminal_score_signs() {
        assert_eq!(terminal_score(Termination::Checkmate, Color::White), -CHECKMATE_SCORE);
        assert_eq!(terminal_score(Termination::Checkmate, Color::Black), CHECKMATE_SCORE);
        assert_eq!(terminal_score(Termination::Stalemate, Color::White), DRAW_SCORE);
    }
}
