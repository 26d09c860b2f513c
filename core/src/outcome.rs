use std::fmt;

use chess::{Board, BoardStatus, ChessMove, MoveGen, Piece, Square, EMPTY};
use uci::format_move;
use utils::Termination;

const STANDARD_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A finished game.
#[derive(Debug)]
pub struct GameOutcome {
    pub starting_position: String,
    pub white_name: String,
    pub black_name: String,
    pub termination: Termination,
    /// "1-0", "0-1" or "1/2-1/2"
    pub result: &'static str,
    pub moves: Vec<ChessMove>,
    /// Board before each move, for SAN
    pub positions: Vec<Board>,
}

impl GameOutcome {
    pub fn to_pgn(&self) -> String {
        let mut pgn = String::with_capacity(512);

        pgn.push_str(&format!("[White \"{}\"]\n", self.white_name));
        pgn.push_str(&format!("[Black \"{}\"]\n", self.black_name));
        pgn.push_str(&format!("[Result \"{}\"]\n", self.result));
        pgn.push_str(&format!("[Termination \"{}\"]\n", self.termination));

        if self.starting_position != STANDARD_POSITION_FEN {
            pgn.push_str("[SetUp \"1\"]\n");
            pgn.push_str(&format!("[FEN \"{}\"]\n", self.starting_position));
        }
        pgn.push('\n');

        let fields: Vec<&str> = self.starting_position.split_whitespace().collect();
        let first_move_number: usize = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);
        let black_started = fields.get(1) == Some(&"b");

        // Ply index as if White had moved first
        let offset = usize::from(black_started);

        let mut movetext = Vec::with_capacity(self.moves.len() * 3 / 2);
        for (i, (&mv, board)) in self.moves.iter().zip(&self.positions).enumerate() {
            let ply = i + offset;
            let number = first_move_number + ply / 2;

            if ply % 2 == 0 {
                movetext.push(format!("{}.", number));
            } else if i == 0 {
                movetext.push(format!("{}...", number));
            }
            movetext.push(to_san(board, mv));
        }
        movetext.push(self.result.to_string());

        pgn.push_str(&movetext.join(" "));
        pgn.push('\n');
        pgn
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} - {} moves: {} ({})",
            self.white_name,
            self.black_name,
            self.moves.len(),
            self.result,
            self.termination
        )
    }
}

/// Standard algebraic notation of a legal move.
pub fn to_san(board: &Board, mv: ChessMove) -> String {
    let source = mv.get_source();
    let dest = mv.get_dest();
    let Some(piece) = board.piece_on(source) else {
        return format_move(mv);
    };

    let mut san = String::new();

    let file_delta = dest.get_file().to_index() as i32 - source.get_file().to_index() as i32;
    if piece == Piece::King && file_delta.abs() == 2 {
        san.push_str(if file_delta > 0 { "O-O" } else { "O-O-O" });
    } else {
        let capture = board.piece_on(dest).is_some()
            || (piece == Piece::Pawn && source.get_file() != dest.get_file());

        if piece == Piece::Pawn {
            if capture {
                san.push(file_char(source));
            }
        } else {
            san.push(piece_char(piece));
            san.push_str(&disambiguation(board, mv, piece));
        }

        if capture {
            san.push('x');
        }
        san.push_str(&dest.to_string());

        if let Some(promotion) = mv.get_promotion() {
            san.push('=');
            san.push(piece_char(promotion));
        }
    }

    let next = board.make_move_new(mv);
    if next.status() == BoardStatus::Checkmate {
        san.push('#');
    } else if *next.checkers() != EMPTY {
        san.push('+');
    }

    san
}

fn piece_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

fn file_char(square: Square) -> char {
    (b'a' + square.get_file().to_index() as u8) as char
}

fn rank_char(square: Square) -> char {
    (b'1' + square.get_rank().to_index() as u8) as char
}

/// Shortest prefix telling `mv` apart from same-piece moves to its square.
fn disambiguation(board: &Board, mv: ChessMove, piece: Piece) -> String {
    let source = mv.get_source();
    let rivals: Vec<Square> = MoveGen::new_legal(board)
        .filter(|other| {
            other.get_dest() == mv.get_dest()
                && other.get_source() != source
                && board.piece_on(other.get_source()) == Some(piece)
        })
        .map(|other| other.get_source())
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.get_file() != source.get_file()) {
        file_char(source).to_string()
    } else if rivals.iter().all(|sq| sq.get_rank() != source.get_rank()) {
        rank_char(source).to_string()
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn san(fen: &str, mv: &str) -> String {
        let board = Board::from_str(fen).unwrap();
        to_san(&board, ChessMove::from_str(mv).unwrap())
    }

    #[test]
    fn test_san_basics() {
        assert_eq!(san(STANDARD_POSITION_FEN, "e2e4"), "e4");
        assert_eq!(san(STANDARD_POSITION_FEN, "g1f3"), "Nf3");
    }

    #[test]
    fn test_san_captures_and_promotions() {
        let fen = "4k3/1P6/8/3pP3/8/8/8/4K3 w - d6 0 2";
        assert_eq!(san(fen, "e5d6"), "exd6");
        assert_eq!(san(fen, "b7b8q"), "b8=Q+");
    }

    #[test]
    fn test_san_castling() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san(fen, "e1g1"), "O-O");
        assert_eq!(san(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn test_san_disambiguation() {
        // Knights on b1 and f1 can both reach d2
        assert_eq!(san("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1d2"), "Nbd2");
        // Rooks on a1 and a5 share a file
        assert_eq!(san("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "a1a3"), "R1a3");
    }

    #[test]
    fn test_san_mate() {
        assert_eq!(san("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8"), "Ra8#");
    }

    fn outcome(starting_position: &str, moves: &[&str]) -> GameOutcome {
        let mut board = Board::from_str(starting_position).unwrap();
        let mut positions = Vec::new();
        let moves: Vec<ChessMove> = moves
            .iter()
            .map(|text| ChessMove::from_str(text).unwrap())
            .collect();
        for &mv in &moves {
            positions.push(board);
            board = board.make_move_new(mv);
        }

        GameOutcome {
            starting_position: starting_position.to_string(),
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            termination: Termination::Checkmate,
            result: "0-1",
            moves,
            positions,
        }
    }

    #[test]
    fn test_pgn_from_standard_position() {
        let game = outcome(STANDARD_POSITION_FEN, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        let pgn = game.to_pgn();

        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(!pgn.contains("[FEN"));
        assert!(pgn.ends_with("1. f3 e5 2. g4 Qh4# 0-1\n"));
    }

    #[test]
    fn test_pgn_when_black_starts() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let pgn = outcome(fen, &["e7e5", "g1f3"]).to_pgn();

        assert!(pgn.contains(&format!("[FEN \"{}\"]", fen)));
        assert!(pgn.ends_with("1... e5 2. Nf3 0-1\n"));
    }

    #[test]
    fn test_display() {
        let game = outcome(STANDARD_POSITION_FEN, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(game.to_string(), "White vs Black - 4 moves: 0-1 (checkmate)");
    }
}
