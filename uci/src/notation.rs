use chess::{ChessMove, File, Piece, Rank, Square};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 4 or 5 characters, got {0}")]
    Length(usize),
    #[error("invalid file '{0}'")]
    File(char),
    #[error("invalid rank '{0}'")]
    Rank(char),
    #[error("invalid promotion piece '{0}'")]
    Promotion(char),
}

/// Parses coordinate notation such as `e2e4` or `e7e8q`.
///
/// Only the shape is checked here. Whether the move is legal is up to the
/// position it is played in.
pub fn parse_move(text: &str) -> Result<ChessMove, NotationError> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != 4 && chars.len() != 5 {
        return Err(NotationError::Length(chars.len()));
    }

    let source = parse_square(chars[0], chars[1])?;
    let dest = parse_square(chars[2], chars[3])?;
    let promotion = chars.get(4).copied().map(parse_promotion).transpose()?;

    Ok(ChessMove::new(source, dest, promotion))
}

pub fn format_move(mv: ChessMove) -> String {
    let mut text = format!("{}{}", mv.get_source(), mv.get_dest());
    if let Some(piece) = mv.get_promotion() {
        text.push(promotion_letter(piece));
    }
    text
}

fn parse_square(file: char, rank: char) -> Result<Square, NotationError> {
    let file_index = match file {
        'a'..='h' => file as usize - 'a' as usize,
        _ => return Err(NotationError::File(file)),
    };
    let rank_index = match rank {
        '1'..='8' => rank as usize - '1' as usize,
        _ => return Err(NotationError::Rank(rank)),
    };

    Ok(Square::make_square(
        Rank::from_index(rank_index),
        File::from_index(file_index),
    ))
}

fn parse_promotion(letter: char) -> Result<Piece, NotationError> {
    match letter {
        'q' => Ok(Piece::Queen),
        'r' => Ok(Piece::Rook),
        'b' => Ok(Piece::Bishop),
        'n' => Ok(Piece::Knight),
        _ => Err(NotationError::Promotion(letter)),
    }
}

fn promotion_letter(piece: Piece) -> char {
    match piece {
        Piece::Queen => 'q',
        Piece::Rook => 'r',
        Piece::Bishop => 'b',
        Piece::Knight => 'n',
        Piece::Pawn => 'p',
        Piece::King => 'k',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Board, MoveGen};
    use std::str::FromStr;

    #[test]
    fn test_parse_simple_move() {
        let mv = parse_move("e2e4").unwrap();
        assert_eq!(mv, ChessMove::new(Square::E2, Square::E4, None));
    }

    #[test]
    fn test_parse_promotion() {
        let mv = parse_move("e7e8q").unwrap();
        assert_eq!(mv, ChessMove::new(Square::E7, Square::E8, Some(Piece::Queen)));

        let mv = parse_move("a2a1n").unwrap();
        assert_eq!(mv.get_promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_move(" g1f3\n").unwrap().to_string(), "g1f3");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_move(""), Err(NotationError::Length(0)));
        assert_eq!(parse_move("e2e"), Err(NotationError::Length(3)));
        assert_eq!(parse_move("e2e4qq"), Err(NotationError::Length(6)));
        assert_eq!(parse_move("i2e4"), Err(NotationError::File('i')));
        assert_eq!(parse_move("e2E4"), Err(NotationError::File('E')));
        assert_eq!(parse_move("e0e4"), Err(NotationError::Rank('0')));
        assert_eq!(parse_move("e2e9"), Err(NotationError::Rank('9')));
        assert_eq!(parse_move("e7e8k"), Err(NotationError::Promotion('k')));
    }

    #[test]
    fn test_format_move() {
        assert_eq!(format_move(ChessMove::new(Square::G1, Square::F3, None)), "g1f3");
        assert_eq!(
            format_move(ChessMove::new(Square::B7, Square::B8, Some(Piece::Rook))),
            "b7b8r"
        );
    }

    #[test]
    fn test_legal_moves_survive_formatting() {
        // Promotions, castling and en passant in one position
        let boards = [
            Board::default(),
            Board::from_str("r3k2r/1P6/8/3pP3/8/8/6p1/R3K2R w KQkq d6 0 2").unwrap(),
        ];

        for board in boards {
            for mv in MoveGen::new_legal(&board) {
                assert_eq!(parse_move(&format_move(mv)), Ok(mv));
            }
        }
    }
}
