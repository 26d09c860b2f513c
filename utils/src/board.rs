use chess::{BitBoard, Board, ChessMove, Color, Piece, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;
const DARK_SQUARES_MASK: u64 = !LIGHT_SQUARES_MASK;

/// A move is a capture when its destination is occupied, or when a pawn
/// changes file (en passant lands on an empty square).
#[inline(always)]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    if board.piece_on(mv.get_dest()).is_some() {
        return true;
    }

    board.piece_on(mv.get_source()) == Some(Piece::Pawn)
        && mv.get_source().get_file() != mv.get_dest().get_file()
}

/// Checks if a specific color has insufficient material to force checkmate.
///
/// - a lone king never mates
/// - a king and knight cannot mate unless the opponent owns blocking material
///   other than queens
/// - bishops all on one square color cannot mate without pawns or knights on
///   the board
#[inline(always)]
pub fn side_has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = *board.color_combined(color);

    let pawns = *board.pieces(Piece::Pawn);
    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);
    let rooks = *board.pieces(Piece::Rook);
    let queens = *board.pieces(Piece::Queen);
    let kings = *board.pieces(Piece::King);

    if ours & (pawns | rooks | queens) != EMPTY {
        return false;
    }

    if ours & knights != EMPTY {
        let theirs = *board.color_combined(!color);
        return ours.popcnt() <= 2 && (theirs & !kings & !queens) == EMPTY;
    }

    if ours & bishops != EMPTY {
        let same_color = bishops & BitBoard(DARK_SQUARES_MASK) == EMPTY
            || bishops & BitBoard(LIGHT_SQUARES_MASK) == EMPTY;
        return same_color && pawns == EMPTY && knights == EMPTY;
    }

    true
}

/// Dead draw: neither side can ever deliver checkmate.
#[inline(always)]
pub fn has_insufficient_material(board: &Board) -> bool {
    side_has_insufficient_material(board, Color::White)
        && side_has_insufficient_material(board, Color::Black)
}
