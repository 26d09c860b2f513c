use arrayvec::ArrayVec;
use chess::{ChessMove, MoveGen};
use utils::{is_capture, Position};

/// Upper bound on legal moves in any reachable position (218), rounded up.
pub const MAX_MOVES: usize = 256;

pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;

/// Legal moves with every capture ahead of every quiet move.
/// Generation order is preserved within each group.
pub fn ordered_moves(position: &Position) -> MoveList {
    let board = position.board();
    let mut moves = MoveList::new();
    let mut quiets = MoveList::new();

    for mv in MoveGen::new_legal(board) {
        if is_capture(board, mv) {
            moves.push(mv);
        } else {
            quiets.push(mv);
        }
    }

    moves.extend(quiets);
    moves
}
