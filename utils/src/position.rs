use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use ahash::AHashMap;
use chess::{
    Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square, EMPTY,
};
use thiserror::Error;

use crate::board::{has_insufficient_material, is_capture};
use crate::termination::Termination;

/// Half-moves without a capture or pawn move that end the game automatically.
const SEVENTY_FIVE_MOVES_PLIES: u32 = 150;
const FIVEFOLD: u8 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("invalid move clock '{0}' in FEN")]
    InvalidClock(String),
}

#[derive(Debug, Clone, Copy)]
struct Undo {
    mv: ChessMove,
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A `chess::Board` plus the state the board itself does not carry: move
/// clocks, the moves played and how often every position has occurred.
///
/// Moves are applied with [`Position::push`] and reverted with
/// [`Position::pop`] in strict stack order. [`Position::apply`] wraps the pair
/// in a guard so a subtree search can never leak a mutated position.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
    repetitions: AHashMap<u64, u8>,
    undo: Vec<Undo>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Position {
    pub fn new(board: Board) -> Self {
        Self::with_clocks(board, 0, 1)
    }

    fn with_clocks(board: Board, halfmove_clock: u32, fullmove_number: u32) -> Self {
        let mut repetitions = AHashMap::new();
        repetitions.insert(board.get_hash(), 1);

        Self {
            board,
            halfmove_clock,
            fullmove_number,
            repetitions,
            undo: Vec::with_capacity(128),
        }
    }

    /// Parses a FEN string. The two clock fields are optional and default to
    /// `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(PositionError::InvalidFen(fen.to_string()));
        }

        let board = Board::from_str(&fields[..4].join(" "))
            .map_err(|_| PositionError::InvalidFen(fen.to_string()))?;

        let halfmove_clock = parse_clock(fields.get(4), 0)?;
        let fullmove_number = parse_clock(fields.get(5), 1)?.max(1);

        Ok(Self::with_clocks(board, halfmove_clock, fullmove_number))
    }

    pub fn fen(&self) -> String {
        let board = self.board.to_string();
        let placement: Vec<&str> = board.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.board.get_hash()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves played since this position was created, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = ChessMove> + '_ {
        self.undo.iter().map(|undo| undo.mv)
    }

    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    #[inline(always)]
    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    #[inline(always)]
    pub fn is_capture(&self, mv: ChessMove) -> bool {
        is_capture(&self.board, mv)
    }

    /// Piece on the square at `rank` and `file`, both indexed 0..8 from a1.
    pub fn piece_at(&self, rank: usize, file: usize) -> Option<(Piece, Color)> {
        if rank > 7 || file > 7 {
            return None;
        }

        let square = Square::make_square(Rank::from_index(rank), File::from_index(file));
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((piece, color))
    }

    /// Plays a legal move. Legality is the caller's responsibility.
    pub fn push(&mut self, mv: ChessMove) {
        let resets_clock =
            self.board.piece_on(mv.get_source()) == Some(Piece::Pawn) || self.is_capture(mv);

        self.undo.push(Undo {
            mv,
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        if self.board.side_to_move() == Color::Black {
            self.fullmove_number += 1;
        }
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.board = self.board.make_move_new(mv);

        *self.repetitions.entry(self.board.get_hash()).or_insert(0) += 1;
    }

    /// Takes back the last pushed move.
    pub fn pop(&mut self) -> Option<ChessMove> {
        let undo = self.undo.pop()?;

        let hash = self.board.get_hash();
        if let Some(count) = self.repetitions.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&hash);
            }
        }

        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        Some(undo.mv)
    }

    /// Plays `mv` for as long as the returned guard lives.
    pub fn apply(&mut self, mv: ChessMove) -> Applied<'_> {
        self.push(mv);
        Applied { position: self }
    }

    /// How many times the current position has occurred, this one included.
    pub fn repetition_count(&self) -> u8 {
        self.repetitions
            .get(&self.board.get_hash())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    pub fn is_insufficient_material(&self) -> bool {
        has_insufficient_material(&self.board)
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVES_PLIES
            && self.board.status() == BoardStatus::Ongoing
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetition_count() >= FIVEFOLD
    }

    /// Why the game is over, or `None` while it is still being played.
    pub fn termination(&self) -> Option<Termination> {
        self.termination_with(MoveGen::new_legal(&self.board).len() > 0)
    }

    /// [`Position::termination`] for a caller that already generated the
    /// legal moves and only needs to say whether there were any.
    pub fn termination_with(&self, has_legal_moves: bool) -> Option<Termination> {
        if !has_legal_moves {
            return Some(if *self.board.checkers() == EMPTY {
                Termination::Stalemate
            } else {
                Termination::Checkmate
            });
        }

        if self.is_insufficient_material() {
            Some(Termination::InsufficientMaterial)
        } else if self.halfmove_clock >= SEVENTY_FIVE_MOVES_PLIES {
            Some(Termination::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(Termination::FivefoldRepetition)
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }
}

fn parse_clock(field: Option<&&str>, default: u32) -> Result<u32, PositionError> {
    match field {
        Some(value) => value
            .parse()
            .map_err(|_| PositionError::InvalidClock(value.to_string())),
        None => Ok(default),
    }
}

/// Guard returned by [`Position::apply`]. Dereferences to the position with
/// the move played and takes the move back when dropped.
pub struct Applied<'a> {
    position: &'a mut Position,
}

impl Deref for Applied<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for Applied<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for Applied<'_> {
    fn drop(&mut self) {
        self.position.pop();
    }
}
