use chess::{BitBoard, Color};

pub struct PSTRefs<'a> {
    pub pawn: &'a [i32; 64],
    pub knight: &'a [i32; 64],
    pub bishop: &'a [i32; 64],
    pub king: &'a [i32; 64],
}

#[inline(always)]
pub fn sum_pst(bitboard: BitBoard, table: &[i32; 64]) -> i32 {
    let mut total = 0;
    for sq in bitboard {
        total += table[sq.to_index()];
    }
    total
}

/// Tables are written from White's side. Black reads the same table with
/// the rank flipped; the caller subtracts Black's sum.
pub fn get_pst(color: Color) -> PSTRefs<'static> {
    match color {
        Color::White => PSTRefs {
            pawn: &WHITE_PAWN_PST,
            knight: &WHITE_KNIGHT_PST,
            bishop: &WHITE_BISHOP_PST,
            king: &WHITE_KING_PST,
        },
        Color::Black => PSTRefs {
            pawn: &BLACK_PAWN_PST,
            knight: &BLACK_KNIGHT_PST,
            bishop: &BLACK_BISHOP_PST,
            king: &BLACK_KING_PST,
        },
    }
}

const fn mirror_ranks(source: &[i32; 64]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[i ^ 56];
        i += 1;
    }
    table
}

const fn from_rank_curve(curve: &[i32; 8]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = curve[i / 8];
        i += 1;
    }
    table
}

// Bonus by rank only; a pawn is worth more the closer it gets to promotion
const PAWN_ADVANCE: [i32; 8] = [0, 0, 5, 10, 20, 35, 60, 0];
pub const WHITE_PAWN_PST: [i32; 64] = from_rank_curve(&PAWN_ADVANCE);
const BLACK_PAWN_PST: [i32; 64] = mirror_ranks(&WHITE_PAWN_PST);

// - Knights on the rim are dim
#[rustfmt::skip]
pub const WHITE_KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1: a1..h1
    -40, -20,   0,   0,   0,   0, -20, -40, // RANK 2
    -30,   0,  10,  15,  15,  10,   0, -30, // RANK 3
    -30,   5,  15,  20,  20,  15,   5, -30, // RANK 4
    -30,   5,  15,  20,  20,  15,   5, -30, // RANK 5
    -30,   0,  10,  15,  15,  10,   0, -30, // RANK 6
    -40, -20,   0,   0,   0,   0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];
const BLACK_KNIGHT_PST: [i32; 64] = mirror_ranks(&WHITE_KNIGHT_PST);

// - Long diagonals through the center
#[rustfmt::skip]
pub const WHITE_BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1: a1..h1
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 2
    -10,   0,   5,  10,  10,   5,   0, -10, // RANK 3
    -10,   5,   5,  10,  10,   5,   5, -10, // RANK 4
    -10,   5,   5,  10,  10,   5,   5, -10, // RANK 5
    -10,   0,   5,  10,  10,   5,   0, -10, // RANK 6
    -10,   0,   0,   0,   0,   0,   0, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];
const BLACK_BISHOP_PST: [i32; 64] = mirror_ranks(&WHITE_BISHOP_PST);

// - Stay home behind the pawns, castled squares preferred
#[rustfmt::skip]
pub const WHITE_KING_PST: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20, // RANK 1: a1..h1
     20,  20,   0,   0,   0,   0,  20,  20, // RANK 2
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 3
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 4
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 5
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 6
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 7
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 8
];
const BLACK_KING_PST: [i32; 64] = mirror_ranks(&WHITE_KING_PST);

#[cfg(test)]
mod tests {
    use super::*;
    use chess::Square;

    #[test]
    fn test_black_reads_mirrored_rank() {
        let white = get_pst(Color::White);
        let black = get_pst(Color::Black);

        assert_eq!(white.king[Square::G1.to_index()], 30);
        assert_eq!(black.king[Square::G8.to_index()], 30);
        assert_eq!(black.king[Square::G1.to_index()], -40);
    }

    #[test]
    fn test_pawn_curve_follows_own_direction() {
        let white = get_pst(Color::White);
        let black = get_pst(Color::Black);

        assert_eq!(white.pawn[Square::E7.to_index()], 60);
        assert_eq!(black.pawn[Square::E2.to_index()], 60);
        assert_eq!(black.pawn[Square::E7.to_index()], 0);
    }
}
