// Score bounds and special values for alpha-beta search, in centipawns.

/// Window bound used to open a search. Larger than any reachable score.
pub const INFINITY: i32 = 1_000_000;
pub const NEG_INFINITY: i32 = -INFINITY;

/// Score of a checkmated side, signed by who delivered mate.
pub const CHECKMATE_SCORE: i32 = 10_000;
pub const DRAW_SCORE: i32 = 0;

/// Largest magnitude a non-terminal position can score.
pub const MAX_STATIC_SCORE: i32 = CHECKMATE_SCORE - 1;
