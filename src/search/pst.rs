// Piece-square tables in centipawns, written as seen from White's side of the
// board: the first row is rank 8, the last row is rank 1.
// A White piece on square s reads index s ^ 56; a Black piece reads index s.

use crate::types::{PieceKind, Score, Side, Square};

pub type PositionalTable = [Score; 64];

pub const PAWN_TABLE: PositionalTable = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

pub const KNIGHT_TABLE: PositionalTable = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

pub const BISHOP_TABLE: PositionalTable = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

pub const ROOK_TABLE: PositionalTable = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

pub const QUEEN_TABLE: PositionalTable = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// Middlegame king placement only; there is no endgame table.
pub const KING_TABLE: PositionalTable = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -50,-30,-30,-30,-30,-30,-30,-50,
];

const ALL_TABLES: [&PositionalTable; 6] =
    [&PAWN_TABLE, &KNIGHT_TABLE, &BISHOP_TABLE, &ROOK_TABLE, &QUEEN_TABLE, &KING_TABLE];

/// Largest absolute entry over every table.
pub const MAX_TABLE_MAGNITUDE: Score = {
    let mut max = 0;
    let mut t = 0;
    while t < ALL_TABLES.len() {
        let mut i = 0;
        while i < 64 {
            let v = ALL_TABLES[t][i];
            let a = if v < 0 { -v } else { v };
            if a > max { max = a; }
            i += 1;
        }
        t += 1;
    }
    max
};

pub fn table(kind: PieceKind) -> &'static PositionalTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

/// Table bonus for `side`'s piece of `kind` on `sq`, from that side's own view.
pub fn bonus(kind: PieceKind, side: Side, sq: Square) -> Score {
    let idx = match side {
        Side::White => sq.mirror().index(),
        Side::Black => sq.index(),
    };
    table(kind)[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        let b = name.as_bytes();
        Square::from_coords((b[0] - b'a') as usize, (b[1] - b'1') as usize).unwrap()
    }

    #[test]
    fn seventh_rank_pawn_bonus_is_mirrored() {
        assert_eq!(bonus(PieceKind::Pawn, Side::White, sq("e7")), 50);
        assert_eq!(bonus(PieceKind::Pawn, Side::Black, sq("e2")), 50);
        assert_eq!(bonus(PieceKind::Pawn, Side::White, sq("e2")), -20);
    }

    #[test]
    fn mirrored_squares_score_alike() {
        for kind in PieceKind::ALL {
            for s in Square::all() {
                assert_eq!(bonus(kind, Side::White, s), bonus(kind, Side::Black, s.mirror()));
            }
        }
    }

    #[test]
    fn largest_entry() {
        assert_eq!(MAX_TABLE_MAGNITUDE, 50);
    }
}
