use serde::{Deserialize, Serialize};

use crate::board::Rules;
use crate::search::pst::{self, MAX_TABLE_MAGNITUDE};
use crate::types::{PieceKind, Score, Side, Square};

/// Most material one side can hold: every pawn promoted to a queen.
pub const MAX_MATERIAL_PER_SIDE: Score = 9 * PieceKind::Queen.value()
    + 2 * PieceKind::Rook.value()
    + 2 * PieceKind::Bishop.value()
    + 2 * PieceKind::Knight.value()
    + PieceKind::King.value();

/// Centipawns per material unit in the positional evaluator.
pub const CP_PER_UNIT: Score = 100;

const MAX_PIECES: Score = 32;

/// Side-agnostic material balance: White's piece values minus Black's.
pub fn evaluate<R: Rules>(pos: &R) -> Score {
    let mut white = 0;
    let mut black = 0;
    for sq in Square::all() {
        match pos.piece_at(sq) {
            Some((kind, Side::White)) => white += kind.value(),
            Some((kind, Side::Black)) => black += kind.value(),
            None => {}
        }
    }
    white - black
}

/// Material in centipawns plus each piece's table bonus, White minus Black.
pub fn evaluate_positional<R: Rules>(pos: &R) -> Score {
    let mut score = 0;
    for sq in Square::all() {
        if let Some((kind, side)) = pos.piece_at(sq) {
            let v = kind.value() * CP_PER_UNIT + pst::bonus(kind, side, sq);
            match side {
                Side::White => score += v,
                Side::Black => score -= v,
            }
        }
    }
    score
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EvalMode {
    /// Material only, in pawn units.
    #[default]
    Material,
    /// Centipawn material plus piece-square tables.
    Positional,
}

impl EvalMode {
    pub fn evaluate<R: Rules>(self, pos: &R) -> Score {
        match self {
            EvalMode::Material => evaluate(pos),
            EvalMode::Positional => evaluate_positional(pos),
        }
    }

    /// Strictly larger than any score this mode can return; the search's infinity.
    pub const fn bound(self) -> Score {
        match self {
            EvalMode::Material => MAX_MATERIAL_PER_SIDE + 1,
            EvalMode::Positional => MAX_MATERIAL_PER_SIDE * CP_PER_UNIT + MAX_PIECES * MAX_TABLE_MAGNITUDE + 1,
        }
    }
}

impl std::str::FromStr for EvalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" => Ok(EvalMode::Material),
            "positional" | "pst" => Ok(EvalMode::Positional),
            other => Err(format!("unknown eval mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_promoted_material() {
        assert_eq!(MAX_MATERIAL_PER_SIDE, 103);
        assert!(EvalMode::Material.bound() > MAX_MATERIAL_PER_SIDE);
        assert!(EvalMode::Positional.bound() > MAX_MATERIAL_PER_SIDE * CP_PER_UNIT);
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("PST".parse::<EvalMode>().unwrap(), EvalMode::Positional);
        assert!("nnue".parse::<EvalMode>().is_err());
    }
}
