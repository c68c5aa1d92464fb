use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Evaluation score. Positive favours White.
pub type Score = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// White maximizes the score, Black minimizes it.
    pub fn is_maximizing(self) -> bool { self == Side::White }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            _ => Err(Error::Side(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in pawn units. The king carries no material.
    pub const fn value(self) -> Score {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Letter used for White in board diagrams; Black uses the lowercase form.
    pub fn symbol(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        if side == Side::White { c } else { c.to_ascii_lowercase() }
    }
}

/// Board square index, a1 = 0, h1 = 7, a8 = 56.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    pub fn new(index: usize) -> Option<Square> {
        if index < Self::COUNT { Some(Square(index as u8)) } else { None }
    }

    pub fn from_coords(file: usize, rank: usize) -> Option<Square> {
        if file < 8 && rank < 8 { Some(Square((rank * 8 + file) as u8)) } else { None }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    pub fn index(self) -> usize { self.0 as usize }
    pub fn file(self) -> usize { (self.0 % 8) as usize }
    pub fn rank(self) -> usize { (self.0 / 8) as usize }

    /// Same file, rank flipped (a1 <-> a8).
    pub fn mirror(self) -> Square { Square(self.0 ^ 56) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        write!(f, "{}{}", file, self.rank() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_coords_and_mirror() {
        let e2 = Square::from_coords(4, 1).unwrap();
        assert_eq!(e2.index(), 12);
        assert_eq!(e2.to_string(), "e2");
        assert_eq!(e2.mirror().to_string(), "e7");
        assert_eq!(e2.mirror().mirror(), e2);
        assert!(Square::new(64).is_none());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn side_parsing() {
        assert_eq!("w".parse::<Side>().unwrap(), Side::White);
        assert_eq!("Black".parse::<Side>().unwrap(), Side::Black);
        assert!("u".parse::<Side>().is_err());
        assert_eq!(Side::White.opposite(), Side::Black);
    }

    #[test]
    fn material_values() {
        let total: Score = PieceKind::ALL.iter().map(|k| k.value()).sum();
        assert_eq!(total, 1 + 3 + 3 + 5 + 9);
        assert_eq!(PieceKind::Knight.symbol(Side::Black), 'n');
    }
}
