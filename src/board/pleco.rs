#![cfg(feature = "board-pleco")]
use pleco::{Board as PlecoBoard, PieceType, Player, SQ};

use crate::board::Rules;
use crate::error::{Error, Result};
use crate::types::{PieceKind, Side, Square};

const FIFTY_MOVE_PLIES: i16 = 100;

/// Pleco board; apply/undo map straight onto its own make/unmake.
pub struct RevBoard {
    board: PlecoBoard,
    stack: Vec<pleco::BitMove>,
}

impl RevBoard {
    pub fn from_fen(fen: &str) -> Result<Self> {
        PlecoBoard::from_fen(fen)
            .map(|b| Self { board: b, stack: Vec::with_capacity(128) })
            .map_err(|e| Error::Fen(format!("{fen}: {e:?}")))
    }
    pub fn startpos() -> Self { Self { board: PlecoBoard::start_pos(), stack: Vec::with_capacity(128) } }
    pub fn fen(&self) -> String { self.board.fen() }
    pub fn ply(&self) -> usize { self.stack.len() }
}

impl Rules for RevBoard {
    type Move = pleco::BitMove;

    fn legal_moves(&self) -> Vec<pleco::BitMove> { self.board.generate_moves().iter().copied().collect() }

    fn apply(&mut self, mv: pleco::BitMove) { self.board.apply_move(mv); self.stack.push(mv); }

    fn undo(&mut self) { if self.stack.pop().is_some() { self.board.undo_move(); } }

    fn is_terminal(&self) -> bool {
        self.board.checkmate() || self.board.stalemate() || self.board.rule_50() >= FIFTY_MOVE_PLIES
    }

    fn piece_at(&self, sq: Square) -> Option<(PieceKind, Side)> {
        let piece = self.board.piece_at_sq(SQ(sq.index() as u8));
        let side = match piece.player()? {
            Player::White => Side::White,
            Player::Black => Side::Black,
        };
        let kind = match piece.type_of() {
            PieceType::P => PieceKind::Pawn,
            PieceType::N => PieceKind::Knight,
            PieceType::B => PieceKind::Bishop,
            PieceType::R => PieceKind::Rook,
            PieceType::Q => PieceKind::Queen,
            PieceType::K => PieceKind::King,
            _ => return None,
        };
        Some((kind, side))
    }

    fn side_to_move(&self) -> Side {
        match self.board.turn() {
            Player::White => Side::White,
            Player::Black => Side::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::perft;

    #[test]
    fn perft_matches_known_counts() {
        let mut b = RevBoard::startpos();
        assert_eq!(perft(&mut b, 3), 8902);
        assert_eq!(b.ply(), 0);
    }
}
