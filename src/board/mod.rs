//! Rules-engine adapters.
//!
//! The search only ever talks to a position through [`Rules`]; the concrete
//! move generation comes from `cozy-chess` (default) or `pleco`.

use std::fmt;

use crate::types::{PieceKind, Side, Square};

pub mod cozy;
#[cfg(feature = "board-pleco")]
pub mod pleco;

/// Reversible game state as seen by the search.
pub trait Rules {
    type Move: Copy + PartialEq + fmt::Debug + fmt::Display;

    /// Legal moves in the engine's own order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv`, which must come from [`Rules::legal_moves`] of this position.
    fn apply(&mut self, mv: Self::Move);

    /// Take back the most recent unmatched [`Rules::apply`].
    fn undo(&mut self);

    /// No further play: mate, stalemate or a forced draw.
    fn is_terminal(&self) -> bool;

    fn piece_at(&self, sq: Square) -> Option<(PieceKind, Side)>;

    fn side_to_move(&self) -> Side;
}

/// Leaf count at `depth` plies, walking the tree with apply/undo.
pub fn perft<R: Rules>(pos: &mut R, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        pos.apply(mv);
        nodes += perft(pos, depth - 1);
        pos.undo();
    }
    nodes
}
