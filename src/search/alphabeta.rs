use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Rules;
use crate::search::eval::EvalMode;
use crate::types::{Score, Side};

pub const DEFAULT_DEPTH: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Plies to search. Zero or less scores each root reply statically.
    pub depth: i32,
    pub eval: EvalMode,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: DEFAULT_DEPTH, eval: EvalMode::Material } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// `None` only when the root has no legal moves.
    pub bestmove: Option<M>,
    pub score: Score,
    pub nodes: u64,
}

impl<M> SearchResult<M> {
    pub fn map_move<N>(self, f: impl FnOnce(M) -> N) -> SearchResult<N> {
        SearchResult { bestmove: self.bestmove.map(f), score: self.score, nodes: self.nodes }
    }
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// White maximizes and Black minimizes the same White-relative score. Moves
/// are tried in the order the rules engine supplies them and every `apply`
/// is undone before returning, so the position comes back unchanged.
#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self { Self { params, nodes: 0 } }

    pub fn params(&self) -> SearchParams { self.params }
    pub fn set_params(&mut self, params: SearchParams) { self.params = params; }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search<R: Rules>(&mut self, pos: &mut R, side: Side) -> SearchResult<R::Move> {
        self.search_depth(pos, side, self.params.depth)
    }

    pub fn search_depth<R: Rules>(&mut self, pos: &mut R, side: Side, depth: i32) -> SearchResult<R::Move> {
        self.nodes = 0;
        let inf = self.params.eval.bound();
        let maximizing = side.is_maximizing();
        let mut best_score = if maximizing { -inf } else { inf };
        let mut bestmove: Option<R::Move> = None;

        let moves = pos.legal_moves();
        if moves.is_empty() {
            let score = self.params.eval.evaluate(pos);
            info!("no legal moves for {side}; static score {score}");
            return SearchResult { bestmove: None, score, nodes: self.nodes };
        }

        // Full window for every root reply keeps each root score exact.
        for m in moves {
            pos.apply(m);
            let score = self.minimax(pos, depth - 1, -inf, inf, !maximizing);
            pos.undo();
            debug!("root {m}: {score}");
            let better = if maximizing { score > best_score } else { score < best_score };
            if better {
                best_score = score;
                bestmove = Some(m);
            }
        }

        if let Some(m) = bestmove {
            info!("{side} depth {depth}: best {m} score {best_score} nodes {}", self.nodes);
        }
        SearchResult { bestmove, score: best_score, nodes: self.nodes }
    }

    /// Value of `pos` searched `depth` more plies, clamped to the (alpha, beta) window.
    pub fn minimax<R: Rules>(&mut self, pos: &mut R, depth: i32, mut alpha: Score, mut beta: Score, maximizing: bool) -> Score {
        self.nodes += 1;
        if depth <= 0 || pos.is_terminal() { return self.params.eval.evaluate(pos); }
        let moves = pos.legal_moves();
        if moves.is_empty() { return self.params.eval.evaluate(pos); }

        let inf = self.params.eval.bound();
        if maximizing {
            let mut value = -inf;
            for m in moves {
                pos.apply(m);
                let score = self.minimax(pos, depth - 1, alpha, beta, false);
                pos.undo();
                value = value.max(score);
                alpha = alpha.max(value);
                if beta <= alpha { break; }
            }
            value
        } else {
            let mut value = inf;
            for m in moves {
                pos.apply(m);
                let score = self.minimax(pos, depth - 1, alpha, beta, true);
                pos.undo();
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha { break; }
            }
            value
        }
    }
}

/// Best move for `side` after `depth` plies with the material evaluator,
/// or `None` when there is no legal move.
pub fn select_move<R: Rules>(pos: &mut R, side: Side, depth: i32) -> Option<R::Move> {
    let mut searcher = Searcher::new(SearchParams { depth, ..SearchParams::default() });
    searcher.search(pos, side).bestmove
}

/// [`select_move`] for the side the position says is to move.
pub fn best_move<R: Rules>(pos: &mut R, depth: i32) -> Option<R::Move> {
    let side = pos.side_to_move();
    select_move(pos, side, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Rules;
    use crate::types::{PieceKind, Square};

    /// Hand-built two-ply tree; leaves carry fixed scores.
    #[derive(Debug)]
    struct Tree {
        path: Vec<usize>,
        leaves: Vec<Vec<Score>>,
        applied: usize,
    }

    impl Tree {
        fn new(leaves: Vec<Vec<Score>>) -> Self { Self { path: Vec::new(), leaves, applied: 0 } }
    }

    // Material is faked through piece_at: a leaf worth n shows n White pawns.
    impl Rules for Tree {
        type Move = usize;

        fn legal_moves(&self) -> Vec<usize> {
            match self.path.len() {
                0 => (0..self.leaves.len()).collect(),
                1 => (0..self.leaves[self.path[0]].len()).collect(),
                _ => Vec::new(),
            }
        }
        fn apply(&mut self, mv: usize) { self.path.push(mv); self.applied += 1; }
        fn undo(&mut self) { self.path.pop(); }
        fn is_terminal(&self) -> bool { self.legal_moves().is_empty() }
        fn piece_at(&self, sq: Square) -> Option<(PieceKind, Side)> {
            if self.path.len() != 2 { return None; }
            let v = self.leaves[self.path[0]][self.path[1]];
            if (sq.index() as Score) < v.abs() {
                Some((PieceKind::Pawn, if v > 0 { Side::White } else { Side::Black }))
            } else {
                None
            }
        }
        fn side_to_move(&self) -> Side { if self.path.len() % 2 == 0 { Side::White } else { Side::Black } }
    }

    #[test]
    fn picks_maximin_reply_and_prunes() {
        // Black answers each White move with its smallest leaf: 3, 2, 1.
        let mut t = Tree::new(vec![vec![3, 12, 8], vec![2, 4, 6], vec![14, 5, 1]]);
        let mut s = Searcher::new(SearchParams { depth: 2, eval: EvalMode::Material });
        let r = s.search(&mut t, Side::White);
        assert_eq!(r.bestmove, Some(0));
        assert_eq!(r.score, 3);
        assert!(t.path.is_empty());
    }

    #[test]
    fn cutoff_skips_remaining_siblings() {
        let mut t = Tree::new(vec![vec![5, 9], vec![1, 7, 7, 7]]);
        let mut s = Searcher::default();
        let inf = EvalMode::Material.bound();
        // Second branch is refuted by its first leaf once alpha is 5.
        let v = s.minimax(&mut t, 2, -inf, inf, true);
        assert_eq!(v, 5);
        // root + 2 branch nodes + 2 leaves + 1 leaf
        assert_eq!(s.nodes(), 6);
    }

    #[test]
    fn ties_keep_first_enumerated() {
        let mut t = Tree::new(vec![vec![4], vec![4], vec![4]]);
        assert_eq!(select_move(&mut t, Side::White, 2), Some(0));
        let mut t = Tree::new(vec![vec![-2], vec![-2]]);
        assert_eq!(select_move(&mut t, Side::Black, 2), Some(0));
    }

    #[test]
    fn black_minimizes() {
        let mut t = Tree::new(vec![vec![6, 2], vec![-3, 9], vec![-5, -4]]);
        // White to reply from each of Black's moves picks the larger leaf: 6, 9, -4.
        assert_eq!(select_move(&mut t, Side::Black, 2), Some(2));
    }

    #[test]
    fn empty_root_returns_none() {
        let mut t = Tree::new(Vec::new());
        let r = Searcher::default().search(&mut t, Side::White);
        assert_eq!(r.bestmove, None);
        assert_eq!(t.applied, 0);
    }
}
