use cozy_chess::{Board as CozyBoard, Color, File, Move, Piece, Square as CozySquare};

use crate::board::Rules;
use crate::error::{Error, Result};
use crate::types::{PieceKind, Side, Square};

/// Halfmove clock at which cozy-chess itself declares the game drawn.
const FIFTY_MOVE_PLIES: u8 = 100;
/// Occurrences of one position that end the game.
const FIVEFOLD: usize = 5;

/// cozy-chess board with an undo stack of earlier boards.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<CozyBoard>,
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen.trim(), false)
            .map(|b| Self { board: b, history: Vec::with_capacity(128) })
            .map_err(|e| Error::Fen(format!("{fen}: {e:?}")))
    }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// Number of moves applied since this position was set up.
    pub fn ply(&self) -> usize { self.history.len() }

    /// Where the king lands if `mv` castles. cozy-chess encodes castling as king-takes-rook.
    fn castle_destination(&self, mv: Move) -> Option<CozySquare> {
        let castles = self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(self.board.side_to_move());
        if !castles { return None; }
        let file = if (mv.to.file() as usize) > (mv.from.file() as usize) { File::G } else { File::C };
        Some(CozySquare::new(file, mv.from.rank()))
    }

    /// Standard UCI text for `mv`; castling is written as the king's two-square step.
    pub fn move_to_uci(&self, mv: Move) -> String {
        match self.castle_destination(mv) {
            Some(to) => format!("{}{}", mv.from, to),
            None => format!("{}", mv),
        }
    }

    /// Resolve UCI (`e2e4`) or SAN (`e4`, `Nf3`, `exd5`, `O-O`, `e8=Q`) text
    /// against the legal moves of this position.
    pub fn parse_move(&self, text: &str) -> Result<Move> {
        let text = text.trim();
        if !is_uci_shaped(text) { return self.parse_san(text); }
        let wanted = text.to_ascii_lowercase();
        self.legal_moves()
            .into_iter()
            .find(|&m| self.move_to_uci(m) == wanted)
            .ok_or_else(|| Error::IllegalMove(text.to_string()))
    }

    fn parse_san(&self, text: &str) -> Result<Move> {
        let notation = || Error::Notation(text.to_string());
        let illegal = || Error::IllegalMove(text.to_string());
        let san = text.trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'));

        let long_castle = match san {
            "O-O" | "0-0" => Some(false),
            "O-O-O" | "0-0-0" => Some(true),
            _ => None,
        };
        if let Some(long) = long_castle {
            let file = if long { File::C } else { File::G };
            return self.legal_moves()
                .into_iter()
                .find(|&m| self.castle_destination(m).map_or(false, |to| to.file() == file))
                .ok_or_else(illegal);
        }

        let mut chars: Vec<char> = san.chars().filter(|&c| c != 'x').collect();
        let piece = match chars.first().copied().and_then(piece_letter) {
            Some(p) if p != Piece::Pawn => { chars.remove(0); p }
            _ => Piece::Pawn,
        };
        let mut promotion = None;
        if piece == Piece::Pawn {
            if let Some(p) = chars.last().copied().and_then(piece_letter) {
                chars.pop();
                if chars.last() == Some(&'=') { chars.pop(); }
                promotion = Some(p);
            }
        }
        if chars.len() < 2 || chars.len() > 4 { return Err(notation()); }
        let dest = square_from_chars(chars[chars.len() - 2], chars[chars.len() - 1]).ok_or_else(notation)?;

        let mut from_file = None;
        let mut from_rank = None;
        for &c in &chars[..chars.len() - 2] {
            match c {
                'a'..='h' => from_file = Some(c as usize - 'a' as usize),
                '1'..='8' => from_rank = Some(c as usize - '1' as usize),
                _ => return Err(notation()),
            }
        }

        let candidates: Vec<Move> = self.legal_moves()
            .into_iter()
            .filter(|&m| {
                self.castle_destination(m).is_none()
                    && self.board.piece_on(m.from) == Some(piece)
                    && m.to == dest
                    && m.promotion == promotion
                    && from_file.map_or(true, |f| m.from.file() as usize == f)
                    && from_rank.map_or(true, |r| m.from.rank() as usize == r)
            })
            .collect();
        match candidates.as_slice() {
            [m] => Ok(*m),
            _ => Err(illegal()),
        }
    }

    pub fn make_move_uci(&mut self, mv_uci: &str) -> Result<()> {
        let mv = self.parse_move(mv_uci)?;
        self.apply(mv);
        Ok(())
    }

    pub fn set_from_start_and_moves(moves: &[String]) -> Result<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    pub fn set_from_fen_and_moves(fen: &str, moves: &[String]) -> Result<Self> {
        let mut pos = Self::from_fen(fen)?;
        for m in moves { pos.make_move_uci(m)?; }
        Ok(pos)
    }

    /// Neither side can ever deliver mate.
    fn is_insufficient_material(&self) -> bool {
        self.cannot_mate(Color::White) && self.cannot_mate(Color::Black)
    }

    fn cannot_mate(&self, color: Color) -> bool {
        let b = &self.board;
        let opp = match color { Color::White => Color::Black, Color::Black => Color::White };
        let ours = |p: Piece| b.colors(color) & b.pieces(p);
        let theirs = |p: Piece| b.colors(opp) & b.pieces(p);

        if !(ours(Piece::Pawn) | ours(Piece::Rook) | ours(Piece::Queen)).is_empty() { return false; }
        if !ours(Piece::Knight).is_empty() {
            // A lone knight mates only with help from enemy pieces that can block the king.
            let helpers = theirs(Piece::Pawn) | theirs(Piece::Knight) | theirs(Piece::Bishop) | theirs(Piece::Rook);
            return (ours(Piece::Knight) | ours(Piece::Bishop)).len() <= 1 && helpers.is_empty();
        }
        if !ours(Piece::Bishop).is_empty() {
            // Bishops all on one square colour never cover both colours around a king.
            let mut colours = b.pieces(Piece::Bishop).into_iter().map(|sq| (sq.file() as usize + sq.rank() as usize) % 2);
            let first = colours.next();
            let same_colour = colours.all(|c| Some(c) == first);
            return same_colour && (theirs(Piece::Pawn) | theirs(Piece::Knight)).is_empty();
        }
        true
    }

    fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.hash();
        let earlier = self.history.iter().filter(|b| b.hash() == key).count();
        earlier + 1 >= FIVEFOLD
    }
}

fn is_uci_shaped(text: &str) -> bool {
    let b = text.as_bytes();
    if b.len() != 4 && b.len() != 5 { return false; }
    let square = |f: u8, r: u8| (b'a'..=b'h').contains(&f.to_ascii_lowercase()) && (b'1'..=b'8').contains(&r);
    let promo_ok = b.len() == 4 || matches!(b[4].to_ascii_lowercase(), b'q' | b'r' | b'b' | b'n');
    square(b[0], b[1]) && square(b[2], b[3]) && promo_ok
}

fn piece_letter(c: char) -> Option<Piece> {
    match c {
        'N' => Some(Piece::Knight),
        'B' => Some(Piece::Bishop),
        'R' => Some(Piece::Rook),
        'Q' => Some(Piece::Queen),
        'K' => Some(Piece::King),
        _ => None,
    }
}

fn square_from_chars(file: char, rank: char) -> Option<CozySquare> {
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) { return None; }
    let idx = (rank as usize - '1' as usize) * 8 + (file as usize - 'a' as usize);
    Some(CozySquare::index(idx))
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn apply(&mut self, mv: Move) {
        self.history.push(self.board.clone());
        self.board.play(mv);
    }

    fn undo(&mut self) {
        if let Some(prev) = self.history.pop() { self.board = prev; }
    }

    fn is_terminal(&self) -> bool {
        let mut has_legal = false;
        self.board.generate_moves(|_| { has_legal = true; true });
        !has_legal
            || self.is_insufficient_material()
            || self.board.halfmove_clock() >= FIFTY_MOVE_PLIES
            || self.is_fivefold_repetition()
    }

    fn piece_at(&self, sq: Square) -> Option<(PieceKind, Side)> {
        let s = CozySquare::index(sq.index());
        let piece = self.board.piece_on(s)?;
        let color = self.board.color_on(s)?;
        Some((kind_of(piece), side_of(color)))
    }

    fn side_to_move(&self) -> Side { side_of(self.board.side_to_move()) }
}
