//! Human-versus-engine game over any line-oriented reader and writer.

use std::io::{BufRead, Write};

use log::debug;

use crate::board::cozy::Position;
use crate::board::Rules;
use crate::error::Result;
use crate::search::alphabeta::Searcher;
use crate::types::{Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The position became terminal.
    Finished,
    /// Input ended or the player typed `quit`.
    Aborted,
}

/// ASCII diagram, rank 8 on top; White uppercase, Black lowercase.
pub fn render<R: Rules>(pos: &R) -> String {
    let mut s = String::with_capacity(8 * 18);
    for rank in (0..8).rev() {
        let row: Vec<String> = (0..8)
            .map(|file| {
                Square::from_coords(file, rank)
                    .and_then(|sq| pos.piece_at(sq))
                    .map_or('.', |(kind, side)| kind.symbol(side))
                    .to_string()
            })
            .collect();
        s.push_str(&row.join(" "));
        s.push('\n');
    }
    s
}

pub struct Game<'a> {
    pos: &'a mut Position,
    human: Side,
    searcher: &'a mut Searcher,
}

impl<'a> Game<'a> {
    pub fn new(pos: &'a mut Position, human: Side, searcher: &'a mut Searcher) -> Self {
        Self { pos, human, searcher }
    }

    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, out: &mut O) -> Result<Outcome> {
        writeln!(out, "Chess Board")?;
        write!(out, "{}", render(&*self.pos))?;

        let engine = self.human.opposite();
        while !self.pos.is_terminal() {
            if self.pos.side_to_move() == self.human {
                if !self.human_turn(&mut input, out)? { return Ok(Outcome::Aborted); }
                continue;
            }
            let res = self.searcher.search(&mut *self.pos, engine);
            let Some(mv) = res.bestmove else { break };
            let text = self.pos.move_to_uci(mv);
            self.pos.apply(mv);
            writeln!(out)?;
            writeln!(out, "{engine} made the move: {text}")?;
            writeln!(out)?;
            writeln!(out, "= Board State =")?;
            write!(out, "{}", render(&*self.pos))?;
        }

        writeln!(out, "Game over")?;
        Ok(Outcome::Finished)
    }

    /// Prompts until a legal move is entered. Returns false when the player leaves.
    fn human_turn<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> Result<bool> {
        loop {
            write!(out, "Enter your move (ex: e2e4 or e4): ")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 { return Ok(false); }
            let line = line.trim();
            if line == "quit" { return Ok(false); }
            match self.pos.parse_move(line) {
                Ok(mv) => {
                    self.pos.apply(mv);
                    return Ok(true);
                }
                Err(e) => {
                    debug!("rejected input {line:?}: {e}");
                    writeln!(out, "That is not a valid move!")?;
                }
            }
        }
    }
}
