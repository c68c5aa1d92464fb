use std::io::{self, BufRead, Write};

use log::{trace, warn};

use crate::board::cozy::Position;
use crate::board::Rules;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::EvalMode;

pub struct UciEngine {
    pos: Position,
    searcher: Searcher,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl UciEngine {
    pub fn new(params: SearchParams) -> Self { Self { pos: Position::startpos(), searcher: Searcher::new(params) } }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name Abbot")?;
        writeln!(out, "id author Abbot Team")?;
        writeln!(out, "option name Eval type combo default material var material var positional")?;
        writeln!(out, "uciok")
    }

    fn cmd_ucinewgame(&mut self) { self.pos = Position::startpos(); }

    fn cmd_setoption(&mut self, args: &str) {
        // setoption name Eval value positional
        let mut tokens = args.split_whitespace();
        if tokens.next() != Some("name") { return; }
        let name = tokens.next().unwrap_or_default();
        if tokens.next() != Some("value") { return; }
        let value = tokens.next().unwrap_or_default();
        if !name.eq_ignore_ascii_case("eval") {
            warn!("unknown option {name}");
            return;
        }
        match value.parse::<EvalMode>() {
            Ok(eval) => {
                let params = SearchParams { eval, ..self.searcher.params() };
                self.searcher.set_params(params);
            }
            Err(e) => warn!("{e}"),
        }
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        let parsed = match tokens.next() {
            Some("startpos") => {
                let moves: Vec<String> = tokens.skip_while(|&t| t != "moves").skip(1).map(str::to_string).collect();
                Position::set_from_start_and_moves(&moves)
            }
            Some("fen") => {
                let fen_fields: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
                let moves: Vec<String> = tokens.map(str::to_string).collect();
                Position::set_from_fen_and_moves(&fen_fields.join(" "), &moves)
            }
            _ => return,
        };
        match parsed {
            Ok(p) => self.pos = p,
            Err(e) => warn!("ignoring position command: {e}"),
        }
    }

    fn cmd_go<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let mut depth = self.searcher.params().depth;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(d) = tokens.next().and_then(|s| s.parse::<i32>().ok()) { depth = d; }
            }
        }
        let side = self.pos.side_to_move();
        let res = self.searcher.search_depth(&mut self.pos, side, depth);
        writeln!(out, "info depth {} score {} nodes {}", depth, res.score, res.nodes)?;
        match res.bestmove {
            Some(best) => writeln!(out, "bestmove {}", self.pos.move_to_uci(best)),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            trace!("uci <- {line}");
            if line.is_empty() { continue; }
            match line {
                "uci" => self.cmd_uci(out)?,
                "isready" => writeln!(out, "readyok")?,
                "ucinewgame" => self.cmd_ucinewgame(),
                "quit" => break,
                "stop" => {}
                "go" => self.cmd_go("", out)?,
                _ => {
                    if let Some(rest) = line.strip_prefix("position ") {
                        self.cmd_position(rest);
                    } else if let Some(rest) = line.strip_prefix("go ") {
                        self.cmd_go(rest, out)?;
                    } else if let Some(rest) = line.strip_prefix("setoption ") {
                        self.cmd_setoption(rest);
                    } else {
                        warn!("unknown command: {line}");
                    }
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}
