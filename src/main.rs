use std::io::{self, Write};

use abbot::board::cozy::Position;
use abbot::play::{render, Game};
use abbot::search::alphabeta::{SearchParams, Searcher, DEFAULT_DEPTH};
use abbot::uci::UciEngine;
use abbot::{EvalMode, Rules, Side};
use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a fixed-depth alpha-beta engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug, Clone, Copy)]
struct EngineArgs {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    depth: i32,

    /// Position evaluator
    #[arg(long, value_enum, default_value_t = EvalMode::Material)]
    eval: EvalMode,
}

impl From<EngineArgs> for SearchParams {
    fn from(a: EngineArgs) -> Self { SearchParams { depth: a.depth, eval: a.eval } }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against the engine on the terminal
    Play {
        /// Your side: 'w' for white, 'b' for black
        #[arg(long, default_value = "w")]
        side: String,

        /// Starting FEN position
        #[arg(long)]
        fen: Option<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Speak UCI on stdin/stdout
    Uci {
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Print the engine's move for one position
    Bestmove {
        /// FEN string or "startpos"
        #[arg(value_name = "FEN", default_value = "startpos")]
        fen: String,

        /// Print the full search result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Serialize)]
struct Report {
    fen: String,
    side: Side,
    params: SearchParams,
    bestmove: Option<String>,
    score: i32,
    nodes: u64,
}

fn load_position(fen: Option<&str>) -> Result<Position> {
    match fen {
        None | Some("startpos") => Ok(Position::startpos()),
        Some(f) => Position::from_fen(f).with_context(|| "could not set up the starting position".to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Play { side, fen, engine } => {
            let human: Side = side.parse()?;
            let mut pos = load_position(fen.as_deref())?;
            let mut searcher = Searcher::new(engine.into());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Game::new(&mut pos, human, &mut searcher).run(stdin.lock(), &mut stdout)?;
        }
        Command::Uci { engine } => {
            let mut uci = UciEngine::new(engine.into());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            uci.run_loop(stdin.lock(), &mut stdout)?;
        }
        Command::Bestmove { fen, json, engine } => {
            let mut pos = load_position(Some(fen.as_str()))?;
            let params: SearchParams = engine.into();
            let side = pos.side_to_move();
            let res = Searcher::new(params).search(&mut pos, side);
            let res = res.map_move(|m| pos.move_to_uci(m));
            let mut out = io::stdout().lock();
            if json {
                let report = Report { fen: pos.fen(), side, params, bestmove: res.bestmove, score: res.score, nodes: res.nodes };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", render(&pos))?;
                writeln!(out, "bestmove {}", res.bestmove.as_deref().unwrap_or("0000"))?;
            }
        }
    }
    Ok(())
}
