use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use driftmine_core::{CellCount, Coord, Coord2, Difficulty, GameConfig, GameEngine};
use web_time::{SystemTime, UNIX_EPOCH};

mod logger;
mod render;

/// Minesweeper where the mines move while you play.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of a square board
    #[arg(short, long, default_value_t = 10)]
    size: Coord,

    /// Number of rows, overrides --size
    #[arg(long)]
    rows: Option<Coord>,

    /// Number of columns, overrides --size
    #[arg(long)]
    cols: Option<Coord>,

    /// Mine density: easy, medium, hard or extreme
    #[arg(short, long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Exact mine count, overrides --difficulty
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Mines move every this many turns
    #[arg(short, long, default_value_t = 3)]
    interval: u32,

    /// Seed for mine placement, defaults to the clock
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON snapshot after every move instead of the board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn game_config(&self) -> driftmine_core::Result<GameConfig> {
        let size = (
            self.rows.unwrap_or(self.size),
            self.cols.unwrap_or(self.size),
        );
        match self.mines {
            Some(mines) => GameConfig::new(size, mines, self.interval),
            None => GameConfig::from_difficulty(size, self.difficulty, self.interval),
        }
    }
}

enum Command {
    Click(Coord2),
    Restart,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    let command = match first {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" => Command::Restart,
        "h" | "help" | "?" => Command::Help,
        row => {
            let row = row.parse().ok()?;
            let col = words.next()?.parse().ok()?;
            Command::Click((row, col))
        }
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn show(out: &mut impl Write, engine: &GameEngine, json: bool) -> Result<()> {
    let snapshot = engine.snapshot();
    if json {
        serde_json::to_writer(&mut *out, &snapshot).context("failed to encode snapshot")?;
        writeln!(out)?;
    } else {
        render::render_board(out, &snapshot)?;
    }
    Ok(())
}

const HELP: &str = "commands: <row> <col> to reveal, new, help, quit";

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.verbosity.log_level_filter())?;

    let config = args.game_config().context("invalid game configuration")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut engine = GameEngine::new(config, seed)?;
    log::info!("Starting {:?} with seed {}", config, engine.placer().seed());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Ready to play! {HELP}")?;
    show(&mut out, &engine, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        let Some(command) = parse_command(&line) else {
            writeln!(out, "{HELP}")?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Restart => {
                engine.restart()?;
                writeln!(out, "Ready to play!")?;
                show(&mut out, &engine, args.json)?;
            }
            Command::Click(coords) => {
                let event = engine.click(coords)?;
                if !event.has_update() {
                    log::debug!("Ignored click at {:?}", coords);
                    continue;
                }
                if let Some(message) = render::event_message(event) {
                    writeln!(out, "{message}")?;
                }
                show(&mut out, &engine, args.json)?;
                if engine.is_finished() {
                    writeln!(out, "type new to play again or quit to leave")?;
                }
            }
        }
    }

    Ok(())
}
