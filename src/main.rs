//! Connect6 engine command line.
//!
//! ## Usage
//!
//! - `connect6` - Read a transcript on stdin, print the move on stdout
//! - `connect6 decide --input Con6Input.txt --output Con6Output.txt`
//! - `connect6 selfplay --seed 3` - Watch the engine play itself
//!
//! Logs go to stderr; set `RUST_LOG=debug` for search statistics.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect6::policy::{EngineConfig, decide};
use connect6::selfplay::play_game;
use connect6::transcript::parse;

/// Connect6: a two-stone-per-turn six-in-a-row engine
#[derive(Parser)]
#[command(name = "connect6")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a move transcript and print the engine's move
    Decide {
        /// Transcript file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the move (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Play a game engine against engine
    Selfplay {
        /// Seed for the random opening stones
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Random stones per side after the center opening
        #[arg(long, default_value_t = 1)]
        opening: usize,
        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// Search time budget in milliseconds
    #[arg(long)]
    time_ms: Option<u64>,
    /// Candidates tried for each stone of a ply
    #[arg(long)]
    candidates: Option<usize>,
    /// Search depth in turns
    #[arg(long)]
    depth: Option<u32>,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(ms) = self.time_ms {
            config.time_budget = Duration::from_millis(ms);
        }
        if let Some(cap) = self.candidates {
            config.candidate_cap = cap;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Decide {
            input,
            output,
            engine,
        }) => run_decide(input, output, &engine.config()),
        Some(Commands::Selfplay {
            seed,
            opening,
            engine,
        }) => {
            run_selfplay(seed, opening, &engine.config());
            Ok(())
        }
        None => run_decide(None, None, &EngineConfig::default()),
    }
}

fn run_decide(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &EngineConfig,
) -> Result<()> {
    let text = match &input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            text
        }
    };

    let game = parse(&text).context("invalid transcript")?;
    let play = decide(&game, config).context("no empty cell left to play")?;
    let line = format!("{play}\n");

    match &output {
        Some(path) => fs::write(path, line)
            .with_context(|| format!("failed to write move to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(line.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn run_selfplay(seed: u64, opening: usize, config: &EngineConfig) {
    println!("Connect6 self-play, seed {seed}\n");

    let summary = play_game(config, seed, opening);
    let turns = summary.moves.iter().zip(&summary.snapshots);
    for (turn, ((color, play), board)) in turns.enumerate() {
        println!("{:>3}. {color:<5} {play}", turn + 1);
        println!("{board}");
    }
    match summary.winner {
        Some(color) => println!("{color} wins after {} turns", summary.turns),
        None => println!("board full after {} turns, no winner", summary.turns),
    }
}
