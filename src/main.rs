//! Command-line board solver
//!
//! Reads a 5x5 board file, plays the position out, and writes the winning
//! color as a single character.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use reversi::driver::GameDriver;
use reversi::io::{read_board, write_winner};
use reversi::search::MAX_DEPTH;

/// Determine the winner of a 5x5 two-color board position.
#[derive(Parser)]
#[command(name = "reversi", about = "Solve a 5x5 board position")]
struct Cli {
    /// Board file: 5 lines of 5 characters from {B, W, E}
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Destination for the single-character result
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Search depth in plies
    #[arg(long, default_value_t = MAX_DEPTH)]
    depth: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let board = read_board(&cli.input)
        .with_context(|| format!("failed to read board from {}", cli.input.display()))?;

    let result = GameDriver::with_depth(cli.depth).play_with_stats(board);

    write_winner(&cli.output, result.winner)
        .with_context(|| format!("failed to write result to {}", cli.output.display()))?;

    eprintln!(
        "winner: {} ({} turn{}{})",
        result.winner.as_char(),
        result.turns,
        if result.turns == 1 { "" } else { "s" },
        if result.passed { ", ended on a pass" } else { "" },
    );

    Ok(())
}
