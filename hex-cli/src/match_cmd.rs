//! Match command - computer vs computer
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: format_text_results(), format_json_results()

use anyhow::Result;
use clap::Args;

use hex_core::{play_out, Board, HexError, MinimaxAI, Player, Playout};

use crate::settings::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug, Default)]
pub struct MatchArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// RED search depth (defaults to --depth)
    #[arg(long)]
    pub red_depth: Option<u32>,

    /// BLUE search depth (defaults to --depth)
    #[arg(long)]
    pub blue_depth: Option<u32>,

    /// BLUE opens instead of RED
    #[arg(long)]
    pub blue_first: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs) -> Result<()> {
    let playout = play_match(&args)?;

    tracing::info!(
        "Match finished: {:?} after {} moves",
        playout.winner,
        playout.moves.len()
    );

    report_results(&playout, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_match(args: &MatchArgs) -> Result<Playout> {
    let config = args.board.resolve()?;
    let red = MinimaxAI::new(side_depth(args.red_depth, config.depth, "red")?, Player::First);
    let blue = MinimaxAI::new(side_depth(args.blue_depth, config.depth, "blue")?, Player::Second);
    let opener = if args.blue_first {
        Player::Second
    } else {
        Player::First
    };

    tracing::info!(
        "Starting match on {}x{}: RED depth={}, BLUE depth={}",
        config.size,
        config.size,
        red.depth,
        blue.depth
    );

    Ok(play_out(Board::new(config.size)?, &red, &blue, opener)?)
}

/// Per-side override of `--depth`; zero is rejected like `--depth 0`
fn side_depth(depth: Option<u32>, default: u32, side: &str) -> Result<u32, HexError> {
    match depth.unwrap_or(default) {
        0 => Err(HexError::InvalidConfig(format!("{side} depth must be > 0"))),
        depth => Ok(depth),
    }
}

fn report_results(playout: &Playout, json: bool) -> Result<()> {
    if json {
        println!("{}", format_json_results(playout)?);
    } else {
        print!("{}", format_text_results(playout));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn format_json_results(playout: &Playout) -> Result<String> {
    Ok(serde_json::to_string_pretty(playout)?)
}

fn format_text_results(playout: &Playout) -> String {
    let mut text = String::from("=== Match Result ===\n");
    let winner = playout.winner.map_or("nobody", Player::name);
    text.push_str(&format!("Winner: {} after {} moves\n", winner, playout.moves.len()));
    for (i, mv) in playout.moves.iter().enumerate() {
        text.push_str(&format!("  {:>3}. {:<4} {}\n", i + 1, mv.player.name(), mv.coord));
    }
    text.push_str(&playout.board);
    text
}

// ============================================================================
// TESTS
// ============================================================================
