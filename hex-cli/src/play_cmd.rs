//! Play command - human (RED) vs computer (BLUE) on the console
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session() - the PLAYER -> COMPUTER -> GAME_OVER loop
//! - Level 3: player_turn(), computer_turn(), game_over()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use hex_core::{Game, GameConfig, HumanMove, Phase, Player};

use crate::settings::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug, Default)]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Let the computer open the game
    #[arg(long)]
    pub computer_first: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command against stdin/stdout
pub fn run(args: PlayArgs) -> Result<()> {
    let mut config = args.board.resolve()?;
    if args.computer_first {
        config.human_first = false;
    }

    tracing::info!(
        "Starting game: {}x{} board, depth={}",
        config.size,
        config.size,
        config.depth
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

// ============================================================================
// LEVEL 2 - SESSION
// ============================================================================

/// Drive one game over `input`/`out`.
///
/// Returns the winner, or `None` if the input ran out first.
pub fn play_session<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    mut out: W,
) -> Result<Option<Player>> {
    let mut game = Game::new(config)?;

    writeln!(out, "Welcome to HEX!")?;
    if config.human_first {
        writeln!(out, "You (the human player) will attempt to go from North to South as the RED player and you will go FIRST")?;
    } else {
        writeln!(out, "You (the human player) will attempt to go from North to South as the RED player and BLUE will go FIRST")?;
    }
    writeln!(out, "Your enemy is the BLUE player who will attempt to go from West to East")?;
    write!(out, "{}", game.board())?;

    loop {
        match game.phase() {
            Phase::PlayerTurn => {
                if !player_turn(&mut game, &mut input, &mut out)? {
                    writeln!(out, "No more input. Goodbye!")?;
                    return Ok(None);
                }
            }
            Phase::ComputerTurn => computer_turn(&mut game, &mut out)?,
            Phase::GameOver => {
                game_over(&game, &mut out)?;
                return Ok(game.winner());
            }
        }
    }
}

// ============================================================================
// LEVEL 3 - TURNS
// ============================================================================

/// Returns false when input is exhausted
fn player_turn<R: BufRead, W: Write>(game: &mut Game, input: &mut R, out: &mut W) -> Result<bool> {
    writeln!(out, "Enter a coordinate please!")?;
    let Some((row, col)) = read_coordinate(input, out)? else {
        return Ok(false);
    };

    match game.human_move(row, col)? {
        HumanMove::Placed => write!(out, "{}", game.board())?,
        HumanMove::Occupied => {
            writeln!(out, "That index is currently occupied. Skipping your turn.")?
        }
        HumanMove::OutOfBounds => {
            writeln!(out, "That index is off the board. Skipping your turn.")?
        }
    }

    if game.phase() == Phase::ComputerTurn {
        writeln!(out, "AI TURN IS STARTING!")?;
    }
    Ok(true)
}

fn computer_turn<W: Write>(game: &mut Game, out: &mut W) -> Result<()> {
    writeln!(out, "BLUE HAS STARTED TO SEARCH!")?;
    let mv = game.computer_move()?;
    writeln!(
        out,
        "Blue moving at ({}, {}) score = {}",
        mv.coord.row, mv.coord.col, mv.score
    )?;
    write!(out, "{}", game.board())?;
    writeln!(out, "BLUE's SEARCH IS DONE!")?;
    Ok(())
}

fn game_over<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    writeln!(out, "Game is Over!")?;
    if let Some(player) = game.winner() {
        writeln!(out, "{} wins!", player.name())?;
    }
    write!(out, "{}", game.board())?;
    Ok(())
}

// ============================================================================
// LEVEL 4 - INPUT
// ============================================================================

/// Read lines until one holds two integers. `None` on end of input.
fn read_coordinate<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<(i32, i32)>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_coordinate(&line) {
            Some(coord) => return Ok(Some(coord)),
            None => writeln!(out, "Please enter two integers: <row> <col>")?,
        }
    }
}

fn parse_coordinate(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((row, col))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(config: &GameConfig, script: &str) -> (Option<Player>, String) {
        let mut out = Vec::new();
        let winner = play_session(config, Cursor::new(script), &mut out).unwrap();
        (winner, String::from_utf8(out).unwrap())
    }

    fn tiny() -> GameConfig {
        GameConfig::default().with_size(2).with_depth(1)
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("3 4\n"), Some((3, 4)));
        assert_eq!(parse_coordinate("  -1   7 "), Some((-1, 7)));
        assert_eq!(parse_coordinate("3"), None);
        assert_eq!(parse_coordinate("a b"), None);
        assert_eq!(parse_coordinate("1 2 3"), None);
    }

    #[test]
    fn test_red_wins() {
        // BLUE answers (0,0) with (0,1); (1,0) then joins RED's edges
        let (winner, output) = run_script(&tiny(), "0 0\n1 0\n");
        assert_eq!(winner, Some(Player::First));
        assert!(output.starts_with("Welcome to HEX!\n"));
        assert!(output.contains("AI TURN IS STARTING!"));
        assert!(output.contains("Blue moving at (0, 1) score = 5"));
        assert!(output.contains("BLUE's SEARCH IS DONE!"));
        assert!(output.ends_with("Game is Over!\nRED wins!\n0 RB\n 1 R*\n"));
    }

    #[test]
    fn test_occupied_cell_skips_turn() {
        let (winner, output) = run_script(&tiny(), "0 0\n0 1\n");
        assert!(output.contains("That index is currently occupied. Skipping your turn."));
        // BLUE gets two moves in a row and joins (0,1)-(1,0)
        assert_eq!(winner, Some(Player::Second));
        assert!(output.contains("BLUE wins!"));
    }

    #[test]
    fn test_off_board_skips_turn() {
        let (_, output) = run_script(&tiny(), "5 5\n");
        assert!(output.contains("That index is off the board. Skipping your turn."));
        assert!(output.contains("BLUE HAS STARTED TO SEARCH!"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let (winner, output) = run_script(&tiny(), "hello\n0 0\n1 0\n");
        assert!(output.contains("Please enter two integers: <row> <col>"));
        assert_eq!(winner, Some(Player::First));
    }

    #[test]
    fn test_end_of_input() {
        let (winner, output) = run_script(&tiny(), "");
        assert_eq!(winner, None);
        assert!(output.contains("Enter a coordinate please!"));
        assert!(output.ends_with("No more input. Goodbye!\n"));
    }

    #[test]
    fn test_computer_first() {
        let config = GameConfig {
            human_first: false,
            ..tiny()
        };
        let (_, output) = run_script(&config, "");
        assert!(output.contains("BLUE will go FIRST"));
        assert!(output.contains("Blue moving at (0, 0)"));
    }
}
