//! Game state: turn order, move application and game-over detection

use serde::{Deserialize, Serialize};

use crate::ai::{MinimaxAI, ScoredMove};
use crate::board::{Board, Cell, Coord, Player};
use crate::config::GameConfig;
use crate::connectivity::winner;
use crate::error::{HexError, Result};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Whose turn it is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

/// What happened to a human move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanMove {
    Placed,
    /// The cell already holds a stone; the turn is forfeited
    Occupied,
    /// The coordinate is off the board; the turn is forfeited
    OutOfBounds,
}

/// A move as it was played
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub player: Player,
    pub coord: Coord,
}

/// The human plays RED (`First`), the computer BLUE (`Second`).
pub const HUMAN: Player = Player::First;
pub const COMPUTER: Player = Player::Second;

// ============================================================================
// GAME
// ============================================================================

/// Human vs computer game
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    ai: MinimaxAI,
    phase: Phase,
    /// The computer's own previous move, (0, 0) before its first; seeds its
    /// search
    search_seed: Coord,
    winner: Option<Player>,
    history: Vec<PlayedMove>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let phase = if config.human_first {
            Phase::PlayerTurn
        } else {
            Phase::ComputerTurn
        };
        Ok(Self {
            board: Board::new(config.size)?,
            ai: MinimaxAI::new(config.depth, COMPUTER),
            phase,
            search_seed: Coord::default(),
            winner: None,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn search_seed(&self) -> Coord {
        self.search_seed
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Play RED at (row, col).
    ///
    /// An occupied or off-board cell forfeits the turn without touching the
    /// board. Either way the turn passes to the computer unless RED has won.
    pub fn human_move(&mut self, row: i32, col: i32) -> Result<HumanMove> {
        if self.phase != Phase::PlayerTurn {
            return Err(HexError::OutOfTurn);
        }

        let coord = Coord::new(row, col);
        let outcome = match self.board.get(coord) {
            None => HumanMove::OutOfBounds,
            Some(Cell::Empty) => {
                self.apply(HUMAN, coord);
                HumanMove::Placed
            }
            Some(_) => HumanMove::Occupied,
        };

        if outcome != HumanMove::Placed {
            tracing::info!("human forfeits turn: {:?} at {}", outcome, coord);
        }
        self.end_turn(Phase::ComputerTurn);
        Ok(outcome)
    }

    /// Search for and play BLUE's move.
    pub fn computer_move(&mut self) -> Result<ScoredMove> {
        if self.phase != Phase::ComputerTurn {
            return Err(HexError::OutOfTurn);
        }

        let mv = self.ai.choose_move(&self.board, self.search_seed)?;
        self.apply(COMPUTER, mv.coord);
        self.search_seed = mv.coord;
        self.end_turn(Phase::PlayerTurn);
        Ok(mv)
    }

    fn apply(&mut self, player: Player, coord: Coord) {
        self.board.place(player, coord.row, coord.col);
        self.history.push(PlayedMove { player, coord });
    }

    fn end_turn(&mut self, next: Phase) {
        self.winner = winner(&self.board);
        self.phase = match self.winner {
            Some(player) => {
                tracing::info!("{} wins after {} moves", player.name(), self.history.len());
                Phase::GameOver
            }
            None => next,
        };
    }
}

// ============================================================================
// COMPUTER VS COMPUTER
// ============================================================================

/// Outcome of a computer vs computer game
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Playout {
    pub size: usize,
    pub winner: Option<Player>,
    pub moves: Vec<PlayedMove>,
    /// Final position, one rendered row per line
    pub board: String,
}

/// Play `red` against `blue` from `board` until someone connects.
///
/// Each side's search is seeded with its own previous move, starting at (0, 0).
pub fn play_out(
    mut board: Board,
    red: &MinimaxAI,
    blue: &MinimaxAI,
    first_to_move: Player,
) -> Result<Playout> {
    let mut to_move = first_to_move;
    let mut red_seed = Coord::default();
    let mut blue_seed = Coord::default();
    let mut moves = Vec::new();
    let mut result = winner(&board);

    while result.is_none() && !board.is_full() {
        let (ai, seed) = match to_move {
            Player::First => (red, &mut red_seed),
            Player::Second => (blue, &mut blue_seed),
        };
        let mv = ai.choose_move(&board, *seed)?;
        *seed = mv.coord;
        board.place(to_move, mv.coord.row, mv.coord.col);
        tracing::debug!("{} plays {} (score {})", to_move.name(), mv.coord, mv.score);

        moves.push(PlayedMove {
            player: to_move,
            coord: mv.coord,
        });
        to_move = to_move.opponent();
        result = winner(&board);
    }

    Ok(Playout {
        size: board.size(),
        winner: result,
        moves,
        board: board.to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game() -> Game {
        Game::new(&GameConfig::default().with_size(4).with_depth(2)).unwrap()
    }

    #[test]
    fn test_new_game_starts_with_player() {
        let game = small_game();
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.winner(), None);
        assert_eq!(game.board().empty_cells().len(), 16);
    }

    #[test]
    fn test_computer_first() {
        let config = GameConfig {
            human_first: false,
            ..GameConfig::default().with_size(3).with_depth(1)
        };
        let mut game = Game::new(&config).unwrap();
        assert_eq!(game.phase(), Phase::ComputerTurn);
        assert_eq!(game.human_move(0, 0), Err(HexError::OutOfTurn));
        game.computer_move().unwrap();
        assert_eq!(game.phase(), Phase::PlayerTurn);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Game::new(&GameConfig::default().with_size(0)).is_err());
        assert!(Game::new(&GameConfig::default().with_depth(0)).is_err());
    }

    #[test]
    fn test_human_then_computer() {
        let mut game = small_game();
        assert_eq!(game.human_move(1, 1), Ok(HumanMove::Placed));
        assert_eq!(game.board().get(Coord::new(1, 1)), Some(Cell::First));
        assert_eq!(game.search_seed(), Coord::new(0, 0));
        assert_eq!(game.phase(), Phase::ComputerTurn);
        assert_eq!(game.human_move(2, 2), Err(HexError::OutOfTurn));

        let mv = game.computer_move().unwrap();
        assert_eq!(game.board().get(mv.coord), Some(Cell::Second));
        assert_eq!(game.search_seed(), mv.coord);
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_search_seed_ignores_human_moves() {
        let mut game = small_game();
        game.human_move(3, 3).unwrap();
        let first = game.computer_move().unwrap();
        let target = game.board().empty_cells()[0];
        game.human_move(target.row, target.col).unwrap();
        assert_eq!(game.search_seed(), first.coord);

        let second = game.computer_move().unwrap();
        assert_eq!(game.search_seed(), second.coord);
    }

    #[test]
    fn test_occupied_cell_forfeits_turn() {
        let mut game = small_game();
        game.human_move(0, 0).unwrap();
        let mv = game.computer_move().unwrap();
        let before = game.board().clone();

        assert_eq!(game.human_move(mv.coord.row, mv.coord.col), Ok(HumanMove::Occupied));
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), Phase::ComputerTurn);
    }

    #[test]
    fn test_out_of_bounds_forfeits_turn() {
        let mut game = small_game();
        assert_eq!(game.human_move(4, 0), Ok(HumanMove::OutOfBounds));
        assert_eq!(game.human_move(0, 0), Err(HexError::OutOfTurn));
        assert_eq!(game.board().empty_cells().len(), 16);
        assert_eq!(game.phase(), Phase::ComputerTurn);
    }

    #[test]
    fn test_human_win_ends_game() {
        let mut game = Game::new(&GameConfig::default().with_size(2).with_depth(1)).unwrap();
        game.human_move(0, 0).unwrap();
        // Every reply scores 5 for BLUE, so the first empty cell is chosen
        let mv = game.computer_move().unwrap();
        assert_eq!(mv.coord, Coord::new(0, 1));

        assert_eq!(game.human_move(1, 0), Ok(HumanMove::Placed));
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.winner(), Some(Player::First));
        assert_eq!(game.computer_move(), Err(HexError::OutOfTurn));
    }

    #[test]
    fn test_play_out_finishes_with_winner() {
        let board = Board::new(4).unwrap();
        let red = MinimaxAI::new(2, Player::First);
        let blue = MinimaxAI::new(2, Player::Second);
        let playout = play_out(board, &red, &blue, Player::First).unwrap();

        assert!(playout.winner.is_some());
        assert!(playout.moves.len() <= 16);
        assert_eq!(playout.moves[0].player, Player::First);
        assert!(playout.moves.windows(2).all(|w| w[0].player != w[1].player));
    }

    #[test]
    fn test_play_out_is_deterministic() {
        let red = MinimaxAI::new(2, Player::First);
        let blue = MinimaxAI::new(1, Player::Second);
        let a = play_out(Board::new(3).unwrap(), &red, &blue, Player::Second).unwrap();
        let b = play_out(Board::new(3).unwrap(), &red, &blue, Player::Second).unwrap();
        assert_eq!(a.moves, b.moves);
        assert_eq!(a.winner, b.winner);
    }

    #[test]
    fn test_play_out_already_won() {
        let mut board = Board::new(3).unwrap();
        for i in 0..3 {
            board.place(Player::Second, i, 1);
            board.place(Player::Second, 1, i);
        }
        let ai = MinimaxAI::new(1, Player::First);
        let playout = play_out(board, &ai, &ai, Player::First).unwrap();
        assert_eq!(playout.winner, Some(Player::Second));
        assert!(playout.moves.is_empty());
    }
}
