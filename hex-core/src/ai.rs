//! Minimax search with alpha-beta pruning

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Coord, Player};
use crate::error::{HexError, Result};
use crate::eval::evaluate;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bound used for the initial alpha-beta window
pub const INFINITY: i32 = i32::MAX;

// ============================================================================
// TYPES
// ============================================================================

/// A coordinate together with the score the search assigned to it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub coord: Coord,
    pub score: i32,
}

impl ScoredMove {
    pub const fn new(coord: Coord, score: i32) -> Self {
        Self { coord, score }
    }
}

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Leaves scored by the evaluator
    pub leaves: u64,
    /// Candidate loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Result of a top-level search
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    pub best: ScoredMove,
    pub stats: SearchStats,
}

// ============================================================================
// SCOPED PLACEMENT
// ============================================================================

/// A hypothetical stone that is taken back when the guard goes out of scope,
/// so every exit from a candidate loop (including a cutoff) restores the board.
struct PlacedStone<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> PlacedStone<'a> {
    fn new(board: &'a mut Board, player: Player, coord: Coord) -> Self {
        board.place(player, coord.row, coord.col);
        Self { board, coord }
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove(self.coord.row, self.coord.col);
    }
}

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Fixed-depth minimax player. `Second` (BLUE) maximizes, `First` (RED)
/// minimizes.
#[derive(Clone, Copy, Debug)]
pub struct MinimaxAI {
    pub depth: u32,
    pub player: Player,
}

impl MinimaxAI {
    pub fn new(depth: u32, player: Player) -> Self {
        Self { depth, player }
    }

    /// Search a private copy of `board` and return the chosen move.
    ///
    /// `last_move` is the move that produced `board`; it is only scored when
    /// the search bottoms out immediately.
    pub fn search(&self, board: &Board, last_move: Coord) -> SearchResult {
        let mut scratch = board.clone();
        let mut stats = SearchStats::default();
        let best = alpha_beta(
            &mut scratch,
            self.depth,
            self.player,
            last_move,
            -INFINITY,
            INFINITY,
            &mut stats,
        );

        tracing::debug!(
            player = self.player.name(),
            depth = self.depth,
            nodes = stats.nodes,
            leaves = stats.leaves,
            cutoffs = stats.cutoffs,
            "search chose {} with score {}",
            best.coord,
            best.score
        );

        SearchResult { best, stats }
    }

    /// Like [`search`](Self::search), but fails when there is no empty cell
    /// to play or the search could not pick one (depth 0).
    pub fn choose_move(&self, board: &Board, last_move: Coord) -> Result<ScoredMove> {
        if board.is_full() {
            return Err(HexError::NoMoveAvailable);
        }
        let best = self.search(board, last_move).best;
        match board.get(best.coord) {
            Some(Cell::Empty) => Ok(best),
            _ => Err(HexError::NoMoveAvailable),
        }
    }
}

// ============================================================================
// ALPHA-BETA
// ============================================================================

/// Minimax with alpha-beta pruning over every empty cell of `board`.
///
/// Candidates are scanned in row-major order and only a strictly better score
/// replaces the current best, so ties go to the earliest cell. At a leaf
/// (`depth == 0` or no empty cell) the returned move is `last_move` scored
/// for the side that just moved. Interior nodes return the winning child's
/// record unchanged, so the coordinate that reaches the caller is the one
/// scored at the leaf of the principal line.
///
/// Stones are placed and taken back in place; `board` is unchanged on return.
pub fn best_move(
    board: &mut Board,
    depth: u32,
    player: Player,
    last_move: Coord,
    alpha: i32,
    beta: i32,
) -> ScoredMove {
    alpha_beta(
        board,
        depth,
        player,
        last_move,
        alpha,
        beta,
        &mut SearchStats::default(),
    )
}

fn alpha_beta(
    board: &mut Board,
    depth: u32,
    player: Player,
    last_move: Coord,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> ScoredMove {
    stats.nodes += 1;

    let candidates = board.empty_cells();
    if depth == 0 || candidates.is_empty() {
        stats.leaves += 1;
        return ScoredMove::new(last_move, evaluate(board, player.opponent(), last_move));
    }

    let mut best = match player {
        Player::Second => ScoredMove::new(last_move, -INFINITY),
        Player::First => ScoredMove::new(last_move, INFINITY),
    };

    for coord in candidates {
        let mut placed = PlacedStone::new(board, player, coord);
        let reply = alpha_beta(
            &mut placed,
            depth - 1,
            player.opponent(),
            coord,
            alpha,
            beta,
            stats,
        );
        drop(placed);

        match player {
            Player::Second => {
                if reply.score > best.score {
                    best = reply;
                }
                alpha = alpha.max(reply.score);
            }
            Player::First => {
                if reply.score < best.score {
                    best = reply;
                }
                beta = beta.min(reply.score);
            }
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

// ============================================================================
// TESTS
// ============================================================================
