//! Hex Core - Game engine and AI
//!
//! This crate provides the core game logic for Hex:
//! - Board geometry (skewed square grid with six-way adjacency)
//! - Connectivity checks (winner detection, longest run)
//! - Position evaluation
//! - Minimax AI with alpha-beta pruning
//! - Human vs computer game state and computer vs computer playouts

pub mod board;
pub mod connectivity;
pub mod eval;
pub mod ai;
pub mod game;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, Player, NEIGHBOR_OFFSETS};
pub use connectivity::{winner, longest_run};
pub use eval::{evaluate, RUN_WEIGHT, NEIGHBOR_WEIGHT};
pub use ai::{best_move, MinimaxAI, ScoredMove, SearchResult, SearchStats, INFINITY};
pub use game::{play_out, Game, HumanMove, Phase, PlayedMove, Playout, COMPUTER, HUMAN};
pub use config::GameConfig;
pub use error::{HexError, Result};
