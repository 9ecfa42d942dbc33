//! Position evaluation

use crate::board::{Board, Cell, Coord, Player};
use crate::connectivity::longest_run;

/// Weight applied to the longest run along the player's axis
pub const RUN_WEIGHT: i32 = 5;

/// Bonus per friendly stone around the last move
pub const NEIGHBOR_WEIGHT: i32 = 1;

/// Score `board` for `player`, given the move that produced it.
///
/// Higher is better for `player`. Used as the leaf value of the search.
pub fn evaluate(board: &Board, player: Player, last_move: Coord) -> i32 {
    let stone = Cell::from(player);
    let friendly = board
        .neighbors(last_move)
        .into_iter()
        .filter(|&c| board.get(c) == Some(stone))
        .count() as i32;

    longest_run(board, player) * RUN_WEIGHT + friendly * NEIGHBOR_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(5).unwrap();
        assert_eq!(evaluate(&board, Player::First, Coord::new(2, 2)), 0);
        assert_eq!(evaluate(&board, Player::Second, Coord::new(0, 0)), 0);
    }

    #[test]
    fn test_evaluate_combines_run_and_neighbors() {
        let mut board = Board::new(5).unwrap();
        board.place(Player::First, 1, 2);
        board.place(Player::First, 2, 2);
        board.place(Player::First, 3, 1);
        board.place(Player::Second, 2, 1);
        // run: rows 1..=3 in one group -> 3 * 5
        // neighbors of (2,2): (1,2), (3,1) are First, (2,1) is Second
        assert_eq!(evaluate(&board, Player::First, Coord::new(2, 2)), 17);
        // Second: single stone, neighbors of (2,2) held by Second: (2,1)
        assert_eq!(evaluate(&board, Player::Second, Coord::new(2, 2)), 6);
    }

    #[test]
    fn test_evaluate_off_board_last_move() {
        let mut board = Board::new(3).unwrap();
        board.place(Player::Second, 0, 0);
        board.place(Player::Second, 0, 1);
        assert_eq!(evaluate(&board, Player::Second, Coord::new(-1, 5)), 10);
    }
}
