//! Win detection and run-length measurement over connected stone groups

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, Coord, Player};

/// Check whether either player has joined their two edges.
///
/// RED (`First`) needs a chain from row 0 to row N-1, BLUE (`Second`) from
/// column 0 to column N-1. Both cannot hold at once; `First` is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::First, Player::Second]
        .into_iter()
        .find(|&player| has_connection(board, player))
}

/// Depth-first search from every seeded stone on `player`'s starting edge.
pub fn has_connection(board: &Board, player: Player) -> bool {
    let n = board.size() as i32;
    let stone = Cell::from(player);
    let edge = |i: i32| match player {
        Player::First => Coord::new(0, i),
        Player::Second => Coord::new(i, 0),
    };

    let mut frontier: Vec<Coord> = (0..n)
        .map(edge)
        .filter(|&c| board.get(c) == Some(stone))
        .collect();
    let mut visited = FxHashSet::default();

    while let Some(next) = frontier.pop() {
        if !visited.insert(next) {
            continue;
        }
        if player.axis(next) == n - 1 {
            return true;
        }
        frontier.extend(
            board
                .neighbors(next)
                .into_iter()
                .filter(|&c| board.get(c) == Some(stone) && !visited.contains(&c)),
        );
    }

    false
}

/// Largest span along `player`'s winning axis covered by a single connected
/// group of their stones. Zero when the player has no stones.
pub fn longest_run(board: &Board, player: Player) -> i32 {
    let stone = Cell::from(player);
    let mut unvisited: FxHashSet<Coord> = board
        .coords()
        .filter(|&c| board.get(c) == Some(stone))
        .collect();

    let mut longest = 0;
    loop {
        let Some(start) = unvisited.iter().next().copied() else {
            break;
        };
        unvisited.remove(&start);
        let mut work = vec![start];
        let mut lowest = player.axis(start);
        let mut highest = lowest;

        while let Some(current) = work.pop() {
            let pos = player.axis(current);
            lowest = lowest.min(pos);
            highest = highest.max(pos);

            for neighbor in board.neighbors(current) {
                if unvisited.remove(&neighbor) {
                    work.push(neighbor);
                }
            }
        }

        longest = longest.max(highest - lowest + 1);
    }

    longest
}
