//! Hex board geometry on a skewed square grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HexError, Result};

/// Player colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// RED: connects north (row 0) to south (row N-1)
    First,
    /// BLUE: connects west (column 0) to east (column N-1)
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The coordinate measured along this player's winning axis
    pub fn axis(self, coord: Coord) -> i32 {
        match self {
            Player::First => coord.row,
            Player::Second => coord.col,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::First => "RED",
            Player::Second => "BLUE",
        }
    }
}

/// State of a single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    First,
    Second,
    #[default]
    Empty,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::First => 'R',
            Cell::Second => 'B',
            Cell::Empty => '*',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::First => Cell::First,
            Player::Second => Cell::Second,
        }
    }
}

/// Board coordinate (0-indexed row, column)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Neighbor offsets (drow, dcol): the 3x3 window minus the centre,
/// (-1,-1) and (+1,+1). Row-major order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// Square N x N Hex board, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with side length `size`
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || i32::try_from(size).is_err() {
            return Err(HexError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate is on the board
    pub fn contains(&self, coord: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coord.row) && (0..n).contains(&coord.col)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.size + coord.col as usize)
    }

    /// Cell at `coord`, or `None` off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Bounds-checked read
    pub fn value_at(&self, coord: Coord) -> Result<Cell> {
        self.get(coord).ok_or(HexError::OutOfBounds {
            coord,
            size: self.size,
        })
    }

    /// Put `player`'s stone at (row, col). Off-board writes are ignored.
    pub fn place(&mut self, player: Player, row: i32, col: i32) {
        self.set(Coord::new(row, col), Cell::from(player));
    }

    /// Reset (row, col) to empty. Off-board writes are ignored.
    pub fn remove(&mut self, row: i32, col: i32) {
        self.set(Coord::new(row, col), Cell::Empty);
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// On-board neighbors of `coord` (2 at the acute corners, 3 at the
    /// obtuse corners, 6 in the interior). Empty for off-board input.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        if !self.contains(coord) {
            return Vec::new();
        }
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| Coord::new(coord.row + dr, coord.col + dc))
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// Iterate all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let n = self.size as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.get(c) == Some(Cell::Empty))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }
}

/// Rows are shifted right one space per row so the grid reads as a rhombus.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:indent$}{} ", "", i, indent = i)?;
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
