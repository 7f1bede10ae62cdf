//! Core domain vocabulary for Santorini.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 5;

/// Side of the table a player sits on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Moves first; owns workers A and B.
    White,
    /// Moves second; owns workers Y and Z.
    Blue,
}

impl Color {
    /// Returns the opponent color.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Blue,
            Color::Blue => Color::White,
        }
    }

    /// Index of this color in two-element player arrays.
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Blue => 1,
        }
    }

    /// Color whose turn it is for a given turn counter.
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            Color::White
        } else {
            Color::Blue
        }
    }

    /// Worker identities owned by this color.
    pub fn worker_ids(self) -> [WorkerId; 2] {
        match self {
            Color::White => [WorkerId::A, WorkerId::B],
            Color::Blue => [WorkerId::Y, WorkerId::Z],
        }
    }

    /// Fixed starting cells, paired with [`Color::worker_ids`].
    pub fn starting_cells(self) -> [Cell; 2] {
        match self {
            Color::White => [Cell::at(3, 1), Cell::at(1, 3)],
            Color::Blue => [Cell::at(1, 1), Cell::at(3, 3)],
        }
    }
}

/// Single-letter worker identity, unique across both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(char);

impl WorkerId {
    /// First white worker.
    pub const A: WorkerId = WorkerId('A');
    /// Second white worker.
    pub const B: WorkerId = WorkerId('B');
    /// First blue worker.
    pub const Y: WorkerId = WorkerId('Y');
    /// Second blue worker.
    pub const Z: WorkerId = WorkerId('Z');

    /// All worker identities in play.
    pub const ALL: [WorkerId; 4] = [WorkerId::A, WorkerId::B, WorkerId::Y, WorkerId::Z];

    /// Looks up a worker by its letter.
    pub fn from_char(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.0 == letter)
    }

    /// The letter shown on the board.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Color that owns this worker.
    pub fn color(self) -> Color {
        if Color::White.worker_ids().contains(&self) {
            Color::White
        } else {
            Color::Blue
        }
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bounds-checked board coordinate, `(row, col)` with `(0, 0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// The center cell.
    pub const CENTER: Cell = Cell::at(2, 2);

    /// Creates a cell, rejecting coordinates outside the 5x5 grid.
    pub fn new(row: i32, col: i32) -> Result<Self, GameError> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(GameError::InvalidCoordinate { row, col })
        }
    }

    /// Constant constructor for coordinates known to be on the board.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Neighbouring cell in `direction`, or `None` when it falls off the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    /// Chebyshev distance: diagonal steps cost the same as orthogonal ones.
    pub fn chebyshev(self, other: Cell) -> u8 {
        let rows = self.row.abs_diff(other.row);
        let cols = self.col.abs_diff(other.col);
        rows.max(cols)
    }
}

#[derive(Deserialize)]
struct RawCell {
    row: i32,
    col: i32,
}

impl TryFrom<RawCell> for Cell {
    type Error = GameError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions a worker can move or build in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Up.
    N,
    /// Up and right.
    NE,
    /// Right.
    E,
    /// Down and right.
    SE,
    /// Down.
    S,
    /// Down and left.
    SW,
    /// Left.
    W,
    /// Up and left.
    NW,
}

impl Direction {
    /// `(delta_row, delta_col)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }
}

/// Height of the building on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Level {
    /// No building.
    #[default]
    Ground,
    /// One block.
    First,
    /// Two blocks.
    Second,
    /// Three blocks; standing here wins.
    Third,
    /// Capped tower, neither buildable nor walkable.
    Dome,
}

impl Level {
    /// Numeric height, with the dome counted as 4.
    pub fn height(self) -> u8 {
        match self {
            Level::Ground => 0,
            Level::First => 1,
            Level::Second => 2,
            Level::Third => 3,
            Level::Dome => 4,
        }
    }

    /// The level after one more build; a dome stays a dome.
    pub fn raised(self) -> Self {
        match self {
            Level::Ground => Level::First,
            Level::First => Level::Second,
            Level::Second => Level::Third,
            Level::Third | Level::Dome => Level::Dome,
        }
    }

    /// True for the capped level.
    pub fn is_dome(self) -> bool {
        self == Level::Dome
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.height())
    }
}

/// What a worker intends to do with a destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Step onto the cell.
    Move,
    /// Raise the building on the cell.
    Build,
}
