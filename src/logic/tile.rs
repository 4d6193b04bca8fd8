use core::fmt;

use serde::{Deserialize, Serialize};

use super::acquire_constants::{BOARD_COLS, BOARD_ROWS};

/// A board coordinate. `x` is the column, `y` the row, both zero-based.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub y: usize,
    pub x: usize,
}

impl Tile {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(&self) -> bool {
        self.x < BOARD_COLS && self.y < BOARD_ROWS
    }

    /// Every tile on the board, row by row.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..BOARD_ROWS).flat_map(|y| (0..BOARD_COLS).map(move |x| Tile::new(x, y)))
    }

    /// The 4-directional neighbours that lie on the board.
    pub fn neighbors(&self) -> impl Iterator<Item = Tile> {
        let Tile { x, y } = *self;
        let left = x.checked_sub(1).map(|x| Tile::new(x, y));
        let right = Some(Tile::new(x + 1, y));
        let up = y.checked_sub(1).map(|y| Tile::new(x, y));
        let down = Some(Tile::new(x, y + 1));

        [left, right, up, down]
            .into_iter()
            .flatten()
            .filter(Tile::is_on_board)
    }
}

impl From<(usize, usize)> for Tile {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // column is a number, row is a letter
        write!(f, "{}-{}", self.x + 1, (b'A' + self.y as u8) as char)
    }
}
