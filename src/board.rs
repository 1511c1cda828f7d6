use serde::Serialize;

use crate::error::GameError;
use crate::types::{Cell, Color};

const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Square go board stored row-major: `rows[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty `size`x`size` board. Any positive size is accepted.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }

        Ok(Self {
            rows: vec![vec![Cell::Empty; size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size()
    }

    /// Returns `Cell::Empty` for coordinates off the board.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Cell::Empty)
    }

    /// Writes one cell. Off-board coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.get(x, y).color()
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != Cell::Empty
    }

    /// Orthogonal neighbours of `(x, y)` that lie on the board.
    pub fn neighbors_of(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.in_bounds(nx, ny).then_some((nx, ny))
        })
    }

    /// Number of stones of each color, `(black, white)`.
    pub fn count(&self) -> (usize, usize) {
        self.rows
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }
}
