use rand::Rng;
use std::fmt;

/// A point on the playing field, in pixels.
///
/// Positions produced by the game are always multiples of the grid's cell
/// size and lie within the grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Reduce `x` modulo `dimension`, wrapping negative values around to the far
/// edge
pub(crate) fn wrap(x: i32, dimension: i32) -> i32 {
    x.rem_euclid(dimension)
}

/// The toroidal playing field: `width` × `height` pixels divided into square
/// cells of `cell_size` pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) cell_size: i32,
}

impl Grid {
    pub(crate) const fn new(width: i32, height: i32, cell_size: i32) -> Grid {
        Grid {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    pub(crate) fn wrap_position(self, pos: Position) -> Position {
        Position {
            x: wrap(pos.x, self.width),
            y: wrap(pos.y, self.height),
        }
    }

    /// The cell in the middle of the grid, where a fresh snake starts
    pub(crate) fn center(self) -> Position {
        Position {
            x: self.columns() / 2 * self.cell_size,
            y: self.rows() / 2 * self.cell_size,
        }
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }

    /// Return the column & row of the cell at `pos`, or `None` if `pos` is not
    /// a cell of this grid
    pub(crate) fn cell_index(self, pos: Position) -> Option<(u16, u16)> {
        if !self.contains(pos) {
            return None;
        }
        let column = u16::try_from(pos.x / self.cell_size).ok()?;
        let row = u16::try_from(pos.y / self.cell_size).ok()?;
        Some((column, row))
    }

    /// Pick a cell uniformly at random
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Position {
        let column = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Position {
            x: column * self.cell_size,
            y: row * self.cell_size,
        }
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let cell = self.cell_size;
        let columns = self.columns();
        (0..self.rows()).flat_map(move |row| {
            (0..columns).map(move |column| Position::new(column * cell, row * cell))
        })
    }
}
