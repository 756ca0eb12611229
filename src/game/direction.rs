use super::grid::{Grid, Position};
use enum_map::Enum;
use rand::Rng;

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit vector for this direction, with y increasing downwards
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the cell one step from `pos` in this direction, wrapping around
    /// the edges of `grid`
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Position {
        let (dx, dy) = self.delta();
        grid.wrap_position(Position {
            x: pos.x + dx * grid.cell_size,
            y: pos.y + dy * grid.cell_size,
        })
    }

    /// Pick one of the four directions uniformly at random
    pub(crate) fn random<R: Rng>(rng: &mut R) -> Direction {
        Direction::from_usize(rng.random_range(0..Direction::LENGTH))
    }
}
