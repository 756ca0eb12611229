use super::grid::{Grid, Position};
use crate::consts;
use crate::render::{Drawable, Surface};
use rand::Rng;
use ratatui::style::Color;
use std::collections::HashSet;
use thiserror::Error;

/// The food that the snake is chasing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Apple {
    position: Position,
}

impl Apple {
    pub(crate) fn new(position: Position) -> Apple {
        Apple { position }
    }

    /// Pick a random cell of `grid` that is not in `forbidden`.
    ///
    /// Cells are sampled uniformly until one is found outside of `forbidden`;
    /// the apple itself is not moved.  Use [`Apple::place()`] to move it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if every cell of the grid is forbidden.
    pub(crate) fn relocate<R: Rng>(
        grid: Grid,
        forbidden: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Position, GridFull> {
        if grid.positions().all(|p| forbidden.contains(&p)) {
            return Err(GridFull);
        }
        loop {
            let pos = grid.random_cell(rng);
            if !forbidden.contains(&pos) {
                return Ok(pos);
            }
        }
    }

    pub(crate) fn place(&mut self, position: Position) {
        self.position = position;
    }
}

impl Drawable for Apple {
    fn position(&self) -> Position {
        self.position
    }

    fn color(&self) -> Color {
        consts::APPLE_COLOR
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.draw_cell(self.position, self.color());
    }
}

/// Returned when there is no free cell left to put the apple in
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left on the grid for the apple")]
pub(crate) struct GridFull;
