use super::direction::Direction;
use super::grid::{Grid, Position};
use crate::consts;
use crate::render::{Drawable, Surface};
use rand::Rng;
use ratatui::style::Color;
use std::collections::{HashSet, VecDeque};

/// The player-controlled snake
///
/// All positions are in pixels relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    grid: Grid,

    /// The cells occupied by the snake, head first
    pub(super) positions: VecDeque<Position>,

    /// The number of cells the snake should occupy after moving
    pub(super) length: usize,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// Direction requested by the player, to be applied on the next tick
    next_direction: Option<Direction>,

    /// Cell freed by the most recent move, if any
    last: Option<Position>,
}

impl Snake {
    /// Create a snake of length 1 in the center of `grid` moving in
    /// `direction`
    pub(crate) fn new(grid: Grid, direction: Direction) -> Snake {
        Snake {
            grid,
            positions: VecDeque::from([grid.center()]),
            length: 1,
            direction,
            next_direction: None,
            last: None,
        }
    }

    pub(crate) fn head(&self) -> Position {
        // `positions` is never empty
        self.positions.front().copied().unwrap_or_else(|| self.grid.center())
    }

    pub(crate) fn positions(&self) -> &VecDeque<Position> {
        &self.positions
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// The cell vacated by the tail during the most recent move
    pub(crate) fn last_vacated(&self) -> Option<Position> {
        self.last
    }

    /// The set of all cells covered by the snake
    pub(crate) fn occupied(&self) -> HashSet<Position> {
        self.positions.iter().copied().collect()
    }

    /// Request a change of direction on the next tick.  Requests to turn
    /// straight back into the snake's neck are ignored.
    pub(crate) fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.next_direction = Some(direction);
        }
    }

    pub(crate) fn apply_pending_direction(&mut self) {
        if let Some(d) = self.next_direction.take() {
            self.direction = d;
        }
    }

    /// Move the snake forwards one cell in the current direction, wrapping
    /// around the grid edges, and drop the tail if the snake is now longer
    /// than `length`
    pub(crate) fn advance(&mut self) {
        let head = self.direction.advance(self.head(), self.grid);
        self.positions.push_front(head);
        self.last = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };
    }

    /// Add a segment behind the tail, continuing the line formed by the last
    /// two segments (or by the direction of travel if the snake is a single
    /// cell), and lengthen the snake to match.
    pub(crate) fn grow(&mut self) {
        let mut segments = self.positions.iter().rev();
        let Some(&tail) = segments.next() else {
            return;
        };
        let (dx, dy) = match segments.next() {
            Some(&before_tail) => (before_tail.x - tail.x, before_tail.y - tail.y),
            None => {
                let (dx, dy) = self.direction.delta();
                (dx * self.grid.cell_size, dy * self.grid.cell_size)
            }
        };
        let new_tail = self.grid.wrap_position(Position {
            x: tail.x - dx,
            y: tail.y - dy,
        });
        self.positions.push_back(new_tail);
        self.length = self.positions.len();
    }

    /// Returns `true` if the head is on the same cell as some other segment
    pub(crate) fn detect_self_collision(&self) -> bool {
        let head = self.head();
        self.positions.len() > 1 && self.positions.iter().skip(1).any(|&p| p == head)
    }

    /// Shrink the snake back to a single cell in the center of the grid,
    /// facing in a random direction
    pub(crate) fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.length = 1;
        self.positions = VecDeque::from([self.grid.center()]);
        self.direction = Direction::random(rng);
        self.next_direction = None;
        self.last = None;
    }
}

impl Drawable for Snake {
    fn position(&self) -> Position {
        self.head()
    }

    fn color(&self) -> Color {
        consts::SNAKE_COLOR
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        if let Some(last) = self.last_vacated() {
            surface.draw_cell(last, consts::BACKGROUND_COLOR);
        }
        for &pos in self.positions() {
            surface.draw_cell(pos, self.color());
        }
    }
}
