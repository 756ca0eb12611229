mod apple;
mod direction;
mod grid;
mod snake;
pub(crate) use self::apple::{Apple, GridFull};
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, Position};
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::input::InputEvent;
use crate::render::{Drawable, Surface};
use rand::Rng;
use std::io;

/// What happened during a single tick
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TickOutcome {
    /// The snake ate the apple
    pub(crate) ate: bool,
    /// The snake ran into itself and the round was reset
    pub(crate) collided: bool,
}

/// One game of snake: the snake, the apple, and the rules tying them together
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Round<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    apple: Apple,
    /// Apples eaten since the last reset
    eaten: u32,
    /// Longest the snake has been this session
    best_length: usize,
}

impl Round<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Round::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Round<R> {
    pub(crate) fn new_with_rng(grid: Grid, rng: R) -> Round<R> {
        let snake = Snake::new(grid, Direction::Right);
        let mut round = Round {
            rng,
            grid,
            snake,
            apple: Apple::new(grid.center()),
            eaten: 0,
            best_length: 1,
        };
        round.replace_apple();
        round
    }

    /// Advance the game by one step: turn, move, eat, and check for a
    /// collision, in that order
    pub(crate) fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        self.snake.apply_pending_direction();
        self.snake.advance();
        tracing::trace!(
            head = %self.snake.head(),
            direction = ?self.snake.direction(),
            "Snake moved"
        );
        if self.snake.position() == self.apple.position() {
            outcome.ate = true;
            self.eaten += 1;
            self.snake.grow();
            self.best_length = self.best_length.max(self.snake.length());
            tracing::debug!(
                apple = %self.apple.position(),
                length = self.snake.length(),
                "Snake ate the apple"
            );
            if self.relocate_apple().is_err() {
                tracing::info!(
                    length = self.snake.length(),
                    "Snake fills the whole grid; starting a new round"
                );
                self.reset();
            }
        }
        if self.snake.detect_self_collision() {
            outcome.collided = true;
            tracing::info!(
                length = self.snake.length(),
                eaten = self.eaten,
                at = %self.snake.head(),
                "Snake ran into itself; starting a new round"
            );
            self.reset();
        }
        outcome
    }

    fn reset(&mut self) {
        self.snake.reset(&mut self.rng);
        self.eaten = 0;
        self.replace_apple();
    }

    /// Relocate the apple, leaving it where it is if there is nowhere to put
    /// it.  A single-cell snake only fills a grid of one cell.
    fn replace_apple(&mut self) {
        if let Err(e) = self.relocate_apple() {
            tracing::warn!(apple = %self.apple.position(), "{e}");
        }
    }

    fn relocate_apple(&mut self) -> Result<(), GridFull> {
        let pos = Apple::relocate(self.grid, &self.snake.occupied(), &mut self.rng)?;
        self.apple.place(pos);
        Ok(())
    }
}

impl<R> Round<R> {
    pub(crate) fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::Turn(d) = event {
            self.snake.set_pending_direction(d);
            tracing::debug!(
                requested = ?d,
                current = ?self.snake.direction(),
                pending = ?self.snake.pending_direction(),
                "Turn requested"
            );
        }
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub(crate) fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Text for the status line
    pub(crate) fn status(&self) -> String {
        format!(
            "Length: {}  Apples: {}  Best: {}",
            self.snake.length(),
            self.eaten,
            self.best_length
        )
    }

    pub(crate) fn draw<S: Surface>(&self, surface: &mut S) -> io::Result<()> {
        surface.clear(consts::BACKGROUND_COLOR);
        // The apple may sit on the cell the snake just vacated
        self.snake.draw(surface);
        self.apple.draw(surface);
        surface.set_status(&self.status());
        surface.present()
    }
}
