use crate::clock::Clock;
use crate::game::Round;
use crate::input::{InputEvent, InputSource};
use crate::render::Surface;
use rand::Rng;
use std::io;
use std::num::NonZeroU32;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    round: Round<R>,
    tick_rate: NonZeroU32,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(round: Round<R>, tick_rate: NonZeroU32) -> App<R> {
        App { round, tick_rate }
    }

    /// Play until the player quits.  Each frame, all pending input is handled,
    /// the round advances one tick and is drawn, and then `clock` waits out
    /// the rest of the frame.
    pub(crate) fn run<S, I, C>(
        &mut self,
        surface: &mut S,
        input: &mut I,
        clock: &mut C,
    ) -> io::Result<()>
    where
        S: Surface,
        I: InputSource,
        C: Clock,
    {
        tracing::info!(tick_rate = self.tick_rate.get(), "Starting game");
        loop {
            while let Some(event) = input.poll_input()? {
                if event == InputEvent::Quit {
                    tracing::info!(length = self.round.snake().length(), "Quitting");
                    return Ok(());
                }
                self.round.handle_input(event);
            }
            let outcome = self.round.tick();
            tracing::trace!(ate = outcome.ate, collided = outcome.collided, "Tick done");
            self.round.draw(surface)?;
            clock.tick(self.tick_rate);
        }
    }

    #[cfg(test)]
    fn round(&self) -> &Round<R> {
        &self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CountingClock;
    use crate::consts;
    use crate::game::{Direction, Position};
    use crate::input::ScriptedInput;
    use crate::render::RecordingSurface;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn new_app() -> App<ChaCha12Rng> {
        let rng = ChaCha12Rng::seed_from_u64(0x0123_4567_89AB_CDEF);
        let round = Round::new_with_rng(consts::GRID, rng);
        App::new(round, consts::DEFAULT_TICK_RATE)
    }

    #[test]
    fn quit_before_first_frame() {
        let mut app = new_app();
        let mut surface = RecordingSurface::default();
        let mut input = ScriptedInput::new([Some(InputEvent::Quit)]);
        let mut clock = CountingClock::default();
        app.run(&mut surface, &mut input, &mut clock)
            .expect("running with test collaborators");
        assert_eq!(surface.presented, 0);
        assert_eq!(clock.ticks, 0);
        assert_eq!(app.round().snake().head(), Position::new(320, 240));
    }

    #[test]
    fn turn_then_quit() {
        let mut app = new_app();
        let mut surface = RecordingSurface::default();
        let mut input = ScriptedInput::new([
            None,
            None,
            Some(InputEvent::Turn(Direction::Up)),
            None,
            Some(InputEvent::Turn(Direction::Left)),
            Some(InputEvent::Quit),
            Some(InputEvent::Turn(Direction::Down)),
        ]);
        let mut clock = CountingClock::default();
        app.run(&mut surface, &mut input, &mut clock)
            .expect("running with test collaborators");
        assert_eq!(surface.presented, 3);
        assert_eq!(clock.ticks, 3);
        let snake = app.round().snake();
        assert_eq!(snake.head(), Position::new(360, 220));
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), Some(Direction::Left));
        assert!(
            surface.cells.get(&Position::new(360, 220)) == Some(&consts::SNAKE_COLOR),
            "head should have been drawn"
        );
    }
}
