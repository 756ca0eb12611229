use crate::command::Command;
use crate::game::Direction;
use crossterm::event::{poll, read, Event};
use std::io;
use std::time::Duration;

/// A player request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputEvent {
    Quit,
    Turn(Direction),
}

impl From<Command> for InputEvent {
    fn from(cmd: Command) -> InputEvent {
        match cmd {
            Command::Quit => InputEvent::Quit,
            Command::Up => InputEvent::Turn(Direction::Up),
            Command::Down => InputEvent::Turn(Direction::Down),
            Command::Left => InputEvent::Turn(Direction::Left),
            Command::Right => InputEvent::Turn(Direction::Right),
        }
    }
}

/// A source of player input that never blocks
pub(crate) trait InputSource {
    /// Return the next pending event, or `None` if nothing is waiting
    fn poll_input(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Keyboard input read from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_input(&mut self) -> io::Result<Option<InputEvent>> {
        while poll(Duration::ZERO)? {
            if let Some(ev) = translate(&read()?) {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }
}

/// Convert a terminal event to an `InputEvent`, if it's one the game cares
/// about
fn translate(event: &Event) -> Option<InputEvent> {
    Command::from_key_event(event.as_key_press_event()?).map(InputEvent::from)
}

/// An `InputSource` that replays a fixed list of events.  `None` entries mark
/// the end of the input for one tick.
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScriptedInput(std::collections::VecDeque<Option<InputEvent>>);

#[cfg(test)]
impl ScriptedInput {
    pub(crate) fn new<I: IntoIterator<Item = Option<InputEvent>>>(events: I) -> ScriptedInput {
        ScriptedInput(events.into_iter().collect())
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn poll_input(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self.0.pop_front().flatten())
    }
}
