//! Assorted constants & hard-coded configuration
use crate::game::Grid;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::num::NonZeroU32;

/// Width of the playing field in pixels
pub(crate) const SCREEN_WIDTH: i32 = 640;

/// Height of the playing field in pixels
pub(crate) const SCREEN_HEIGHT: i32 = 480;

/// Side length of one grid cell in pixels
pub(crate) const CELL_SIZE: i32 = 20;

/// The playing field: 32 × 24 cells
pub(crate) const GRID: Grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE);

/// Default number of snake movements per second
pub(crate) const DEFAULT_TICK_RATE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(rate) => rate,
    None => panic!("DEFAULT_TICK_RATE should be nonzero"),
};

/// Title for the terminal window
pub(crate) const WINDOW_TITLE: &str = "Snake";

/// Number of terminal columns used to draw one grid cell.  Terminal cells are
/// roughly twice as tall as they are wide, so this keeps grid cells square.
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the grid plus a status line above it.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 64,
    height: 25,
};

/// Color of empty cells
pub(crate) const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);

/// Color of the outline drawn around occupied cells
pub(crate) const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);

/// Color of the apple
pub(crate) const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

/// Color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Glyph for the left half of an occupied cell
pub(crate) const CELL_LEFT_SYMBOL: &str = "▏";

/// Glyph for the right half of an occupied cell
pub(crate) const CELL_RIGHT_SYMBOL: &str = "▕";

/// Style for the status bar at the top of the screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
