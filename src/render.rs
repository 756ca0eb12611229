use crate::consts;
use crate::game::{Grid, Position};
use crate::util::get_display_area;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::Widget,
    Terminal,
};
use std::io;

/// Something that grid cells can be painted on.  Drawing calls accumulate
/// until `present()` is called.
pub(crate) trait Surface {
    /// Paint every cell with `color`
    fn clear(&mut self, color: Color);

    /// Paint the cell at `pos` with `color`.  Positions that are not cells of
    /// the surface's grid are ignored.
    fn draw_cell(&mut self, pos: Position, color: Color);

    /// Set the text shown alongside the grid
    fn set_status(&mut self, _status: &str) {}

    /// Show everything drawn since the last `present()`
    fn present(&mut self) -> io::Result<()>;
}

/// A game object that knows how to paint itself on a [`Surface`]
pub(crate) trait Drawable {
    fn position(&self) -> Position;
    fn color(&self) -> Color;
    fn draw<S: Surface>(&self, surface: &mut S);
}

/// A [`Surface`] drawn on a terminal with ratatui.  Each grid cell takes up
/// [`consts::CELL_COLUMNS`] terminal columns and one terminal row.
#[derive(Debug)]
pub(crate) struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    grid: Grid,
    columns: u16,
    rows: u16,
    cells: Vec<Color>,
    status: String,
}

impl<B: Backend> TerminalSurface<B> {
    pub(crate) fn new(terminal: Terminal<B>, grid: Grid) -> TerminalSurface<B> {
        let columns = u16::try_from(grid.columns()).unwrap_or_default();
        let rows = u16::try_from(grid.rows()).unwrap_or_default();
        TerminalSurface {
            terminal,
            grid,
            columns,
            rows,
            cells: vec![consts::BACKGROUND_COLOR; usize::from(columns) * usize::from(rows)],
            status: String::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn draw_cell(&mut self, pos: Position, color: Color) {
        let Some((column, row)) = self.grid.cell_index(pos) else {
            return;
        };
        let i = usize::from(row) * usize::from(self.columns) + usize::from(column);
        if let Some(cell) = self.cells.get_mut(i) {
            *cell = color;
        }
    }

    fn set_status(&mut self, status: &str) {
        status.clone_into(&mut self.status);
    }

    fn present(&mut self) -> io::Result<()> {
        let view = GridView {
            columns: self.columns,
            rows: self.rows,
            cells: &self.cells,
            status: &self.status,
        };
        self.terminal
            .draw(|frame| frame.render_widget(&view, frame.area()))?;
        Ok(())
    }
}

/// Widget showing a status line above a grid of colored cells
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GridView<'a> {
    columns: u16,
    rows: u16,
    /// Cell colors, row by row
    cells: &'a [Color],
    status: &'a str,
}

impl Widget for &GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(format!(" {}", self.status), consts::STATUS_BAR_STYLE)
            .render(status_area, buf);
        let mut canvas = Canvas {
            area: field_area,
            buf,
        };
        let columns = usize::from(self.columns).max(1);
        for (i, &color) in self.cells.iter().enumerate() {
            let (Ok(column), Ok(row)) = (u16::try_from(i % columns), u16::try_from(i / columns))
            else {
                break;
            };
            if row >= self.rows {
                break;
            }
            canvas.draw_cell(column, row, color);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, column: u16, row: u16, color: Color) {
        let (left, right) = if color == consts::BACKGROUND_COLOR {
            (" ", " ")
        } else {
            (consts::CELL_LEFT_SYMBOL, consts::CELL_RIGHT_SYMBOL)
        };
        let Some(x) = column
            .checked_mul(consts::CELL_COLUMNS)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        if y >= self.area.bottom() {
            return;
        }
        for (x, symbol) in [(x, left), (x.saturating_add(1), right)] {
            if x >= self.area.right() {
                continue;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_symbol(symbol)
                    .set_fg(consts::BORDER_COLOR)
                    .set_bg(color);
            }
        }
    }
}

/// A [`Surface`] that remembers what was drawn on it
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RecordingSurface {
    pub(crate) cells: std::collections::HashMap<Position, Color>,
    pub(crate) status: String,
    pub(crate) presented: usize,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, _color: Color) {
        self.cells.clear();
    }

    fn draw_cell(&mut self, pos: Position, color: Color) {
        if color == consts::BACKGROUND_COLOR {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, color);
        }
    }

    fn set_status(&mut self, status: &str) {
        status.clone_into(&mut self.status);
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}
