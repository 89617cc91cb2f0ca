use crate::config::Rgb;
use crate::frontend::{InputSource, Renderer};
use crate::grid::{Cell, Grid};
use crate::input::InputEvent;
use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::Result;
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read, poll};

// Terminal columns per grid cell, so cells come out roughly square
const CELL_COLUMNS: TermInt = 2;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    cell_size: i32,
    stdout: Stdout,
}

impl TermManager {
    pub fn new(grid: &Grid) -> crossterm::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, cell_size: grid.cell_size(), stdout: stdout() })
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)?;
        execute!(self.stdout, LeaveAlternateScreen)
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    /// Whether the whole grid fits on screen.
    pub fn fits(&self, grid: &Grid) -> bool {
        let columns = grid.columns() as usize * CELL_COLUMNS as usize;
        columns <= self.width as usize && grid.rows() as usize <= self.height as usize
    }

    fn to_screen(&self, cell: Cell) -> (TermInt, TermInt) {
        let col = (cell.x / self.cell_size) as TermInt * CELL_COLUMNS;
        let row = (cell.y / self.cell_size) as TermInt;
        (col, row)
    }
}

impl Renderer for TermManager {
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) -> Result<()> {
        let (col, row) = self.to_screen(cell);
        if col >= self.width || row >= self.height {
            return Ok(());
        }

        // Background carries the fill, the bracket glyphs carry the border
        let glyphs = if fill == border { "  " } else { "[]" };
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            style::SetBackgroundColor(to_color(fill)),
            style::SetForegroundColor(to_color(border)),
            style::Print(glyphs),
            style::ResetColor
        )?;
        Ok(())
    }

    fn clear(&mut self, background: Rgb) -> Result<()> {
        queue!(
            self.stdout,
            style::SetBackgroundColor(to_color(background)),
            terminal::Clear(ClearType::All),
            style::ResetColor
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl InputSource for TermManager {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(translate_key(&ev));
            }
        }

        Ok(events)
    }
}

fn translate_key(ev: &KeyEvent) -> InputEvent {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL) => {
            InputEvent::Quit
        }
        KeyEvent { code, modifiers: _ } => InputEvent::KeyDown(*code),
    }
}

fn to_color(rgb: Rgb) -> style::Color {
    let Rgb(r, g, b) = rgb;
    style::Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(translate_key(&ev), InputEvent::Quit);

        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::NONE };
        assert_eq!(translate_key(&ev), InputEvent::KeyDown(KeyCode::Char('c')));
    }

    #[test]
    fn colors_map_to_truecolor() {
        assert_eq!(to_color(Rgb(93, 216, 228)), style::Color::Rgb { r: 93, g: 216, b: 228 });
    }
}
