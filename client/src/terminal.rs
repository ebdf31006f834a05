use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::frame::TextFrame;
use common::view::Rgb;

pub trait EventSource {
    /// Waits up to `timeout` for the next terminal event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        event::read().map(Some)
    }
}

pub struct Screen<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    is_raw_mode_owner: bool, // True except in tests.
}

impl Screen<Stdout> {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        Self::take_over(stdout(), cols, rows)
    }
}

impl<W: Write> Screen<W> {
    // Raw mode is already on here, and no `Screen` exists to undo it on failure.
    fn take_over(mut out: W, cols: u16, rows: u16) -> io::Result<Self> {
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            terminal::disable_raw_mode().ok();
            return Err(err);
        }
        Ok(Self {
            out,
            cols,
            rows,
            is_raw_mode_owner: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        self.cols = cols;
        self.rows = rows;
        queue!(self.out, Clear(ClearType::All))
    }

    /// Rows left for the view once the status line is taken.
    pub fn view_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    pub fn draw(&mut self, frame: &TextFrame) -> io::Result<()> {
        let mut current: Option<Rgb> = None;

        for (y, row) in frame.rows().enumerate() {
            queue!(self.out, MoveTo(0, y as u16))?;
            for glyph in row {
                if current != Some(glyph.color) {
                    let Rgb { r, g, b } = glyph.color;
                    queue!(self.out, SetForegroundColor(Color::Rgb { r, g, b }))?;
                    current = Some(glyph.color);
                }
                queue!(self.out, Print(glyph.symbol))?;
            }
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    pub fn draw_status(&mut self, text: &str) -> io::Result<()> {
        let line: String = text.chars().take(self.cols as usize).collect();
        let row = self.view_rows();
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if self.is_raw_mode_owner {
            // Only the instance that switched the terminal over restores it.
            execute!(self.out, ResetColor, Show, LeaveAlternateScreen).ok();
            terminal::disable_raw_mode().ok();
        }
    }
}
