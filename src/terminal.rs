use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Cell>,
}

/// A single cell in the terminal buffer
#[derive(Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', fg: None }
    }
}

impl Terminal {
    /// Initialize the terminal for drawing: raw mode, alternate screen,
    /// hidden cursor, cleared screen.
    pub fn new() -> io::Result<Self> {
        let (width, height) = size()?;

        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let buffer = vec![Cell::default(); width as usize * height as usize];

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Rebuild the buffer for new dimensions
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![Cell::default(); width as usize * height as usize];
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for cell in &mut self.buffer {
            *cell = Cell::default();
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: u16, y: u16, ch: char, fg: Option<Color>) {
        if x < self.width && y < self.height {
            self.buffer[y as usize * self.width as usize + x as usize] = Cell { ch, fg };
        }
    }

    /// Flush the buffer to the screen in one batched write. The bottom row
    /// is never written; printing its last column would scroll the screen.
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout();
        let mut current: Option<Color> = None;

        queue!(out, ResetColor)?;
        for y in 0..self.height.saturating_sub(1) {
            queue!(out, MoveTo(0, y))?;
            let row_start = y as usize * self.width as usize;

            for cell in &self.buffer[row_start..row_start + self.width as usize] {
                if cell.fg != current {
                    match cell.fg {
                        Some(color) => queue!(out, SetForegroundColor(color))?,
                        None => queue!(out, ResetColor)?,
                    }
                    current = cell.fg;
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        queue!(out, ResetColor)?;

        out.flush()
    }

    /// Check for keypress (non-blocking), returns (code, modifiers)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                return Ok(Some((key_event.code, key_event.modifiers)));
            }
        }
        Ok(None)
    }

    /// Sleep for specified duration
    pub fn sleep(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Clear(ClearType::All), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
