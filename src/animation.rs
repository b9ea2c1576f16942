//! Timer-driven animation loop.

use crossterm::event::{KeyCode, KeyModifiers};
use std::io;

use crate::config::{RenderConfig, FRAME_TIME_MS};
use crate::render;
use crate::terminal::Terminal;

/// Monotonic animation clock, advanced by a fixed step once per tick.
pub struct Clock {
    t: f64,
    step: f64,
}

impl Clock {
    pub fn new(step: f64) -> Self {
        Self { t: 0.0, step }
    }

    pub fn now(&self) -> f64 {
        self.t
    }

    pub fn tick(&mut self) {
        self.t += self.step;
    }
}

/// True when the pressed key should stop the animation. In raw mode Ctrl+C
/// arrives as a key event rather than a signal.
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run the animation until interrupted. Terminal state is restored when the
/// `Terminal` drops, including on write errors propagated out of the loop.
pub fn run(config: RenderConfig) -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut clock = Clock::new(config.time_step());

    let (init_w, init_h) = term.size();
    let mut width = init_w;
    let mut height = init_h;

    loop {
        // A resize takes effect on the frame after it happens
        let (new_w, new_h) = crossterm::terminal::size().unwrap_or((width, height));
        if new_w != width || new_h != height {
            width = new_w;
            height = new_h;
            term.resize(width, height);
            term.clear_screen()?;
        }

        if let Some((code, modifiers)) = term.check_key()? {
            if is_quit_key(code, modifiers) {
                break;
            }
        }

        let cells = render::render_frame(&config, width, height, clock.now());
        term.clear();
        let rows = height.saturating_sub(1);
        for y in 0..rows {
            let row_start = y as usize * width as usize;
            for x in 0..width {
                let cell = cells[row_start + x as usize];
                term.set(x, y, cell.ch, Some(cell.color));
            }
        }
        term.present()?;

        clock.tick();
        term.sleep(FRAME_TIME_MS);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_FLOW_SPEED;

    #[test]
    fn clock_starts_at_zero() {
        let clock = Clock::new(0.03);
        assert_eq!(clock.now(), 0.0);
    }

    #[test]
    fn clock_advances_by_step() {
        let mut clock = Clock::new(0.03);
        clock.tick();
        clock.tick();
        assert!((clock.now() - 0.06).abs() < 1e-12);
    }

    #[test]
    fn clock_step_scales_with_speed() {
        let config = RenderConfig {
            speed: 2.0,
            ..RenderConfig::default()
        };
        let mut clock = Clock::new(config.time_step());
        clock.tick();
        assert!((clock.now() - BASE_FLOW_SPEED * 2.0).abs() < 1e-12);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit_key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(is_quit_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_quit_key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!is_quit_key(KeyCode::Char(' '), KeyModifiers::NONE));
    }
}
