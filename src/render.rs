//! Frame rendering: turns field values into characters and colors.

use crossterm::style::Color;

use crate::config::{BlendStyle, Brightness, ColorName, RenderConfig};
use crate::field;

/// One rendered cell
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

/// Character ramp for a brightness level, ordered sparse to dense.
/// ASCII only, so the ramps are indexed as bytes.
pub fn ramp(brightness: Brightness) -> &'static [u8] {
    match brightness {
        Brightness::Bright => b"    ....,,,,;;;;====####@@@@",
        Brightness::Normal => b"   ....,,,,;;;;====####@@@@",
        Brightness::Dim => b"  ....,,,;;;;===###@@",
    }
}

/// Quantize a field value into the ramp for the given brightness.
pub fn ramp_char(value: f64, brightness: Brightness) -> char {
    let ramp = ramp(brightness);
    let idx = (value * (ramp.len() - 1) as f64) as usize;
    ramp[idx.min(ramp.len() - 1)] as char
}

/// Terminal color for a named color at the given brightness. Dim and normal
/// share the standard-intensity variant; bright uses the bright variant.
pub fn terminal_color(name: ColorName, brightness: Brightness) -> Color {
    let bright = brightness == Brightness::Bright;
    match (name, bright) {
        (ColorName::White, false) => Color::Grey,
        (ColorName::White, true) => Color::White,
        (ColorName::Matrix, false) => Color::DarkGreen,
        (ColorName::Matrix, true) => Color::Green,
        (ColorName::Cyan, false) => Color::DarkCyan,
        (ColorName::Cyan, true) => Color::Cyan,
        (ColorName::Purple, false) => Color::DarkMagenta,
        (ColorName::Purple, true) => Color::Magenta,
        (ColorName::Blue, false) => Color::DarkBlue,
        (ColorName::Blue, true) => Color::Blue,
        (ColorName::Red, false) => Color::DarkRed,
        (ColorName::Red, true) => Color::Red,
        (ColorName::Yellow, false) => Color::DarkYellow,
        (ColorName::Yellow, true) => Color::Yellow,
    }
}

/// Pick the primary or secondary color for a cell according to the active
/// blend style. Without a secondary color every cell gets the primary.
pub fn blend_color(config: &RenderConfig, ch: char, value: f64, x: u16, y: u16, t: f64) -> ColorName {
    let Some(secondary) = config.blend_color else {
        return config.color;
    };

    match config.blend_style {
        // Sparse glyphs keep the primary, dense glyphs take the secondary
        BlendStyle::Chars => match ch {
            '.' | ',' | ':' | ';' => config.color,
            '=' | '#' | '@' => secondary,
            _ => config.color,
        },
        // Vertical bands nudged sideways by the flow itself
        BlendStyle::Bands => {
            let flow_offset = ((x as f64 + y as f64) * 0.05 + t).sin() * 0.3;
            let band = (x as f64 * 0.1 + flow_offset + t * 0.5).sin() * 0.5 + 0.5;
            if band > 0.5 {
                config.color
            } else {
                secondary
            }
        }
        // Diagonal waves
        BlendStyle::Waves => {
            let wave = ((x as f64 + y as f64) * 0.1 + t).sin() * 0.5 + 0.5;
            if wave > 0.5 {
                config.color
            } else {
                secondary
            }
        }
        // Denser field values take the secondary
        BlendStyle::Value => {
            if value > 0.5 {
                secondary
            } else {
                config.color
            }
        }
    }
}

/// Render one full frame as row-major cells, width x (height - 1).
///
/// The bottom terminal row is never rendered; writing its last cell would
/// scroll the screen.
pub fn render_frame(config: &RenderConfig, width: u16, height: u16, t: f64) -> Vec<Cell> {
    let rows = height.saturating_sub(1);
    let mut cells = Vec::with_capacity(width as usize * rows as usize);

    for y in 0..rows {
        for x in 0..width {
            let value = field::sample(x, y, t, config.extra_waves);
            let ch = ramp_char(value, config.brightness);
            let name = blend_color(config, ch, value, x, y, t);
            cells.push(Cell {
                ch,
                color: terminal_color(name, config.brightness),
            });
        }
    }

    cells
}
