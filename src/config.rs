/// Base clock advance per frame, before the speed multiplier is applied
pub const BASE_FLOW_SPEED: f64 = 0.03;

/// Milliseconds between frames (~25 fps)
pub const FRAME_TIME_MS: u64 = 40;

/// Named terminal colors available for the flow pattern
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorName {
    White,
    Matrix,
    Cyan,
    Purple,
    Blue,
    Red,
    Yellow,
}

impl ColorName {
    /// Look up a color by name (case-insensitive). Unknown names yield None.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "white" => Some(ColorName::White),
            "matrix" => Some(ColorName::Matrix),
            "cyan" => Some(ColorName::Cyan),
            "purple" => Some(ColorName::Purple),
            "blue" => Some(ColorName::Blue),
            "red" => Some(ColorName::Red),
            "yellow" => Some(ColorName::Yellow),
            _ => None,
        }
    }
}

/// Brightness level: selects both the character ramp and the color intensity
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Brightness {
    Dim,
    Normal,
    Bright,
}

/// How the primary and secondary colors are mixed across the pattern
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlendStyle {
    Chars,
    Bands,
    Waves,
    Value,
}

impl BlendStyle {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "chars" => Some(BlendStyle::Chars),
            "bands" => Some(BlendStyle::Bands),
            "waves" => Some(BlendStyle::Waves),
            "value" => Some(BlendStyle::Value),
            _ => None,
        }
    }
}

/// Per-run render settings, fixed once arguments are parsed
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub color: ColorName,
    pub blend_color: Option<ColorName>,
    pub brightness: Brightness,
    pub blend_style: BlendStyle,
    pub extra_waves: u8,
    pub speed: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorName::Cyan,
            blend_color: None,
            brightness: Brightness::Normal,
            blend_style: BlendStyle::Chars,
            extra_waves: 0,
            speed: 1.0,
        }
    }
}

impl RenderConfig {
    /// Clock advance per tick for this configuration
    pub fn time_step(&self) -> f64 {
        BASE_FLOW_SPEED * self.speed
    }
}
