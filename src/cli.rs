//! Forgiving command line parsing.
//!
//! Anything invalid is ignored and the current setting is kept: unknown
//! flags, bad color names, out-of-range numbers. The animation always
//! starts, there is no error exit.

use crate::config::{BlendStyle, Brightness, ColorName, RenderConfig};

/// Parse command line arguments (program name already stripped).
pub fn parse_args(args: &[String]) -> RenderConfig {
    let mut config = RenderConfig::default();

    for (i, arg) in args.iter().enumerate() {
        if arg.starts_with('-') {
            match arg.to_lowercase().as_str() {
                "-b" | "--bright" => config.brightness = Brightness::Bright,
                "-d" | "--dim" => config.brightness = Brightness::Dim,
                "--blend" => {
                    if let Some(color) = args.get(i + 1).and_then(|s| ColorName::parse(s)) {
                        config.blend_color = Some(color);
                    }
                }
                "--blend-style" => {
                    if let Some(style) = args.get(i + 1).and_then(|s| BlendStyle::parse(s)) {
                        config.blend_style = style;
                    }
                }
                "--waves" => {
                    if let Some(n) = args.get(i + 1).and_then(|s| s.parse::<i64>().ok()) {
                        if (1..=3).contains(&n) {
                            config.extra_waves = n as u8;
                        }
                    }
                }
                "--speed" => {
                    if let Some(s) = args.get(i + 1).and_then(|s| s.parse::<f64>().ok()) {
                        if s > 0.0 && s <= 5.0 {
                            config.speed = s;
                        }
                    }
                }
                // Unknown flags are ignored
                _ => {}
            }
        } else if config.blend_color.is_none() {
            // Positional color; stops applying once a secondary color exists,
            // so the value token after --blend never overwrites the primary.
            if let Some(color) = ColorName::parse(arg) {
                config.color = color;
            }
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RenderConfig {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse_args(&owned)
    }

    #[test]
    fn empty_args_give_defaults() {
        let config = parse(&[]);
        assert_eq!(config.color, ColorName::Cyan);
        assert_eq!(config.blend_color, None);
        assert_eq!(config.brightness, Brightness::Normal);
        assert_eq!(config.blend_style, BlendStyle::Chars);
        assert_eq!(config.extra_waves, 0);
        assert!((config.speed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn color_blend_and_style() {
        let config = parse(&["cyan", "--blend", "blue", "--blend-style", "waves"]);
        assert_eq!(config.color, ColorName::Cyan);
        assert_eq!(config.blend_color, Some(ColorName::Blue));
        assert_eq!(config.blend_style, BlendStyle::Waves);
        assert_eq!(config.brightness, Brightness::Normal);
    }

    #[test]
    fn blend_value_does_not_become_primary() {
        let config = parse(&["--blend", "red"]);
        assert_eq!(config.color, ColorName::Cyan);
        assert_eq!(config.blend_color, Some(ColorName::Red));
    }

    #[test]
    fn matrix_bright() {
        let config = parse(&["matrix", "-b"]);
        assert_eq!(config.color, ColorName::Matrix);
        assert_eq!(config.brightness, Brightness::Bright);
    }

    #[test]
    fn dim_flag() {
        let config = parse(&["--dim"]);
        assert_eq!(config.brightness, Brightness::Dim);
    }

    #[test]
    fn waves_out_of_range_ignored() {
        let config = parse(&["--waves", "5"]);
        assert_eq!(config.extra_waves, 0);

        let config = parse(&["--waves", "0"]);
        assert_eq!(config.extra_waves, 0);

        let config = parse(&["--waves", "nope"]);
        assert_eq!(config.extra_waves, 0);
    }

    #[test]
    fn waves_in_range() {
        let config = parse(&["--waves", "2"]);
        assert_eq!(config.extra_waves, 2);
    }

    #[test]
    fn speed_zero_ignored() {
        let config = parse(&["--speed", "0"]);
        assert!((config.speed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn speed_out_of_range_ignored() {
        let config = parse(&["--speed", "5.1"]);
        assert!((config.speed - 1.0).abs() < f64::EPSILON);

        let config = parse(&["--speed", "NaN"]);
        assert!((config.speed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn speed_in_range() {
        let config = parse(&["--speed", "0.5"]);
        assert!((config.speed - 0.5).abs() < f64::EPSILON);
        assert!((config.time_step() - 0.015).abs() < 1e-12);
    }

    #[test]
    fn unknown_flags_ignored() {
        let config = parse(&["--frobnicate", "red", "-x"]);
        assert_eq!(config.color, ColorName::Red);
        assert_eq!(config.blend_color, None);
    }

    #[test]
    fn case_insensitive() {
        let config = parse(&["MATRIX", "--BLEND", "Yellow", "--Blend-Style", "VALUE"]);
        assert_eq!(config.color, ColorName::Matrix);
        assert_eq!(config.blend_color, Some(ColorName::Yellow));
        assert_eq!(config.blend_style, BlendStyle::Value);
    }

    #[test]
    fn invalid_blend_color_ignored() {
        let config = parse(&["purple", "--blend", "chartreuse"]);
        assert_eq!(config.color, ColorName::Purple);
        assert_eq!(config.blend_color, None);
    }
}
