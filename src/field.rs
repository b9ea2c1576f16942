//! Flow field synthesis.
//!
//! The field is a weighted sum of sine waves over grid position and time,
//! normalized to [0, 1]. It is a pure function: the same cell at the same
//! time always has the same value.

/// Spatial frequency of the base pattern
const SCALE: f64 = 0.08;

/// Auxiliary wave layers, added on top of the base pattern in this order
/// when extra waves are requested.
const EXTRA_WAVES: [fn(f64, f64, f64) -> f64; 3] = [
    // Diagonal crossing
    |x, y, t| ((x - y) * 0.06 + t * 0.9).sin() * 0.2,
    // Horizontal drift
    |_, y, t| (y * 0.07 - t * 0.7).sin() * 0.15,
    // Vertical sweep
    |x, _, t| (x * 0.09 + t * 1.1).sin() * 0.25,
];

/// Sample the flow field at grid cell (x, y) and time t.
///
/// `extra_waves` selects how many auxiliary layers (0-3) to add. The result
/// is clamped to [0, 1] so it can index a character ramp directly.
pub fn sample(x: u16, y: u16, t: f64, extra_waves: u8) -> f64 {
    let fx = x as f64;
    let fy = y as f64;

    let mut value = ((fx + fy) * SCALE + t).sin() * 0.5
        + (fx * SCALE - t * 1.2).sin() * 0.3
        + (fy * SCALE + t * 0.8).sin() * 0.2;

    for wave in EXTRA_WAVES.iter().take(extra_waves as usize) {
        value += wave(fx, fy, t);
    }

    ((value + 1.5) / 3.0).clamp(0.0, 1.0)
}
