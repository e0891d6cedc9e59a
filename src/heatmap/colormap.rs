//! Diverging blue-white-red scale, close to matplotlib's `coolwarm`.

use plotters::style::RGBColor;

const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
const NEUTRAL: (f64, f64, f64) = (221.0, 221.0, 221.0);
const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

/// Colour for `t` in `[0, 1]`; values outside are clamped.
pub fn coolwarm(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let (from, to, local) = if t < 0.5 {
        (COOL, NEUTRAL, t * 2.0)
    } else {
        (NEUTRAL, WARM, (t - 0.5) * 2.0)
    };
    RGBColor(
        lerp(from.0, to.0, local),
        lerp(from.1, to.1, local),
        lerp(from.2, to.2, local),
    )
}

/// Position of `value` inside `[min, max]`. A flat range maps to the middle.
pub fn normalize(value: u64, min: u64, max: u64) -> f64 {
    if max <= min {
        return 0.5;
    }
    (value.saturating_sub(min)) as f64 / (max - min) as f64
}

fn lerp(a: f64, b: f64, t: f64) -> u8 {
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}
