use crate::*;

/// Hue reached at the far end of the depth ramp.
pub const HUE_RANGE_DEGREES: f32 = 300.0;

/// Fully saturated, full value HSV to RGB for a hue in degrees.
///
/// Hues outside `[0, 360)` wrap around. Channels are truncated, not rounded.
pub fn hsv_to_rgb(h_degrees: f32) -> Rgba {
    let mut h = h_degrees % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    let h_prime = h / 60.0;
    let x = 1.0 - ((h_prime % 2.0) - 1.0).abs();
    let (r, g, b) = match h_prime as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    Rgba::opaque(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(c: f32) -> u8 {
    (c as f64 * 255.0) as u8
}

/// Map `x` in `[0, 1]` onto the red to violet ramp. Out of range input is
/// clamped, NaN maps like 0.
pub fn hue_map(x: f32) -> Rgba {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    hsv_to_rgb(x * HUE_RANGE_DEGREES)
}
