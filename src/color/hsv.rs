//! Floating-point HSV to RGB conversion
//!
//! Hue lives on the unit circle [0, 1). Saturation and value are also 0-1.
//! Channels are rounded to the nearest integer in 0-255, which keeps the
//! output bit-exact with the classic sector-based conversion.

use libm::{floorf, roundf};

use super::Rgb;

/// Wrap a value into the unit interval by adding or subtracting whole turns.
///
/// Modulo-based, so it stays cheap and exact for arbitrarily large inputs.
pub fn wrap_unit(value: f32) -> f32 {
    value - floorf(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f32) -> u8 {
    roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert an HSV triple to RGB.
///
/// `hue` is wrapped into [0, 1) first; `sat` and `val` are expected in 0-1.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let h = wrap_unit(hue) * 6.0;
    // rem_euclid guards the h == 6.0 corner produced by f32 rounding
    let sector = (floorf(h) as i32).rem_euclid(6);
    let f = h - floorf(h);

    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * f);
    let t = val * (1.0 - sat * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };

    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}
